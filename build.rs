//! Build script tagging the crate version with the current Git revision.

use std::{io, process::Command};

fn main() {
    let cargo_version = env!("CARGO_PKG_VERSION");
    let version = version_with_git(cargo_version)
        .unwrap_or_else(|_| String::from(cargo_version));

    println!("cargo:rustc-env=VERSION_WITH_GIT={version}");
}

/// Builds the version string, tagging it with the Git revision.
///
/// When the worktree is checked out at the tag matching the cargo version, the
/// plain cargo version is kept. Otherwise the short revision is appended,
/// with a `-modified` marker when the worktree is dirty.
fn version_with_git(cargo_version: &str) -> io::Result<String> {
    if git(&["describe", "--always", "--dirty=-modified"])?
        == format!("v{cargo_version}")
    {
        Ok(String::from(cargo_version))
    } else {
        let revision = git(&["rev-parse", "--short", "HEAD"])?;
        let state = if git(&["status", "--porcelain"])?.is_empty() {
            ""
        } else {
            "-modified"
        };
        Ok(format!("{cargo_version}+{revision}{state}"))
    }
}

fn git(args: &[&str]) -> io::Result<String> {
    let output = Command::new("git").args(args).output()?;
    let stdout = String::from_utf8(output.stdout)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    Ok(stdout.trim().to_owned())
}
