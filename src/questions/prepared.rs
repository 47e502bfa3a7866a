// git-cz - A configurable commit wizard for Git.
// Copyright (C) 2025-2026 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Extraction of defaults from a prepared commit message.
//!
//! Git keeps the in-progress message in `.git/COMMIT_EDITMSG`. Its first
//! meaningful line seeds the subject default; the remaining ones, joined
//! with `|`, seed the body default.

use std::{fs, io, path::Path};

/// The path of the prepared commit message, relative to the repo root.
const COMMIT_EDITMSG: &str = ".git/COMMIT_EDITMSG";

/// The meaningful content of a prepared commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMessage {
    /// The first meaningful line.
    subject: String,
    /// The remaining meaningful lines, joined with `|`.
    body: Option<String>,
}

impl PreparedMessage {
    /// Loads the prepared commit message of the current repository.
    ///
    /// A missing or unreadable file simply yields no message.
    #[tracing::instrument(name = "load_prepared_message", level = "trace")]
    pub fn load() -> Option<Self> {
        Self::read_from(Path::new(COMMIT_EDITMSG))
    }

    /// Reads a prepared commit message from a file.
    pub fn read_from(path: &Path) -> Option<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(
                        ?error,
                        ?path,
                        "cannot read the prepared commit message"
                    );
                }
                None
            }
        }
    }

    /// Parses the meaningful lines out of a prepared commit message.
    ///
    /// Comment lines and blank lines are dropped; any newline convention is
    /// accepted.
    pub fn parse(contents: &str) -> Option<Self> {
        let contents = contents.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = contents.split('\n').filter(|line| {
            !line.starts_with('#') && !line.trim().is_empty()
        });

        let subject = lines.next()?.to_owned();
        let body = lines.collect::<Vec<_>>().join("|");
        let body = if body.is_empty() { None } else { Some(body) };

        Some(Self { subject, body })
    }

    /// Gets the subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Gets the body, if at least two meaningful lines exist.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use assert_fs::{TempDir, prelude::*};

    use super::*;

    #[test]
    fn the_first_line_is_the_subject_and_the_rest_is_the_body() {
        let message =
            PreparedMessage::parse("Fix thing\n\nSecond line\nThird line")
                .unwrap();

        assert_eq!(message.subject(), "Fix thing");
        assert_eq!(message.body(), Some("Second line|Third line"));
    }

    #[test]
    fn a_single_line_has_no_body() {
        let message = PreparedMessage::parse("Fix thing\n").unwrap();

        assert_eq!(message.subject(), "Fix thing");
        assert_eq!(message.body(), None);
    }

    #[test]
    fn comment_lines_are_dropped() {
        let contents = "# Please enter the commit message.\n\
            Fix thing\n\
            # On branch main\n\
            Details\n";
        let message = PreparedMessage::parse(contents).unwrap();

        assert_eq!(message.subject(), "Fix thing");
        assert_eq!(message.body(), Some("Details"));
    }

    #[test]
    fn blank_lines_are_dropped() {
        let message =
            PreparedMessage::parse("\n   \nFix thing\n\n  \nDetails\n\n")
                .unwrap();

        assert_eq!(message.subject(), "Fix thing");
        assert_eq!(message.body(), Some("Details"));
    }

    #[test]
    fn all_newline_conventions_are_accepted() {
        let message =
            PreparedMessage::parse("Fix thing\r\nSecond\rThird\n").unwrap();

        assert_eq!(message.subject(), "Fix thing");
        assert_eq!(message.body(), Some("Second|Third"));
    }

    #[test]
    fn an_empty_or_comment_only_file_has_no_message() {
        assert_eq!(PreparedMessage::parse(""), None);
        assert_eq!(PreparedMessage::parse("# Nothing here\n\n"), None);
    }

    #[test]
    fn a_message_is_read_from_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.child("COMMIT_EDITMSG");
        file.write_str("Fix thing\n\nSecond line\nThird line\n").unwrap();

        let message = PreparedMessage::read_from(file.path()).unwrap();

        assert_eq!(message.subject(), "Fix thing");
        assert_eq!(message.body(), Some("Second line|Third line"));
    }

    #[test]
    fn a_missing_file_yields_no_message() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.child("COMMIT_EDITMSG");

        assert_eq!(PreparedMessage::read_from(path.path()), None);
    }
}
