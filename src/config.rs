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

//! Configuration for git-cz.

use std::{fs, io, path::PathBuf, process::Command};

use indexmap::{IndexMap, indexmap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{questions::QuestionName, tracing::LogResult as _};

/// An error that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path of the configuration file cannot be resolved.
    #[error("Failed to get the configuration file path")]
    ConfigFileError(#[from] ConfigFileError),
    /// An error has occurred while reading the configuration file.
    #[error("Failed to read {CONFIG_FILE_NAME}")]
    ReadError(#[from] io::Error),
    /// The configuration file is invalid.
    #[error("Invalid configuration in {CONFIG_FILE_NAME}")]
    InvalidConfig(#[from] FromTomlError),
}

/// An error that can occur when parsing the TOML.
#[derive(Debug, Error)]
pub enum FromTomlError {
    /// The version of the configuration is not supported.
    #[error("Configuration version {0} is not supported")]
    UnsupportedVersion(String),
    /// The configuration cannot be parsed.
    #[error("Failed to parse into a valid configuration")]
    ParseError(#[from] toml::de::Error),
}

/// An error that can occur when building the config file path.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The Git repo root cannot be resolved.
    #[error("Failed to get the Git repo root")]
    RepoRootError(#[from] RepoRootError),
}

/// An error that can occur when getting the Git repo root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    /// The `git` command cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] io::Error),
    /// Git has returned an error.
    #[error("{0}")]
    GitError(String),
    /// The output of the git command is not proper UTF-8.
    #[error("The output of the git command is not proper UTF-8")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

/// A minimal configuration to get the version.
///
/// The configuration format for git-cz can evolve with time. It is versioned
/// for this purpose, so that git-cz is able to select the proper parser. This
/// struct allows to parse any configuration as long as it contains a version
/// field.
#[derive(Debug, Serialize, Deserialize)]
struct MinimalConfig {
    /// The version of the configuration.
    version: String,
}

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "git-cz.toml";
/// The current version of the configuration file.
pub const VERSION: &str = "0.1";

/// The default commit template.
const DEFAULT_TEMPLATE: &str = include_str!("../templates/COMMIT_EDITMSG");

/// The git-cz configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The version of the configuration.
    pub version: String,
    /// The valid commit types, in presentation order, with their description.
    pub types: IndexMap<String, String>,
    /// The accepted scopes.
    pub scopes: Vec<String>,
    /// Per-type scope lists, taking precedence over `scopes`.
    pub scope_overrides: IndexMap<String, Vec<String>>,
    /// Whether to offer typing a custom scope.
    pub allow_custom_scopes: bool,
    /// Whether to ask for a ticket number.
    pub allow_ticket_number: bool,
    /// Whether the ticket number can be left empty.
    pub ticket_number_required: bool,
    /// The pattern valid ticket numbers are made of.
    pub ticket_number_regexp: Option<String>,
    /// The types for which a breaking change prompt is offered.
    ///
    /// Type names are matched case-insensitively.
    pub allow_breaking_changes: Vec<String>,
    /// Whether to ask for breaking changes before any other question.
    pub ask_for_breaking_change_first: bool,
    /// Whether the subject starts with an upper-case letter.
    pub upper_case_subject: bool,
    /// The maximum length of the subject.
    pub subject_limit: usize,
    /// The questions to omit entirely.
    pub skip_questions: Vec<QuestionName>,
    /// The locale of the built-in prompt messages.
    pub locale: Locale,
    /// Overrides for the prompt messages.
    pub messages: MessageOverrides,
    /// The templates.
    pub templates: Templates,
}

/// The locale of the built-in prompt messages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// Simplified Chinese, the historical default.
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// English.
    #[serde(rename = "en")]
    En,
}

/// Overrides for the prompt messages.
///
/// Any message left unset falls back to the built-in default for the
/// configured locale.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOverrides {
    /// The message of the type question.
    pub r#type: Option<String>,
    /// The message of the scope selection question.
    pub scope: Option<String>,
    /// The message of the custom scope question.
    pub custom_scope: Option<String>,
    /// The message of the ticket number question.
    pub ticket_number: Option<String>,
    /// The ticket number message used when a pattern is configured.
    pub ticket_number_pattern: Option<String>,
    /// The message of the subject question.
    pub subject: Option<String>,
    /// The message of the body question.
    pub body: Option<String>,
    /// The message of the breaking change question.
    pub breaking: Option<String>,
    /// The message of the footer question.
    pub footer: Option<String>,
    /// The message of the confirmation question.
    pub confirm_commit: Option<String>,
}

/// Templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Templates {
    /// The commit message template.
    pub commit: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            commit: String::from(DEFAULT_TEMPLATE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let default_types = indexmap! {
            "feat" => "A new feature",
            "fix" => "A bug fix",
            "docs" => "Documentation only changes",
            "style" => "Changes that do not affect the meaning of the code",
            "refactor" => "A code change that neither fixes a bug nor adds a feature",
            "perf" => "A code change that improves performance",
            "test" => "Adding missing tests or correcting existing tests",
            "build" => "Changes that affect the build system or external dependencies",
            "ci" => "Changes to the CI configuration files and scripts",
            "chore" => "Other changes that don't modify src or test files",
            "revert" => "Reverts a previous commit",
            "wip" => "Work in progress, to be squashed before integration",
        };

        Self {
            version: String::from(VERSION),
            types: default_types
                .into_iter()
                .map(|(key, value)| (String::from(key), String::from(value)))
                .collect(),
            scopes: vec![],
            scope_overrides: IndexMap::new(),
            allow_custom_scopes: true,
            allow_ticket_number: false,
            ticket_number_required: false,
            ticket_number_regexp: None,
            allow_breaking_changes: vec![
                String::from("feat"),
                String::from("fix"),
            ],
            ask_for_breaking_change_first: false,
            upper_case_subject: false,
            subject_limit: 100,
            skip_questions: vec![],
            locale: Locale::default(),
            messages: MessageOverrides::default(),
            templates: Templates::default(),
        }
    }
}

impl Config {
    /// Loads the configuration of the repo or fallbacks to the default.
    #[tracing::instrument(name = "load_config", level = "trace")]
    pub fn load() -> Result<Self, LoadError> {
        let config_file = config_file()?;
        match fs::read_to_string(&config_file) {
            Ok(config) => {
                tracing::debug!(?config_file, "loading the configuration");
                Ok(Self::from_toml(&config)?)
            }

            Err(error) => match error.kind() {
                io::ErrorKind::NotFound => {
                    tracing::debug!("no configuration, using the default");
                    Ok(Self::default())
                }
                _ => Err(LoadError::ReadError(error)).log_err(),
            },
        }
    }

    /// Builds the configuration from its TOML representation.
    pub fn from_toml(toml: &str) -> Result<Self, FromTomlError> {
        let minimal_config: MinimalConfig = toml::from_str(toml)?;

        match minimal_config.version.as_str() {
            VERSION => Ok(toml::from_str(toml)?),
            version => {
                Err(FromTomlError::UnsupportedVersion(version.to_owned()))
                    .log_err()
            }
        }
    }
}

/// Returns the path of the configuration file.
pub fn config_file() -> Result<PathBuf, ConfigFileError> {
    Ok(repo_root()?.join(CONFIG_FILE_NAME))
}

/// Returns the path of the Git repo root.
fn repo_root() -> Result<PathBuf, RepoRootError> {
    let git_rev_parse = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()?;

    if git_rev_parse.status.success() {
        let repo_root = String::from_utf8(git_rev_parse.stdout)?;
        Ok(PathBuf::from(repo_root.trim()))
    } else {
        let git_error = String::from_utf8(git_rev_parse.stderr)?;
        Err(RepoRootError::GitError(git_error.trim().to_owned()))
    }
}
