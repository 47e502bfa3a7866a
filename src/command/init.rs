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

//! The `init` subcommand.

use std::fs;

use askama::Template;
use clap::Parser;
use eyre::{Result, bail};
use inquire::Select;
use thiserror::Error;

use crate::{config::config_file, hint, success};

use super::helpers::ensure_in_git_worktree;

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Use the default configuration.
    #[arg(long, short = 'd')]
    default: bool,
    /// Force the init process.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Usage errors of `git cz init`.
#[derive(Debug, Error)]
pub enum InitError {
    /// A configuration already exists.
    #[error("There is already a git-cz.toml in the current repository")]
    ExistingConfig,
}

/// Parameters to generate a `git-cz.toml`.
#[derive(Debug, Template)]
#[template(path = "git-cz.toml.jinja")]
struct ConfigTemplate {
    /// Whether to include a scope list.
    with_scope_list: bool,
    /// Whether to offer typing a custom scope.
    allow_custom_scopes: bool,
    /// Whether to ask for a ticket number.
    allow_ticket_number: bool,
    /// Whether the ticket number can be left empty.
    ticket_number_required: bool,
}

impl Default for ConfigTemplate {
    fn default() -> Self {
        Self {
            with_scope_list: true,
            allow_custom_scopes: true,
            allow_ticket_number: false,
            ticket_number_required: false,
        }
    }
}

impl super::Command for Init {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config_file = config_file()?;

        if !self.force && config_file.exists() {
            bail!(InitError::ExistingConfig);
        }

        let config = if self.default {
            ConfigTemplate::default()
        } else {
            ConfigTemplate::run_wizard()?
        };

        fs::write(config_file, format!("{config}\n"))?;

        success!("A git-cz.toml has been created!");
        hint!("You can now edit it to adjust the configuration.");

        Ok(())
    }
}

impl ConfigTemplate {
    /// Runs the wizard to fill the parameters for the configuration.
    fn run_wizard() -> Result<Self> {
        let (with_scope_list, allow_custom_scopes) = ask_scopes()?;
        let (allow_ticket_number, ticket_number_required) = ask_ticket()?;

        Ok(Self {
            with_scope_list,
            allow_custom_scopes,
            allow_ticket_number,
            ticket_number_required,
        })
    }
}

/// Asks how the scope should be chosen.
fn ask_scopes() -> Result<(bool, bool)> {
    let options = vec![
        "Select the scope from a list",
        "Type a custom scope",
        "Select from a list or type a custom scope",
    ];

    let choice = Select::new("How should the scope be chosen?", options)
        .with_starting_cursor(2)
        .prompt()?;

    let choice = match choice {
        "Select the scope from a list" => (true, false),
        "Type a custom scope" => (false, true),
        _ => (true, true),
    };

    Ok(choice)
}

/// Asks whether git-cz should ask for a ticket number.
fn ask_ticket() -> Result<(bool, bool)> {
    let options = vec![
        "Require a ticket number",
        "Ask for an optional ticket number",
        "Do not ask for a ticket number",
    ];

    let choice =
        Select::new("Should git-cz ask for a ticket number?", options)
            .with_starting_cursor(2)
            .prompt()?;

    let choice = match choice {
        "Require a ticket number" => (true, true),
        "Ask for an optional ticket number" => (true, false),
        _ => (false, false),
    };

    Ok(choice)
}
