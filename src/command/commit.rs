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

//! The `commit` subcommand.

mod backend;

use std::fmt;

use clap::Parser;
use eyre::Result;
use inquire::{Select, Text};

use crate::{
    command::helpers::{ensure_in_git_worktree, load_config},
    config::Config,
    error,
    questions::{
        self, Answer, Answers, Choice, Confirmation, Question, QuestionKind,
        QuestionName, Validation, Visibility,
    },
    render::MessageRenderer,
    warning,
};

use self::backend::{Backend as _, GitBackend};

/// The size of a page in the terminal.
const PAGE_SIZE: usize = 15;

/// The separator framing the commit message preview.
const PREVIEW_FRAME: &str =
    "###--------------------------------------------------------###";

/// The label of separator rows in list prompts.
const SEPARATOR_LABEL: &str = "──────────────";

/// The commit command.
#[derive(Debug, Parser)]
pub struct Commit {
    /// Print the commit message instead of calling `git commit`.
    #[arg(long)]
    print_only: bool,
    /// Extra arguments to be passed to `git commit`.
    #[arg(last = true)]
    extra_args: Vec<String>,
}

impl super::Command for Commit {
    #[tracing::instrument(name = "commit", level = "trace", skip_all)]
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config = load_config()?;
        let renderer = MessageRenderer::new(&config)?;

        let Some((answers, confirmation)) = run_wizard(&config, &renderer)?
        else {
            warning!("The commit has been aborted.");
            return Ok(());
        };

        let message = renderer.render(&answers)?;

        if self.print_only {
            println!("{message}");
        } else {
            let edit = confirmation == Confirmation::Edit;
            GitBackend::new(&self.extra_args).call(&message, edit)?;
        }

        Ok(())
    }
}

/// Runs the wizard, returning the answers and the confirmation outcome.
///
/// `None` means the user chose to abort at the confirmation. Questions are
/// resolved strictly in order: each answer is recorded before the next
/// descriptor's callbacks see the record.
#[tracing::instrument(name = "wizard", level = "trace", skip_all)]
fn run_wizard(
    config: &Config,
    renderer: &MessageRenderer,
) -> Result<Option<(Answers, Confirmation)>> {
    let questions = questions::build(config)?;
    let mut answers = Answers::new();

    for question in &questions {
        match question.check_visibility(&answers) {
            Visibility::Skip => continue,
            Visibility::SkipWith(answer) => {
                answers.insert(question.name(), answer);
                continue;
            }
            Visibility::Show => {}
        }

        if question.name() == QuestionName::ConfirmCommit {
            let preview = renderer.render(&answers)?;
            log_preview(&preview);
        }

        let answer = ask(question, &answers)?;
        answers.insert(question.name(), answer);
    }

    match answers.confirmation() {
        Some(Confirmation::No) => Ok(None),
        Some(confirmation) => Ok(Some((answers, confirmation))),
        // The confirmation can be skipped from the configuration.
        None => Ok(Some((answers, Confirmation::Yes))),
    }
}

/// Logs the framed preview of the commit message.
fn log_preview(message: &str) {
    println!("\n{PREVIEW_FRAME}\n{message}\n{PREVIEW_FRAME}\n");
}

/// Presents one question and returns the accepted answer.
fn ask(question: &Question<'_>, answers: &Answers) -> Result<Answer> {
    match question.kind() {
        QuestionKind::List | QuestionKind::Expand => {
            ask_choice(question, answers)
        }
        QuestionKind::Input => ask_input(question),
    }
}

/// An option of a list prompt.
#[derive(Debug)]
struct ListOption {
    /// The label shown to the user.
    label: String,
    /// The value stored when the option is selected.
    value: Answer,
}

impl fmt::Display for ListOption {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.label)
    }
}

/// Presents a list or expand question.
fn ask_choice(question: &Question<'_>, answers: &Answers) -> Result<Answer> {
    let options: Vec<ListOption> = question
        .choices(answers)
        .into_iter()
        .map(|choice| match choice {
            Choice::Item { key, label, value } => ListOption {
                label: match key {
                    Some(key) => format!("{key}) {label}"),
                    None => label,
                },
                value,
            },
            // Inquire has no inert rows: separators become plain rows that
            // map to the empty value.
            Choice::Separator => ListOption {
                label: String::from(SEPARATOR_LABEL),
                value: Answer::Empty,
            },
        })
        .collect();

    let mut select =
        Select::new(question.message(), options).with_page_size(PAGE_SIZE);
    if let Some(index) = question.default_index() {
        select = select.with_starting_cursor(index);
    }

    Ok(select.prompt()?.value)
}

/// Presents an input question, re-prompting until the value validates.
fn ask_input(question: &Question<'_>) -> Result<Answer> {
    loop {
        let mut text = Text::new(question.message());
        if let Some(default) = question.default() {
            text = text.with_initial_value(default);
        }

        let value = text.prompt()?;
        match question.validate(&value) {
            Validation::Valid => {
                return Ok(Answer::Text(question.filter(value)));
            }
            Validation::Invalid(reason) => error!("{reason}"),
        }
    }
}
