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

//! Question set construction for the commit wizard.
//!
//! [`build`] turns the configuration into an ordered list of [`Question`]
//! descriptors. The driving loop presents each descriptor in order, feeding
//! the growing [`Answers`] record into the visibility, choice and validation
//! callbacks. The builder itself never prompts: all interaction belongs to
//! the caller.

mod messages;
mod prepared;

use std::fmt;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// The identifiers of the wizard questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionName {
    /// The commit type.
    Type,
    /// The scope of the change.
    ///
    /// The scope selection and the custom scope input share this name: the
    /// custom input overwrites the value selected in the list.
    Scope,
    /// The ticket number.
    TicketNumber,
    /// The short description.
    Subject,
    /// The long description.
    Body,
    /// The breaking change description.
    Breaking,
    /// The footer listing closed issues.
    Footer,
    /// The final confirmation.
    ConfirmCommit,
}

/// How a question is presented by the prompt engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// A selection among a list of choices.
    List,
    /// A free-text input.
    Input,
    /// A multi-key choice, one shortcut key per option.
    Expand,
}

/// A value accepted for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free text, possibly empty.
    Text(String),
    /// The explicit "no value" choice.
    Empty,
    /// The sentinel meaning the user will type a custom scope.
    Custom,
    /// The outcome of the confirmation question.
    Confirm(Confirmation),
}

/// The outcome of the confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Proceed with the commit.
    Yes,
    /// Abort the commit.
    No,
    /// Edit the message before committing.
    Edit,
}

/// The record of accepted answers for one commit session.
#[derive(Debug, Default, Clone)]
pub struct Answers(IndexMap<QuestionName, Answer>);

impl Answers {
    /// Creates an empty answer record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the answer for a question, replacing any previous one.
    pub fn insert(&mut self, name: QuestionName, answer: Answer) {
        self.0.insert(name, answer);
    }

    /// Gets the answer for a question.
    pub fn get(&self, name: QuestionName) -> Option<&Answer> {
        self.0.get(&name)
    }

    /// Gets the answer for a question as text.
    ///
    /// Absent and non-textual answers yield `None`.
    pub fn text(&self, name: QuestionName) -> Option<&str> {
        match self.0.get(&name) {
            Some(Answer::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Gets the commit type.
    pub fn r#type(&self) -> Option<&str> {
        self.text(QuestionName::Type)
    }

    /// Gets the scope, if one was given.
    pub fn scope(&self) -> Option<&str> {
        self.non_empty_text(QuestionName::Scope)
    }

    /// Gets the ticket number, if one was given.
    pub fn ticket_number(&self) -> Option<&str> {
        self.non_empty_text(QuestionName::TicketNumber)
    }

    /// Gets the subject.
    pub fn subject(&self) -> Option<&str> {
        self.text(QuestionName::Subject)
    }

    /// Gets the body, if one was given.
    pub fn body(&self) -> Option<&str> {
        self.non_empty_text(QuestionName::Body)
    }

    /// Gets the breaking change description, if one was given.
    pub fn breaking(&self) -> Option<&str> {
        self.non_empty_text(QuestionName::Breaking)
    }

    /// Gets the footer, if one was given.
    pub fn footer(&self) -> Option<&str> {
        self.non_empty_text(QuestionName::Footer)
    }

    /// Gets the confirmation outcome.
    pub fn confirmation(&self) -> Option<Confirmation> {
        match self.0.get(&QuestionName::ConfirmCommit) {
            Some(Answer::Confirm(confirmation)) => Some(*confirmation),
            _ => None,
        }
    }

    /// Gets the answer for a question as non-empty text.
    fn non_empty_text(&self, name: QuestionName) -> Option<&str> {
        self.text(name).filter(|value| !value.is_empty())
    }
}

/// One option in a list or expand question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A selectable item.
    Item {
        /// The shortcut key, for expand questions.
        key: Option<char>,
        /// The label shown to the user.
        label: String,
        /// The value stored in the answer record when selected.
        value: Answer,
    },
    /// An inert visual separator between groups of items.
    Separator,
}

/// The visibility of a question given the current answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// The question must be asked.
    Show,
    /// The question must be skipped.
    Skip,
    /// The question must be skipped, recording the given answer instead.
    SkipWith(Answer),
}

/// The result of validating a candidate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The value is accepted.
    Valid,
    /// The value is rejected for the given reason.
    Invalid(String),
}

/// A visibility callback.
type WhenFn<'a> = Box<dyn Fn(&Answers) -> Visibility + 'a>;
/// A choice resolution callback.
type ChoicesFn<'a> = Box<dyn Fn(&Answers) -> Vec<Choice> + 'a>;
/// A validation callback.
type ValidateFn<'a> = Box<dyn Fn(&str) -> Validation + 'a>;
/// A value transformation callback.
type FilterFn<'a> = Box<dyn Fn(String) -> String + 'a>;

/// A prompt descriptor.
///
/// The callbacks are pure functions of the immutable answer snapshot. The
/// driving loop evaluates them right before presenting the question, then
/// records the accepted value itself: nothing here mutates the record.
pub struct Question<'a> {
    /// The identifier of the question.
    name: QuestionName,
    /// How the question is presented.
    kind: QuestionKind,
    /// The prompt message, resolved once per build.
    message: String,
    /// The initial value of input questions.
    default: Option<String>,
    /// The initially selected choice of list and expand questions.
    default_index: Option<usize>,
    /// The visibility callback. Absent means always visible.
    when: Option<WhenFn<'a>>,
    /// The choice resolution callback. Absent for input questions.
    choices: Option<ChoicesFn<'a>>,
    /// The validation callback. Absent means always valid.
    validate: Option<ValidateFn<'a>>,
    /// The transformation applied to accepted values. Absent means identity.
    filter: Option<FilterFn<'a>>,
}

impl fmt::Debug for Question<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Question")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl Question<'_> {
    /// Gets the identifier of the question.
    pub fn name(&self) -> QuestionName {
        self.name
    }

    /// Gets the presentation kind of the question.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Gets the prompt message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the initial value for input questions.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Gets the initially selected choice for list and expand questions.
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    /// Evaluates the visibility of the question for the current answers.
    pub fn check_visibility(&self, answers: &Answers) -> Visibility {
        match &self.when {
            Some(when) => when(answers),
            None => Visibility::Show,
        }
    }

    /// Resolves the choices of the question for the current answers.
    ///
    /// Input questions have no choices.
    pub fn choices(&self, answers: &Answers) -> Vec<Choice> {
        match &self.choices {
            Some(choices) => choices(answers),
            None => vec![],
        }
    }

    /// Validates a candidate value.
    pub fn validate(&self, value: &str) -> Validation {
        match &self.validate {
            Some(validate) => validate(value),
            None => Validation::Valid,
        }
    }

    /// Transforms an accepted value into its stored form.
    pub fn filter(&self, value: String) -> String {
        match &self.filter {
            Some(filter) => filter(value),
            None => value,
        }
    }
}

/// Errors that can occur when building the question set.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration defines no commit types.
    #[error("No commit types are configured")]
    NoTypes,
    /// The configured ticket number pattern is not a valid regex.
    #[error("Invalid ticket number pattern")]
    InvalidTicketPattern(#[source] regex::Error),
}

/// Builds the ordered question set for one commit session.
///
/// Prompt messages are resolved once per call. The prepared commit message,
/// if any, is read here to seed the subject and body defaults.
#[tracing::instrument(name = "build_questions", level = "trace", skip_all)]
pub fn build(config: &Config) -> Result<Vec<Question<'_>>, BuildError> {
    if config.types.is_empty() {
        return Err(BuildError::NoTypes);
    }

    let messages = messages::resolve(config);
    let ticket_pattern = config
        .ticket_number_regexp
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(BuildError::InvalidTicketPattern)?;
    let prepared = prepared::PreparedMessage::load();

    let mut questions = vec![
        type_question(config, messages.r#type),
        scope_list_question(config, messages.scope),
        custom_scope_question(messages.custom_scope),
        ticket_number_question(config, messages.ticket_number, ticket_pattern),
        subject_question(config, messages.subject, prepared.as_ref()),
        body_question(messages.body, prepared.as_ref()),
        breaking_question(config, messages.breaking),
        footer_question(messages.footer),
        confirm_commit_question(config, messages.confirm_commit),
    ];

    questions
        .retain(|question| !config.skip_questions.contains(&question.name));

    if config.ask_for_breaking_change_first {
        if let Some(position) = questions
            .iter()
            .position(|question| question.name == QuestionName::Breaking)
        {
            let breaking = questions.remove(position);
            questions.insert(0, breaking);
        }
    }

    tracing::debug!(count = questions.len(), "question set built");
    Ok(questions)
}

/// Builds the commit type question.
fn type_question(config: &Config, message: String) -> Question<'_> {
    Question {
        name: QuestionName::Type,
        kind: QuestionKind::List,
        message,
        default: None,
        default_index: None,
        when: None,
        choices: Some(Box::new(move |_| type_choices(&config.types))),
        validate: None,
        filter: None,
    }
}

/// Formats the commit types and their description into aligned choices.
fn type_choices(types: &IndexMap<String, String>) -> Vec<Choice> {
    let Some(max_type_len) = types.keys().map(String::len).max() else {
        return vec![];
    };

    types
        .iter()
        .map(|(ty, doc)| {
            let padding = " ".repeat(max_type_len - ty.len());
            Choice::Item {
                key: None,
                label: format!("{ty}{padding}  {doc}"),
                value: Answer::Text(ty.clone()),
            }
        })
        .collect()
}

/// Builds the scope selection question.
fn scope_list_question(config: &Config, message: String) -> Question<'_> {
    Question {
        name: QuestionName::Scope,
        kind: QuestionKind::List,
        message,
        default: None,
        default_index: None,
        when: Some(Box::new(move |answers| {
            if resolved_scopes(config, answers).is_empty() {
                // An empty scope list activates the custom scope question.
                Visibility::SkipWith(Answer::Custom)
            } else if is_wip(answers) {
                Visibility::Skip
            } else {
                Visibility::Show
            }
        })),
        choices: Some(Box::new(move |answers| {
            let scopes = resolved_scopes(config, answers);
            let mut choices: Vec<Choice> = scopes
                .iter()
                .map(|scope| Choice::Item {
                    key: None,
                    label: scope.clone(),
                    value: Answer::Text(scope.clone()),
                })
                .collect();

            if config.allow_custom_scopes || scopes.is_empty() {
                choices.push(Choice::Separator);
                choices.push(Choice::Item {
                    key: None,
                    label: String::from("empty"),
                    value: Answer::Empty,
                });
                choices.push(Choice::Item {
                    key: None,
                    label: String::from("custom"),
                    value: Answer::Custom,
                });
            }

            choices
        })),
        validate: None,
        filter: None,
    }
}

/// Builds the custom scope input question.
///
/// It shares its name with the scope selection on purpose: accepting a value
/// here overwrites the `scope` entry of the answer record.
fn custom_scope_question<'a>(message: String) -> Question<'a> {
    Question {
        name: QuestionName::Scope,
        kind: QuestionKind::Input,
        message,
        default: None,
        default_index: None,
        when: Some(Box::new(|answers| {
            if answers.get(QuestionName::Scope) == Some(&Answer::Custom) {
                Visibility::Show
            } else {
                Visibility::Skip
            }
        })),
        choices: None,
        validate: None,
        filter: None,
    }
}

/// Builds the ticket number question.
fn ticket_number_question(
    config: &Config,
    message: String,
    pattern: Option<Regex>,
) -> Question<'_> {
    let required = config.ticket_number_required;

    Question {
        name: QuestionName::TicketNumber,
        kind: QuestionKind::Input,
        message,
        default: None,
        default_index: None,
        when: Some(Box::new(move |_| {
            if config.allow_ticket_number {
                Visibility::Show
            } else {
                Visibility::Skip
            }
        })),
        choices: None,
        validate: Some(Box::new(move |value| {
            validate_ticket_number(value, required, pattern.as_ref())
        })),
        filter: None,
    }
}

/// Validates a ticket number.
///
/// An empty value is accepted unless a ticket is required. With a configured
/// pattern, a value is accepted iff it is entirely made of pattern matches.
fn validate_ticket_number(
    value: &str,
    required: bool,
    pattern: Option<&Regex>,
) -> Validation {
    if value.is_empty() {
        if required {
            Validation::Invalid(String::from("A ticket number is required"))
        } else {
            Validation::Valid
        }
    } else {
        match pattern {
            Some(pattern) if !pattern.replace_all(value, "").is_empty() => {
                Validation::Invalid(format!(
                    "The ticket number must match the pattern {pattern}"
                ))
            }
            _ => Validation::Valid,
        }
    }
}

/// Builds the subject question.
fn subject_question<'a>(
    config: &Config,
    message: String,
    prepared: Option<&prepared::PreparedMessage>,
) -> Question<'a> {
    let limit = config.subject_limit;
    let upper_case = config.upper_case_subject;

    Question {
        name: QuestionName::Subject,
        kind: QuestionKind::Input,
        message,
        default: prepared.map(|prepared| prepared.subject().to_owned()),
        default_index: None,
        when: None,
        choices: None,
        validate: Some(Box::new(move |value| {
            if value.chars().count() > limit {
                Validation::Invalid(format!(
                    "The subject must not be longer than {limit} characters"
                ))
            } else {
                Validation::Valid
            }
        })),
        filter: Some(Box::new(move |value| recase_first(&value, upper_case))),
    }
}

/// Re-cases the first character, leaving the rest unchanged.
fn recase_first(value: &str, upper_case: bool) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let first = if upper_case {
                first.to_uppercase().collect::<String>()
            } else {
                first.to_lowercase().collect::<String>()
            };
            first + chars.as_str()
        }
    }
}

/// Builds the body question.
fn body_question<'a>(
    message: String,
    prepared: Option<&prepared::PreparedMessage>,
) -> Question<'a> {
    Question {
        name: QuestionName::Body,
        kind: QuestionKind::Input,
        message,
        default: prepared.and_then(|prepared| {
            prepared.body().map(std::borrow::ToOwned::to_owned)
        }),
        default_index: None,
        when: None,
        choices: None,
        validate: None,
        filter: None,
    }
}

/// Builds the breaking change question.
fn breaking_question(config: &Config, message: String) -> Question<'_> {
    Question {
        name: QuestionName::Breaking,
        kind: QuestionKind::Input,
        message,
        default: None,
        default_index: None,
        when: Some(Box::new(move |answers| {
            let allowed = config.ask_for_breaking_change_first
                || answers.r#type().is_some_and(|ty| {
                    config
                        .allow_breaking_changes
                        .iter()
                        .any(|allowed| allowed.eq_ignore_ascii_case(ty))
                });

            if allowed {
                Visibility::Show
            } else {
                Visibility::Skip
            }
        })),
        choices: None,
        validate: None,
        filter: None,
    }
}

/// Builds the footer question.
fn footer_question<'a>(message: String) -> Question<'a> {
    Question {
        name: QuestionName::Footer,
        kind: QuestionKind::Input,
        message,
        default: None,
        default_index: None,
        when: Some(Box::new(|answers| {
            if is_wip(answers) {
                Visibility::Skip
            } else {
                Visibility::Show
            }
        })),
        choices: None,
        validate: None,
        filter: None,
    }
}

/// Builds the final confirmation question.
///
/// The driving loop renders and logs the commit message preview right before
/// presenting this question: resolving its message has no side effect.
fn confirm_commit_question(config: &Config, message: String) -> Question<'_> {
    Question {
        name: QuestionName::ConfirmCommit,
        kind: QuestionKind::Expand,
        message,
        default: None,
        default_index: Some(0),
        when: None,
        choices: Some(Box::new(move |_| {
            let [yes, no, edit] = messages::confirm_labels(config.locale);
            vec![
                Choice::Item {
                    key: Some('y'),
                    label: String::from(yes),
                    value: Answer::Confirm(Confirmation::Yes),
                },
                Choice::Item {
                    key: Some('n'),
                    label: String::from(no),
                    value: Answer::Confirm(Confirmation::No),
                },
                Choice::Item {
                    key: Some('e'),
                    label: String::from(edit),
                    value: Answer::Confirm(Confirmation::Edit),
                },
            ]
        })),
        validate: None,
        filter: None,
    }
}

/// Resolves the scope list for the current type answer.
///
/// A per-type override takes precedence over the global scope list.
fn resolved_scopes<'c>(config: &'c Config, answers: &Answers) -> &'c [String] {
    answers
        .r#type()
        .and_then(|ty| config.scope_overrides.get(ty))
        .map_or(config.scopes.as_slice(), Vec::as_slice)
}

/// Whether the current type answer is a work-in-progress commit.
fn is_wip(answers: &Answers) -> bool {
    answers
        .r#type()
        .is_some_and(|ty| ty.eq_ignore_ascii_case("wip"))
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    fn answers_with_type(ty: &str) -> Answers {
        let mut answers = Answers::new();
        answers.insert(QuestionName::Type, Answer::Text(ty.to_owned()));
        answers
    }

    fn names(questions: &[Question<'_>]) -> Vec<QuestionName> {
        questions.iter().map(Question::name).collect()
    }

    fn find<'q, 'a>(
        questions: &'q [Question<'a>],
        name: QuestionName,
    ) -> &'q Question<'a> {
        questions
            .iter()
            .find(|question| question.name() == name)
            .unwrap()
    }

    ////////////////////////////// Ordering ///////////////////////////////

    #[test]
    fn the_full_question_set_is_built_in_order() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        assert_eq!(
            names(&questions),
            [
                QuestionName::Type,
                QuestionName::Scope,
                QuestionName::Scope,
                QuestionName::TicketNumber,
                QuestionName::Subject,
                QuestionName::Body,
                QuestionName::Breaking,
                QuestionName::Footer,
                QuestionName::ConfirmCommit,
            ]
        );
    }

    #[test]
    fn the_type_question_comes_first_and_lists_the_types() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let first = &questions[0];
        assert_eq!(first.name(), QuestionName::Type);
        assert_eq!(first.kind(), QuestionKind::List);

        let choices = first.choices(&Answers::new());
        assert_eq!(choices.len(), config.types.len());
        assert!(matches!(
            &choices[0],
            Choice::Item { value: Answer::Text(ty), .. } if ty == "feat"
        ));
    }

    #[test]
    fn type_labels_are_aligned_on_the_longest_type() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let choices = questions[0].choices(&Answers::new());
        let Choice::Item { label, .. } = &choices[0] else {
            panic!("expected an item");
        };

        // `refactor` is the longest default type.
        assert_eq!(label, "feat      A new feature");
    }

    #[test]
    fn building_without_types_is_an_error() {
        let config = Config {
            types: IndexMap::new(),
            ..Config::default()
        };

        assert!(matches!(build(&config), Err(BuildError::NoTypes)));
    }

    #[test]
    fn breaking_first_moves_the_breaking_question_to_the_front() {
        let config = Config {
            ask_for_breaking_change_first: true,
            ..Config::default()
        };
        let questions = build(&config).unwrap();

        assert_eq!(
            names(&questions),
            [
                QuestionName::Breaking,
                QuestionName::Type,
                QuestionName::Scope,
                QuestionName::Scope,
                QuestionName::TicketNumber,
                QuestionName::Subject,
                QuestionName::Body,
                QuestionName::Footer,
                QuestionName::ConfirmCommit,
            ]
        );
    }

    #[test]
    fn skipped_questions_are_removed() {
        let config = Config {
            skip_questions: vec![QuestionName::Footer, QuestionName::Body],
            ..Config::default()
        };
        let questions = build(&config).unwrap();

        assert_eq!(
            names(&questions),
            [
                QuestionName::Type,
                QuestionName::Scope,
                QuestionName::Scope,
                QuestionName::TicketNumber,
                QuestionName::Subject,
                QuestionName::Breaking,
                QuestionName::ConfirmCommit,
            ]
        );
    }

    #[test]
    fn skipping_the_scope_removes_both_scope_questions() {
        let config = Config {
            skip_questions: vec![QuestionName::Scope],
            ..Config::default()
        };
        let questions = build(&config).unwrap();

        assert!(!names(&questions).contains(&QuestionName::Scope));
    }

    /////////////////////////////// Scopes ////////////////////////////////

    fn config_with_scopes(scopes: &[&str]) -> Config {
        Config {
            scopes: scopes.iter().map(|&scope| scope.to_owned()).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn an_empty_scope_list_forces_the_custom_scope() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let scope_list = &questions[1];
        assert_eq!(
            scope_list.check_visibility(&answers_with_type("feat")),
            Visibility::SkipWith(Answer::Custom)
        );
    }

    #[test]
    fn the_forced_custom_scope_activates_the_custom_question() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let mut answers = answers_with_type("feat");
        answers.insert(QuestionName::Scope, Answer::Custom);

        let custom_scope = &questions[2];
        assert_eq!(custom_scope.kind(), QuestionKind::Input);
        assert_eq!(custom_scope.check_visibility(&answers), Visibility::Show);
    }

    #[test]
    fn the_scope_list_is_shown_when_scopes_are_configured() {
        let config = config_with_scopes(&["parser", "wizard"]);
        let questions = build(&config).unwrap();

        let scope_list = &questions[1];
        assert_eq!(
            scope_list.check_visibility(&answers_with_type("feat")),
            Visibility::Show
        );
    }

    #[test]
    fn the_scope_list_is_skipped_for_wip_commits() {
        let config = config_with_scopes(&["parser"]);
        let questions = build(&config).unwrap();

        let scope_list = &questions[1];
        for ty in ["wip", "WIP", "Wip"] {
            assert_eq!(
                scope_list.check_visibility(&answers_with_type(ty)),
                Visibility::Skip,
                "scope should be skipped for type {ty}"
            );
        }
    }

    #[test]
    fn custom_scope_choices_are_appended_when_allowed() {
        let mut config = config_with_scopes(&["parser"]);
        config.allow_custom_scopes = true;
        let questions = build(&config).unwrap();

        let choices = questions[1].choices(&answers_with_type("feat"));

        assert_eq!(choices.len(), 4);
        assert!(matches!(
            &choices[0],
            Choice::Item { value: Answer::Text(scope), .. } if scope == "parser"
        ));
        assert_eq!(choices[1], Choice::Separator);
        assert!(
            matches!(&choices[2], Choice::Item { value: Answer::Empty, .. })
        );
        assert!(
            matches!(&choices[3], Choice::Item { value: Answer::Custom, .. })
        );
    }

    #[test]
    fn scope_choices_are_bare_when_custom_scopes_are_not_allowed() {
        let mut config = config_with_scopes(&["parser"]);
        config.allow_custom_scopes = false;
        let questions = build(&config).unwrap();

        let choices = questions[1].choices(&answers_with_type("feat"));

        assert_eq!(choices.len(), 1);
    }

    #[test]
    fn scope_overrides_take_precedence_for_their_type() {
        let mut config = config_with_scopes(&["parser"]);
        config.allow_custom_scopes = false;
        config
            .scope_overrides
            .insert(String::from("docs"), vec![String::from("readme")]);
        let questions = build(&config).unwrap();

        let choices = questions[1].choices(&answers_with_type("docs"));

        assert_eq!(choices.len(), 1);
        assert!(matches!(
            &choices[0],
            Choice::Item { value: Answer::Text(scope), .. } if scope == "readme"
        ));
    }

    #[test]
    fn an_empty_scope_override_forces_the_custom_scope() {
        let mut config = config_with_scopes(&["parser"]);
        config.scope_overrides.insert(String::from("docs"), vec![]);
        let questions = build(&config).unwrap();

        let scope_list = &questions[1];
        assert_eq!(
            scope_list.check_visibility(&answers_with_type("docs")),
            Visibility::SkipWith(Answer::Custom)
        );
    }

    #[test]
    fn the_custom_scope_question_is_skipped_for_other_answers() {
        let config = config_with_scopes(&["parser"]);
        let questions = build(&config).unwrap();

        let custom_scope = &questions[2];
        let mut answers = answers_with_type("feat");

        answers.insert(QuestionName::Scope, Answer::Text("parser".to_owned()));
        assert_eq!(custom_scope.check_visibility(&answers), Visibility::Skip);

        answers.insert(QuestionName::Scope, Answer::Empty);
        assert_eq!(custom_scope.check_visibility(&answers), Visibility::Skip);
    }

    ///////////////////////////// Ticket number ///////////////////////////

    fn ticket_config(required: bool, regexp: Option<&str>) -> Config {
        Config {
            allow_ticket_number: true,
            ticket_number_required: required,
            ticket_number_regexp: regexp.map(ToOwned::to_owned),
            ..Config::default()
        }
    }

    #[test]
    fn the_ticket_question_is_skipped_unless_allowed() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let ticket = find(&questions, QuestionName::TicketNumber);
        assert_eq!(
            ticket.check_visibility(&answers_with_type("feat")),
            Visibility::Skip
        );
    }

    #[test]
    fn the_ticket_question_is_shown_when_allowed() {
        let config = ticket_config(false, None);
        let questions = build(&config).unwrap();

        let ticket = find(&questions, QuestionName::TicketNumber);
        assert_eq!(
            ticket.check_visibility(&answers_with_type("feat")),
            Visibility::Show
        );
    }

    #[test]
    fn a_ticket_matching_the_pattern_is_valid() {
        let config = ticket_config(false, Some("^#\\d+$"));
        let questions = build(&config).unwrap();

        let ticket = find(&questions, QuestionName::TicketNumber);
        assert_eq!(ticket.validate("#123"), Validation::Valid);
    }

    #[test]
    fn a_ticket_not_matching_the_pattern_is_invalid() {
        let config = ticket_config(false, Some("^#\\d+$"));
        let questions = build(&config).unwrap();

        let ticket = find(&questions, QuestionName::TicketNumber);
        assert!(matches!(ticket.validate("123"), Validation::Invalid(_)));
    }

    #[test]
    fn an_empty_ticket_is_valid_unless_required() {
        let config = ticket_config(false, Some("^#\\d+$"));
        let questions = build(&config).unwrap();
        let ticket = find(&questions, QuestionName::TicketNumber);
        assert_eq!(ticket.validate(""), Validation::Valid);

        let config = ticket_config(true, Some("^#\\d+$"));
        let questions = build(&config).unwrap();
        let ticket = find(&questions, QuestionName::TicketNumber);
        assert!(matches!(ticket.validate(""), Validation::Invalid(_)));
    }

    #[test]
    fn any_non_empty_ticket_is_valid_without_a_pattern() {
        let config = ticket_config(true, None);
        let questions = build(&config).unwrap();

        let ticket = find(&questions, QuestionName::TicketNumber);
        assert_eq!(ticket.validate("whatever"), Validation::Valid);
    }

    #[test]
    fn a_ticket_made_of_repeated_matches_is_valid() {
        // The input only has to be entirely made of pattern matches.
        let config = ticket_config(false, Some("#\\d+"));
        let questions = build(&config).unwrap();

        let ticket = find(&questions, QuestionName::TicketNumber);
        assert_eq!(ticket.validate("#12#34"), Validation::Valid);
        assert!(matches!(ticket.validate("#12x#34"), Validation::Invalid(_)));
    }

    #[test]
    fn an_invalid_ticket_pattern_is_a_build_error() {
        let config = ticket_config(false, Some("(unclosed"));

        assert!(matches!(
            build(&config),
            Err(BuildError::InvalidTicketPattern(_))
        ));
    }

    /////////////////////////////// Subject ///////////////////////////////

    #[test]
    fn the_subject_is_lowercased_by_default() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let subject = find(&questions, QuestionName::Subject);
        assert_eq!(subject.filter(String::from("Fix bug")), "fix bug");
        assert_eq!(subject.filter(String::from("fix bug")), "fix bug");
    }

    #[test]
    fn the_subject_is_uppercased_when_configured() {
        let config = Config {
            upper_case_subject: true,
            ..Config::default()
        };
        let questions = build(&config).unwrap();

        let subject = find(&questions, QuestionName::Subject);
        assert_eq!(subject.filter(String::from("fix bug")), "Fix bug");
    }

    #[test]
    fn the_subject_filter_keeps_empty_values() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let subject = find(&questions, QuestionName::Subject);
        assert_eq!(subject.filter(String::new()), "");
    }

    #[test]
    fn a_subject_over_the_limit_is_invalid() {
        let config = Config {
            subject_limit: 10,
            ..Config::default()
        };
        let questions = build(&config).unwrap();

        let subject = find(&questions, QuestionName::Subject);
        assert_eq!(subject.validate("ten chars."), Validation::Valid);
        assert_eq!(
            subject.validate("eleven char"),
            Validation::Invalid(String::from(
                "The subject must not be longer than 10 characters"
            ))
        );
    }

    ////////////////////////// Breaking and footer ////////////////////////

    #[test]
    fn the_breaking_question_is_shown_for_allowed_types_only() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let breaking = find(&questions, QuestionName::Breaking);
        assert_eq!(
            breaking.check_visibility(&answers_with_type("feat")),
            Visibility::Show
        );
        assert_eq!(
            breaking.check_visibility(&answers_with_type("FIX")),
            Visibility::Show
        );
        assert_eq!(
            breaking.check_visibility(&answers_with_type("docs")),
            Visibility::Skip
        );
    }

    #[test]
    fn the_breaking_question_is_always_shown_when_asked_first() {
        let config = Config {
            ask_for_breaking_change_first: true,
            ..Config::default()
        };
        let questions = build(&config).unwrap();

        let breaking = &questions[0];
        assert_eq!(breaking.name(), QuestionName::Breaking);
        assert_eq!(
            breaking.check_visibility(&Answers::new()),
            Visibility::Show
        );
    }

    #[test]
    fn the_footer_is_skipped_for_wip_commits() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let footer = find(&questions, QuestionName::Footer);
        for ty in ["wip", "WIP", "Wip"] {
            assert_eq!(
                footer.check_visibility(&answers_with_type(ty)),
                Visibility::Skip,
                "footer should be skipped for type {ty}"
            );
        }
        assert_eq!(
            footer.check_visibility(&answers_with_type("feat")),
            Visibility::Show
        );
    }

    ///////////////////////////// Confirmation ////////////////////////////

    #[test]
    fn the_confirmation_offers_yes_no_edit() {
        let config = Config::default();
        let questions = build(&config).unwrap();

        let confirm = find(&questions, QuestionName::ConfirmCommit);
        assert_eq!(confirm.kind(), QuestionKind::Expand);
        assert_eq!(confirm.default_index(), Some(0));

        let choices = confirm.choices(&Answers::new());
        let keys: Vec<Option<char>> = choices
            .iter()
            .map(|choice| match choice {
                Choice::Item { key, .. } => *key,
                Choice::Separator => None,
            })
            .collect();
        let values: Vec<&Answer> = choices
            .iter()
            .map(|choice| match choice {
                Choice::Item { value, .. } => value,
                Choice::Separator => panic!("unexpected separator"),
            })
            .collect();

        assert_eq!(keys, [Some('y'), Some('n'), Some('e')]);
        assert_eq!(
            values,
            [
                &Answer::Confirm(Confirmation::Yes),
                &Answer::Confirm(Confirmation::No),
                &Answer::Confirm(Confirmation::Edit),
            ]
        );
    }

    //////////////////////////////// Answers //////////////////////////////

    #[test]
    fn the_custom_scope_answer_overwrites_the_selection() {
        let mut answers = answers_with_type("feat");
        answers.insert(QuestionName::Scope, Answer::Custom);
        answers.insert(QuestionName::Scope, Answer::Text("api".to_owned()));

        assert_eq!(answers.scope(), Some("api"));
    }

    #[test]
    fn empty_textual_answers_are_absent_from_accessors() {
        let mut answers = answers_with_type("feat");
        answers.insert(QuestionName::Body, Answer::Text(String::new()));
        answers.insert(QuestionName::Scope, Answer::Empty);

        assert_eq!(answers.body(), None);
        assert_eq!(answers.scope(), None);
    }
}
