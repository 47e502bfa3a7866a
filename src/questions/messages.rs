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

//! Built-in prompt messages and their resolution.
//!
//! The built-in messages are plain data keyed by field and locale, resolved
//! once per build. Explicit overrides from the configuration always win over
//! the table.

use crate::config::{Config, Locale};

/// The resolved prompt messages for one build.
#[derive(Debug)]
pub struct PromptMessages {
    /// The message of the type question.
    pub r#type: String,
    /// The message of the scope selection question.
    pub scope: String,
    /// The message of the custom scope question.
    pub custom_scope: String,
    /// The message of the ticket number question.
    pub ticket_number: String,
    /// The message of the subject question.
    pub subject: String,
    /// The message of the body question.
    pub body: String,
    /// The message of the breaking change question.
    pub breaking: String,
    /// The message of the footer question.
    pub footer: String,
    /// The message of the confirmation question.
    pub confirm_commit: String,
}

/// The built-in messages for one locale.
struct Builtin {
    /// The message of the type question.
    r#type: &'static str,
    /// The message of the scope selection question.
    scope: &'static str,
    /// The message of the custom scope question.
    custom_scope: &'static str,
    /// The message of the ticket number question.
    ticket_number: &'static str,
    /// The message of the subject question.
    subject: &'static str,
    /// The message of the body question.
    body: &'static str,
    /// The message of the breaking change question.
    breaking: &'static str,
    /// The message of the footer question.
    footer: &'static str,
    /// The message of the confirmation question.
    confirm_commit: &'static str,
    /// The label of the "commit" confirmation choice.
    confirm_yes: &'static str,
    /// The label of the "abort" confirmation choice.
    confirm_no: &'static str,
    /// The label of the "edit" confirmation choice.
    confirm_edit: &'static str,
}

/// The Simplified Chinese messages, the historical defaults.
///
/// The ticket number prompt has always been in English, pattern or not.
const ZH_CN: Builtin = Builtin {
    r#type: "选择要提交的更改类型:",
    scope: "输入此更改的范围（可选）:",
    custom_scope: "输入此更改的范围:",
    ticket_number: "Enter the ticket number:",
    subject: "写一个简短的改变描述:",
    body: "提供更改的详细说明（可选）。使用“|”换行:",
    breaking: "列出任何中断更改（可选）:",
    footer: "列出此更改关闭的所有问题（可选）. 例如: #31, #34:",
    confirm_commit: "是否确实要继续上面的提交?",
    confirm_yes: "确定提交",
    confirm_no: "终止提交",
    confirm_edit: "编辑",
};

/// The English messages.
const EN: Builtin = Builtin {
    r#type: "Select the type of change you are committing:",
    scope: "Select the scope of this change (optional):",
    custom_scope: "Enter the scope of this change:",
    ticket_number: "Enter the ticket number:",
    subject: "Write a short description of the change:",
    body: "Provide a longer description of the change (optional). Use \"|\" \
        to break lines:",
    breaking: "List any breaking changes (optional):",
    footer: "List any issues closed by this change (optional). E.g.: #31, \
        #34:",
    confirm_commit: "Are you sure you want to proceed with the commit above?",
    confirm_yes: "Commit",
    confirm_no: "Abort",
    confirm_edit: "Edit",
};

/// Resolves the effective messages from the overrides and the locale table.
pub fn resolve(config: &Config) -> PromptMessages {
    let builtin = builtin(config.locale);
    let overrides = &config.messages;

    PromptMessages {
        r#type: override_or(&overrides.r#type, builtin.r#type),
        scope: override_or(&overrides.scope, builtin.scope),
        custom_scope: override_or(&overrides.custom_scope, builtin.custom_scope),
        ticket_number: ticket_number_message(config, builtin),
        subject: override_or(&overrides.subject, builtin.subject),
        body: override_or(&overrides.body, builtin.body),
        breaking: override_or(&overrides.breaking, builtin.breaking),
        footer: override_or(&overrides.footer, builtin.footer),
        confirm_commit: override_or(
            &overrides.confirm_commit,
            builtin.confirm_commit,
        ),
    }
}

/// Gets the labels of the confirmation choices for a locale.
pub fn confirm_labels(locale: Locale) -> [&'static str; 3] {
    let builtin = builtin(locale);
    [builtin.confirm_yes, builtin.confirm_no, builtin.confirm_edit]
}

/// Gets the built-in messages for a locale.
fn builtin(locale: Locale) -> &'static Builtin {
    match locale {
        Locale::ZhCn => &ZH_CN,
        Locale::En => &EN,
    }
}

/// Resolves the ticket number message.
///
/// Without an explicit override, a configured pattern selects a prompt that
/// embeds the pattern, which `ticket_number_pattern` may replace in turn.
fn ticket_number_message(config: &Config, builtin: &Builtin) -> String {
    if let Some(message) = &config.messages.ticket_number {
        message.clone()
    } else if let Some(pattern) = &config.ticket_number_regexp {
        config.messages.ticket_number_pattern.clone().unwrap_or_else(|| {
            format!("Enter the ticket number following this pattern ({pattern})")
        })
    } else {
        String::from(builtin.ticket_number)
    }
}

/// Takes the override if set, the built-in message otherwise.
fn override_or(value: &Option<String>, builtin: &str) -> String {
    value.clone().unwrap_or_else(|| String::from(builtin))
}
