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

//! Rendering of the commit message.
//!
//! The renderer fills the Tera template configured in `templates.commit`
//! from the answer record. It is a pure function of the record: the preview
//! framing and its log emission belong to the driving loop.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::{config::Config, questions::Answers};

/// The name under which the commit template is registered.
const TEMPLATE_NAME: &str = "templates.commit";

/// Errors that can occur when rendering the commit message.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The commit template is invalid.
    #[error("Failed to render the commit template")]
    Template(#[from] tera::Error),
}

/// A renderer for commit messages.
#[derive(Debug)]
pub struct MessageRenderer {
    /// The compiled commit template.
    tera: Tera,
}

/// The values exposed to the commit template.
#[derive(Debug, Serialize)]
struct MessageContext<'a> {
    /// The type of commit.
    r#type: &'a str,
    /// The optional scope of the commit.
    scope: Option<&'a str>,
    /// The optional ticket number.
    ticket: Option<&'a str>,
    /// The short commit description.
    subject: &'a str,
    /// The optional long description, with `|` markers expanded.
    body: Option<String>,
    /// The optional breaking change description.
    breaking: Option<&'a str>,
    /// The optional footer listing closed issues.
    footer: Option<&'a str>,
}

impl MessageRenderer {
    /// Compiles the commit template and checks it for errors.
    ///
    /// The template is rendered once against a dummy answer record to catch
    /// any variable error before the wizard runs.
    pub fn new(config: &Config) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &config.templates.commit)?;

        let renderer = Self { tera };
        renderer.render_context(&MessageContext::dummy())?;

        Ok(renderer)
    }

    /// Renders the commit message from the answer record.
    pub fn render(&self, answers: &Answers) -> Result<String, RenderError> {
        self.render_context(&MessageContext::from_answers(answers))
    }

    /// Renders the template with the given context.
    fn render_context(
        &self,
        context: &MessageContext<'_>,
    ) -> Result<String, RenderError> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

impl<'a> MessageContext<'a> {
    /// Maps the answer record to template values.
    ///
    /// Empty answers collapse to absent values and `|` markers in the body
    /// become line breaks.
    fn from_answers(answers: &'a Answers) -> Self {
        Self {
            r#type: answers.r#type().unwrap_or(""),
            scope: answers.scope(),
            ticket: answers.ticket_number(),
            subject: answers.subject().unwrap_or(""),
            body: answers.body().map(|body| body.replace('|', "\n")),
            breaking: answers.breaking(),
            footer: answers.footer(),
        }
    }

    /// Builds a dummy context to check templates against.
    fn dummy() -> Self {
        Self {
            r#type: "dummy",
            scope: Some("dummy"),
            ticket: Some("#0"),
            subject: "dummy commit",
            body: Some(String::from("Dummy body.")),
            breaking: Some("Dummy breaking change."),
            footer: Some("#0"),
        }
    }
}
