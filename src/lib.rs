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

//! A configurable commit wizard for Git.
//!
//! git-cz asks a configurable series of questions (type, scope, ticket
//! number, subject, body, breaking changes, footer), then builds a
//! conventional-commit-style message from the answers. The question set is
//! driven by a `git-cz.toml` at the root of the repository: which questions
//! are asked, in which order, with which choices and messages.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![warn(rust_2018_idioms)]
#![warn(clippy::redundant_pub_crate)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]

pub mod command;
pub mod config;
pub mod questions;
pub mod render;
pub mod tracing;

pub use command::GitCz;
