// SPDX-License-Identifier: MPL-2.0
//! `spotnxt` is a desktop client for a video thumbnail service, built with the
//! Iced GUI framework.
//!
//! A user picks or drops a video file (or pastes a video URL), submits it to
//! the thumbnail backend, follows the upload progress, then previews and
//! downloads the generated thumbnail. Translations use Fluent and user
//! preferences live in a `settings.toml` file.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

pub use app::{config, paths};

#[cfg(test)]
mod test_utils;
