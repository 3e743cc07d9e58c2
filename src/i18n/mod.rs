// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Translation files embedded at build time from `assets/i18n/`
//! - Runtime language switching
//! - Visible `MISSING: <key>` marker for untranslated keys

pub mod fluent;

pub use fluent::I18n;
