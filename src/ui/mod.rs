// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Screens
//!
//! - [`upload`] - Video selection, submission progress and thumbnail result
//! - [`edit`] - "Coming soon" page reached from the thumbnail
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing and typography constants
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod edit;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod upload;
