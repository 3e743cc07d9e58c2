// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`thumbnail`]: Thumbnail generation and image retrieval
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so one backend can be shared across tasks
//! - Methods return boxed futures that the app runs inside `Task::stream` or
//!   `Task::perform`
//! - Errors are domain errors ([`SubmissionError`](crate::domain::thumbnail::SubmissionError))

pub mod thumbnail;

pub use thumbnail::{ProgressSink, ThumbnailBackend};
