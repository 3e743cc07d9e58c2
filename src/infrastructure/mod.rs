// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the small amount of file-system inspection the
//! upload screen needs.
//!
//! # Available Adapters
//!
//! - [`http`]: Thumbnail generation over HTTP (implements [`ThumbnailBackend`])
//! - [`inspect`]: Reading size and container type of local videos
//!
//! [`ThumbnailBackend`]: crate::application::port::ThumbnailBackend

pub mod http;
pub mod inspect;

pub use http::HttpBackend;
pub use inspect::read_video_file;
