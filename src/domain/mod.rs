// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic without I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Besides `std` it only relies on `thiserror` for error derives and `bytes`
//! for shared image buffers, so everything here is testable without a
//! runtime.
//!
//! # Modules
//!
//! - [`thumbnail`]: Video selection, validation and submission state
//!   ([`UploadController`](thumbnail::UploadController),
//!   [`SubmissionState`](thumbnail::SubmissionState),
//!   [`ImageRef`](thumbnail::ImageRef))

pub mod thumbnail;
