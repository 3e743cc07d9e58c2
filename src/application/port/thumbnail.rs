// SPDX-License-Identifier: MPL-2.0
//! Thumbnail backend port.
//!
//! The [`ThumbnailBackend`] trait is the only way the application talks to
//! the generation service. The HTTP adapter lives in
//! [`crate::infrastructure::http`]; tests substitute in-memory fakes.

use crate::domain::thumbnail::{ImageRef, Progress, SelectedInput, SubmissionError};
use bytes::Bytes;
use futures_util::future::BoxFuture;

/// Receives measured upload progress while a submission runs.
///
/// Called from the transport task, possibly many times per percent; callers
/// must not block inside it.
pub type ProgressSink = Box<dyn FnMut(Progress) + Send + Sync>;

/// Port for generating thumbnails from a video.
pub trait ThumbnailBackend: Send + Sync {
    /// Submits one input and resolves to the generated thumbnail.
    ///
    /// Implementations report measured progress for file uploads through
    /// `progress`; URL submissions may never call it.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Network`] for non-success statuses or
    /// transport failures, [`SubmissionError::ResponseFormat`] when the body
    /// cannot be interpreted, and [`SubmissionError::Io`] when the file
    /// cannot be read.
    fn submit(
        &self,
        input: SelectedInput,
        progress: ProgressSink,
    ) -> BoxFuture<'static, Result<ImageRef, SubmissionError>>;

    /// Downloads the bytes of a remote thumbnail.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Network`] when the image cannot be fetched.
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Bytes, SubmissionError>>;
}
