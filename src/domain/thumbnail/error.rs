// SPDX-License-Identifier: MPL-2.0
//! Errors produced while selecting and submitting a video.
//!
//! Every variant is recoverable: the controller always returns to a state
//! that accepts new input. Each variant maps to a Fluent key so the UI can
//! show a localized message, while `Display` keeps the plain English text.

use thiserror::Error;

/// Message used when the backend answers with a non-success status.
pub const FAILED_TO_PROCESS_VIDEO: &str = "Failed to process video";

/// Rejection of a candidate input by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither the declared MIME type nor the extension identify a video.
    #[error("Please upload a valid video file (mp4, mov, avi, mkv, webm).")]
    UnsupportedFile,
    /// The URL is not an absolute `http`/`https` address.
    #[error("Please enter a valid video URL.")]
    InvalidUrl,
}

/// Everything that can go wrong between "select" and "thumbnail shown".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Submit was requested with nothing selected.
    #[error("Please upload a video file.")]
    Precondition,

    /// Non-success HTTP status or transport failure.
    #[error("{0}")]
    Network(String),

    /// The response body could not be interpreted at all.
    #[error("{0}")]
    ResponseFormat(String),

    /// The selected file could not be read.
    #[error("{0}")]
    Io(String),

    /// The request was aborted before it completed.
    #[error("Request aborted")]
    Aborted,
}

impl SubmissionError {
    /// Error for a backend response with a non-success status code.
    #[must_use]
    pub fn rejected_by_backend() -> Self {
        SubmissionError::Network(FAILED_TO_PROCESS_VIDEO.to_string())
    }

    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmissionError::Validation(ValidationError::UnsupportedFile) => {
                "error-validation-file"
            }
            SubmissionError::Validation(ValidationError::InvalidUrl) => "error-validation-url",
            SubmissionError::Precondition => "error-precondition",
            SubmissionError::Network(_) => "error-network",
            SubmissionError::ResponseFormat(_) => "error-response-format",
            SubmissionError::Io(_) => "error-io",
            SubmissionError::Aborted => "error-aborted",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::UnsupportedFile.to_string(),
            "Please upload a valid video file (mp4, mov, avi, mkv, webm)."
        );
        assert_eq!(
            SubmissionError::Precondition.to_string(),
            "Please upload a video file."
        );
    }

    #[test]
    fn backend_rejection_uses_fixed_message() {
        let err = SubmissionError::rejected_by_backend();
        assert_eq!(err.to_string(), "Failed to process video");
        assert_eq!(err.i18n_key(), "error-network");
    }

    #[test]
    fn validation_error_converts_transparently() {
        let err: SubmissionError = ValidationError::InvalidUrl.into();
        assert_eq!(err.to_string(), "Please enter a valid video URL.");
        assert_eq!(err.i18n_key(), "error-validation-url");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            SubmissionError::Validation(ValidationError::UnsupportedFile).i18n_key(),
            SubmissionError::Validation(ValidationError::InvalidUrl).i18n_key(),
            SubmissionError::Precondition.i18n_key(),
            SubmissionError::Network(String::new()).i18n_key(),
            SubmissionError::ResponseFormat(String::new()).i18n_key(),
            SubmissionError::Io(String::new()).i18n_key(),
            SubmissionError::Aborted.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

}
