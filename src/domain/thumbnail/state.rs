// SPDX-License-Identifier: MPL-2.0
//! Submission state and the presentation derived from it.

use super::error::SubmissionError;
use super::image_ref::ImageRef;
use super::progress::{Progress, ProgressSource};
use std::fmt;

/// Identifier of one submission, unique within a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the current submission. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        request: RequestId,
        progress: Progress,
        source: ProgressSource,
    },
    Succeeded {
        request: RequestId,
        image: ImageRef,
    },
    Failed(SubmissionError),
}

impl SubmissionState {
    /// Which of the three mutually exclusive views renders this state.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => Presentation::Affordance,
            SubmissionState::Submitting { .. } => Presentation::Progress,
            SubmissionState::Succeeded { .. } => Presentation::Thumbnail,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }

    /// The thumbnail, when the last submission succeeded.
    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        match self {
            SubmissionState::Succeeded { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Current progress; zero outside of a submission.
    #[must_use]
    pub fn progress(&self) -> Progress {
        match self {
            SubmissionState::Submitting { progress, .. } => *progress,
            _ => Progress::ZERO,
        }
    }
}

/// What the result area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Upload controls (drop zone, picker, URL field, generate).
    Affordance,
    /// Progress indicator.
    Progress,
    /// Thumbnail with Download and Edit.
    Thumbnail,
}
