// SPDX-License-Identifier: MPL-2.0
//! Thumbnail generation domain: input selection, validation, submission state.

pub mod controller;
pub mod error;
pub mod image_ref;
pub mod input;
pub mod progress;
pub mod state;
pub mod validator;

pub use controller::{
    Completion, ProgressPolicy, SelectionOutcome, SubmissionRequest, SubmitOutcome,
    UploadController, DROP_GESTURE_WINDOW,
};
pub use error::{SubmissionError, ValidationError};
pub use image_ref::{ImageRef, ImageSource};
pub use input::{SelectedInput, VideoFile, VideoUrl};
pub use progress::{EstimatedStep, Progress, ProgressSource};
pub use state::{Presentation, RequestId, SubmissionState};
