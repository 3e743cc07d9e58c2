// SPDX-License-Identifier: MPL-2.0
//! Upload-and-preview controller.
//!
//! Holds the selected input, the submission state and the drag flag, and
//! decides every transition between them. It performs no I/O: a successful
//! [`UploadController::submit`] hands back a [`SubmissionRequest`] that the
//! caller executes, then feeds progress and the result back in with the
//! request's id. Ids that no longer match the in-flight submission are
//! ignored, so a cancelled or superseded request can never change the state.

use super::error::SubmissionError;
use super::image_ref::ImageRef;
use super::input::{SelectedInput, VideoFile};
use super::progress::{EstimatedStep, Progress, ProgressSource};
use super::state::{Presentation, RequestId, SubmissionState};
use super::validator;
use std::time::{Duration, Instant};

/// Drops arriving this soon after the previous one belong to the same gesture.
pub const DROP_GESTURE_WINDOW: Duration = Duration::from_millis(250);

/// How progress is produced for new submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPolicy {
    /// Use transferred bytes for file uploads. URLs are always estimated.
    pub measure_uploads: bool,
    pub estimated_step: EstimatedStep,
}

impl Default for ProgressPolicy {
    fn default() -> Self {
        Self {
            measure_uploads: true,
            estimated_step: EstimatedStep::default(),
        }
    }
}

/// A submission the caller must execute exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub id: RequestId,
    pub input: SelectedInput,
    pub source: ProgressSource,
}

/// Result of offering a new input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted,
    Rejected(SubmissionError),
    /// Nothing happened: submitting, empty batch, or same drop gesture.
    Ignored,
}

/// Result of pressing "Generate".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(SubmissionRequest),
    Rejected(SubmissionError),
    AlreadySubmitting,
}

/// Result of feeding a backend answer back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed(SubmissionError),
    /// The answer belongs to a request that is no longer in flight.
    Stale,
}

#[derive(Debug, Default)]
pub struct UploadController {
    input: Option<SelectedInput>,
    state: SubmissionState,
    dragging: bool,
    next_request: u64,
    last_drop: Option<Instant>,
    policy: ProgressPolicy,
}

impl UploadController {
    #[must_use]
    pub fn new(policy: ProgressPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn set_policy(&mut self, policy: ProgressPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub fn input(&self) -> Option<&SelectedInput> {
        self.input.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.state.presentation()
    }

    /// Id of the submission currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.state {
            SubmissionState::Submitting { request, .. } => Some(request),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Offers a single file from the picker.
    pub fn select_file(&mut self, file: VideoFile) -> SelectionOutcome {
        if self.state.is_submitting() {
            return SelectionOutcome::Ignored;
        }
        match validator::validate_file(file.name(), file.mime()) {
            Ok(()) => self.accept(SelectedInput::File(file)),
            Err(err) => SelectionOutcome::Rejected(err.into()),
        }
    }

    /// Offers a batch of files. Only the first one is considered.
    pub fn select_files(&mut self, files: impl IntoIterator<Item = VideoFile>) -> SelectionOutcome {
        match files.into_iter().next() {
            Some(first) => self.select_file(first),
            None => SelectionOutcome::Ignored,
        }
    }

    /// Records a drop at `now` and clears the drag flag.
    ///
    /// Returns `false` when the drop continues the previous gesture. Callers
    /// that must read the file before offering it check this first so that
    /// only the first file of a batch is ever opened.
    pub fn begin_drop(&mut self, now: Instant) -> bool {
        self.dragging = false;

        let same_gesture = self
            .last_drop
            .is_some_and(|last| now.saturating_duration_since(last) < DROP_GESTURE_WINDOW);
        self.last_drop = Some(now);
        !same_gesture
    }

    /// Validates and selects a URL, replacing any file.
    pub fn select_url(&mut self, raw: &str) -> SelectionOutcome {
        if self.state.is_submitting() {
            return SelectionOutcome::Ignored;
        }
        match validator::validate_url(raw) {
            Ok(url) => self.accept(SelectedInput::Url(url)),
            Err(err) => SelectionOutcome::Rejected(err.into()),
        }
    }

    pub fn drag_entered(&mut self) {
        self.dragging = true;
    }

    pub fn drag_left(&mut self) {
        self.dragging = false;
    }

    fn accept(&mut self, input: SelectedInput) -> SelectionOutcome {
        self.input = Some(input);
        self.state = SubmissionState::Idle;
        SelectionOutcome::Accepted
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Starts a submission of the selected input.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_submitting() {
            return SubmitOutcome::AlreadySubmitting;
        }
        let Some(input) = self.input.clone() else {
            return SubmitOutcome::Rejected(SubmissionError::Precondition);
        };

        self.next_request += 1;
        let id = RequestId::new(self.next_request);
        let source = if input.is_file() && self.policy.measure_uploads {
            ProgressSource::Measured
        } else {
            ProgressSource::Estimated
        };

        self.state = SubmissionState::Submitting {
            request: id,
            progress: Progress::ZERO,
            source,
        };

        SubmitOutcome::Started(SubmissionRequest { id, input, source })
    }

    /// Applies measured progress. Returns whether the state changed.
    pub fn report_progress(&mut self, id: RequestId, reported: Progress) -> bool {
        match &mut self.state {
            SubmissionState::Submitting {
                request,
                progress,
                source: ProgressSource::Measured,
            } if *request == id && reported > *progress => {
                *progress = reported;
                true
            }
            _ => false,
        }
    }

    /// Whether estimated ticks are currently wanted.
    #[must_use]
    pub fn is_estimating(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Submitting {
                source: ProgressSource::Estimated,
                ..
            }
        )
    }

    /// Advances estimated progress by one step. Returns whether it moved.
    pub fn advance_estimated(&mut self) -> bool {
        let step = self.policy.estimated_step;
        match &mut self.state {
            SubmissionState::Submitting {
                progress,
                source: ProgressSource::Estimated,
                ..
            } if !progress.is_complete() => {
                *progress = progress.advance(step);
                true
            }
            _ => false,
        }
    }

    /// Applies the backend's answer for request `id`.
    pub fn complete(&mut self, id: RequestId, result: Result<ImageRef, SubmissionError>) -> Completion {
        if self.in_flight() != Some(id) {
            return Completion::Stale;
        }
        match result {
            Ok(image) => {
                self.state = SubmissionState::Succeeded { request: id, image };
                Completion::Succeeded
            }
            Err(err) => {
                self.state = SubmissionState::Failed(err.clone());
                Completion::Failed(err)
            }
        }
    }

    /// Clears input, thumbnail and progress from any state.
    ///
    /// Returns the id of the request that was in flight, which the caller
    /// must abort.
    pub fn cancel(&mut self) -> Option<RequestId> {
        let aborted = self.in_flight();
        self.input = None;
        self.state = SubmissionState::Idle;
        self.dragging = false;
        aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::thumbnail::error::ValidationError;

    fn mp4(name: &str) -> VideoFile {
        VideoFile::new(name, 5 * 1024 * 1024, Some("video/mp4".to_string()))
    }

    fn started(outcome: SubmitOutcome) -> SubmissionRequest {
        match outcome {
            SubmitOutcome::Started(request) => request,
            other => panic!("expected a started submission, got {other:?}"),
        }
    }

    #[test]
    fn scenario_a_json_url_succeeds() {
        let mut controller = UploadController::default();
        assert_eq!(controller.select_file(mp4("clip.mp4")), SelectionOutcome::Accepted);

        let request = started(controller.submit());
        assert_eq!(controller.presentation(), Presentation::Progress);
        assert_eq!(request.input.display_name(), "clip.mp4");

        let completion = controller.complete(request.id, Ok(ImageRef::remote("http://x/t.png")));
        assert_eq!(completion, Completion::Succeeded);
        assert_eq!(controller.presentation(), Presentation::Thumbnail);

        let image = controller.state().image().unwrap();
        assert_eq!(image.remote_url(), Some("http://x/t.png"));
        assert_eq!(image.suggested_filename(), "thumbnail.png");
    }

    #[test]
    fn scenario_b_text_file_is_rejected() {
        let mut controller = UploadController::default();
        let outcome = controller.select_file(VideoFile::new("notes.txt", 10, Some("text/plain".into())));

        assert_eq!(
            outcome,
            SelectionOutcome::Rejected(ValidationError::UnsupportedFile.into())
        );
        assert!(controller.input().is_none());
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn scenario_c_submit_without_input() {
        let mut controller = UploadController::default();
        assert_eq!(
            controller.submit(),
            SubmitOutcome::Rejected(SubmissionError::Precondition)
        );
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert!(controller.in_flight().is_none());
    }

    #[test]
    fn scenario_d_server_error_fails() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());

        let completion = controller.complete(request.id, Err(SubmissionError::rejected_by_backend()));

        assert_eq!(
            completion,
            Completion::Failed(SubmissionError::Network("Failed to process video".into()))
        );
        assert!(matches!(controller.state(), SubmissionState::Failed(_)));
        assert_eq!(controller.presentation(), Presentation::Affordance);
        // input survives so the user can retry
        assert!(controller.input().is_some());
    }

    #[test]
    fn rejection_keeps_previous_selection() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("good.mp4"));
        controller.select_file(VideoFile::new("bad.txt", 1, None));
        assert_eq!(controller.input().map(SelectedInput::display_name), Some("good.mp4"));
    }

    #[test]
    fn second_selection_replaces_first() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("first.mp4"));
        controller.select_file(mp4("second.mov"));
        assert_eq!(controller.input().map(SelectedInput::display_name), Some("second.mov"));

        controller.select_url("https://example.com/v.mp4");
        assert!(!controller.input().unwrap().is_file());
    }

    #[test]
    fn new_selection_releases_thumbnail() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("a.mp4"));
        let request = started(controller.submit());
        controller.complete(request.id, Ok(ImageRef::placeholder()));

        controller.select_file(mp4("b.mp4"));
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn only_first_file_of_batch_is_used() {
        let mut controller = UploadController::default();
        let outcome = controller.select_files(vec![mp4("one.mp4"), mp4("two.mp4")]);
        assert_eq!(outcome, SelectionOutcome::Accepted);
        assert_eq!(controller.input().map(SelectedInput::display_name), Some("one.mp4"));

        assert_eq!(controller.select_files(Vec::new()), SelectionOutcome::Ignored);
    }

    #[test]
    fn invalid_first_file_rejects_whole_batch() {
        let mut controller = UploadController::default();
        let outcome = controller.select_files(vec![VideoFile::new("a.txt", 1, None), mp4("b.mp4")]);
        assert!(matches!(outcome, SelectionOutcome::Rejected(_)));
        assert!(controller.input().is_none());
    }

    #[test]
    fn drops_in_one_gesture_keep_only_first() {
        let mut controller = UploadController::default();
        let t0 = Instant::now();

        controller.drag_entered();
        assert!(controller.is_dragging());
        assert!(controller.begin_drop(t0));
        assert!(!controller.is_dragging());
        assert_eq!(controller.select_file(mp4("one.mp4")), SelectionOutcome::Accepted);
        assert!(!controller.begin_drop(t0 + Duration::from_millis(5)));
        assert_eq!(controller.input().map(SelectedInput::display_name), Some("one.mp4"));

        let later = t0 + DROP_GESTURE_WINDOW + Duration::from_millis(100);
        assert!(controller.begin_drop(later));
        assert_eq!(controller.select_file(mp4("three.mp4")), SelectionOutcome::Accepted);
        assert_eq!(controller.input().map(SelectedInput::display_name), Some("three.mp4"));
    }

    #[test]
    fn drag_flag_resets_on_leave() {
        let mut controller = UploadController::default();
        controller.drag_entered();
        controller.drag_left();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn submit_while_submitting_is_noop() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        let first = started(controller.submit());

        assert_eq!(controller.submit(), SubmitOutcome::AlreadySubmitting);
        assert_eq!(controller.in_flight(), Some(first.id));
    }

    #[test]
    fn selections_are_ignored_while_submitting() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        started(controller.submit());

        assert_eq!(controller.select_file(mp4("other.mp4")), SelectionOutcome::Ignored);
        assert_eq!(
            controller.select_url("https://example.com/v"),
            SelectionOutcome::Ignored
        );
        assert_eq!(controller.input().map(SelectedInput::display_name), Some("clip.mp4"));
    }

    #[test]
    fn cancel_clears_everything_from_any_state() {
        let mut controller = UploadController::default();

        controller.select_file(mp4("clip.mp4"));
        assert_eq!(controller.cancel(), None);
        assert!(controller.input().is_none());

        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());
        controller.report_progress(request.id, Progress::new(40));
        assert_eq!(controller.cancel(), Some(request.id));
        assert!(controller.input().is_none());
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(controller.state().progress(), Progress::ZERO);

        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());
        controller.complete(request.id, Ok(ImageRef::placeholder()));
        assert_eq!(controller.cancel(), None);
        assert!(controller.state().image().is_none());

        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());
        controller.complete(request.id, Err(SubmissionError::Network("down".into())));
        controller.cancel();
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn stale_ids_never_change_state() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        let old = started(controller.submit());
        controller.cancel();

        controller.select_file(mp4("clip.mp4"));
        let current = started(controller.submit());
        assert_ne!(old.id, current.id);

        assert!(!controller.report_progress(old.id, Progress::new(80)));
        assert_eq!(
            controller.complete(old.id, Ok(ImageRef::placeholder())),
            Completion::Stale
        );
        assert_eq!(controller.in_flight(), Some(current.id));
        assert_eq!(controller.state().progress(), Progress::ZERO);
    }

    #[test]
    fn completion_after_cancel_is_stale() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());
        controller.cancel();

        assert_eq!(
            controller.complete(request.id, Err(SubmissionError::Aborted)),
            Completion::Stale
        );
        assert_eq!(controller.state(), &SubmissionState::Idle);
    }

    #[test]
    fn measured_progress_is_monotonic() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());
        assert_eq!(request.source, ProgressSource::Measured);

        assert!(controller.report_progress(request.id, Progress::new(30)));
        assert!(!controller.report_progress(request.id, Progress::new(20)));
        assert_eq!(controller.state().progress().value(), 30);

        // estimated ticks do not apply to measured submissions
        assert!(!controller.is_estimating());
        assert!(!controller.advance_estimated());
        assert_eq!(controller.state().progress().value(), 30);
    }

    #[test]
    fn urls_use_estimated_progress() {
        let mut controller = UploadController::new(ProgressPolicy {
            measure_uploads: true,
            estimated_step: EstimatedStep::new(30),
        });
        controller.select_url("https://youtube.com/watch?v=1");
        let request = started(controller.submit());
        assert_eq!(request.source, ProgressSource::Estimated);
        assert!(controller.is_estimating());

        // measured reports are ignored for estimated submissions
        assert!(!controller.report_progress(request.id, Progress::new(90)));

        let mut seen = Vec::new();
        while controller.advance_estimated() {
            seen.push(controller.state().progress().value());
        }
        assert_eq!(seen, vec![30, 60, 90, 100]);
    }

    #[test]
    fn estimated_policy_applies_to_files() {
        let mut controller = UploadController::new(ProgressPolicy {
            measure_uploads: false,
            estimated_step: EstimatedStep::default(),
        });
        controller.select_file(mp4("clip.mp4"));
        let request = started(controller.submit());
        assert_eq!(request.source, ProgressSource::Estimated);
    }

    #[test]
    fn resubmit_after_success_allocates_new_id() {
        let mut controller = UploadController::default();
        controller.select_file(mp4("clip.mp4"));
        let first = started(controller.submit());
        controller.complete(first.id, Ok(ImageRef::placeholder()));

        let second = started(controller.submit());
        assert!(second.id > first.id);
        assert_eq!(controller.presentation(), Presentation::Progress);
    }
}
