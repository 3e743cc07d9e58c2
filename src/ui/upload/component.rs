// SPDX-License-Identifier: MPL-2.0
//! Upload screen state and update logic.
//!
//! Wraps the [`UploadController`] with what only the screen needs: the URL
//! being typed and the decoded preview of the current thumbnail. Side effects
//! (dialogs, network, toasts) are returned as [`Event`]s for the application
//! to perform.

use crate::application::preview::PreviewImage;
use crate::domain::thumbnail::{
    Completion, ImageRef, Progress, ProgressPolicy, RequestId, SelectionOutcome, SubmissionError,
    SubmissionRequest, SubmissionState, SubmitOutcome, UploadController,
};
use crate::error::Error;
use crate::infrastructure::read_video_file;
use iced::widget::image;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    ChooseFiles,
    /// Paths returned by the file dialog, in dialog order.
    FilesChosen(Vec<PathBuf>),
    FileHovered,
    FilesHoveredLeft,
    FileDropped {
        path: PathBuf,
        at: Instant,
    },
    UrlDraftChanged(String),
    UseUrl,
    Submit,
    Cancel,
    Progress {
        request: RequestId,
        progress: Progress,
    },
    Completed {
        request: RequestId,
        result: Result<ImageRef, SubmissionError>,
    },
    EstimatedTick,
    PreviewLoaded {
        request: RequestId,
        result: Result<PreviewImage, Error>,
    },
    Download,
    Edit,
}

/// Side effects the application performs after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenFileDialog,
    /// Run this request through the backend, exactly once.
    Submit(SubmissionRequest),
    /// Abort the backend call for this request.
    Abort(RequestId),
    ShowError(SubmissionError),
    LoadPreview {
        request: RequestId,
        image: ImageRef,
    },
    Download(ImageRef),
    OpenEditor,
}

/// Preview of the thumbnail held by `Succeeded { request, .. }`.
#[derive(Debug, Clone)]
pub enum Preview {
    Loading(RequestId),
    Ready(RequestId, image::Handle),
    Unavailable(RequestId),
}

impl Preview {
    fn request(&self) -> RequestId {
        match self {
            Preview::Loading(id) | Preview::Ready(id, _) | Preview::Unavailable(id) => *id,
        }
    }
}

#[derive(Debug, Default)]
pub struct State {
    controller: UploadController,
    url_draft: String,
    preview: Option<Preview>,
}

impl State {
    #[must_use]
    pub fn new(policy: ProgressPolicy) -> Self {
        Self {
            controller: UploadController::new(policy),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn controller(&self) -> &UploadController {
        &self.controller
    }

    pub fn set_policy(&mut self, policy: ProgressPolicy) {
        self.controller.set_policy(policy);
    }

    #[must_use]
    pub fn url_draft(&self) -> &str {
        &self.url_draft
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn is_estimating(&self) -> bool {
        self.controller.is_estimating()
    }

    pub fn update(&mut self, message: Message) -> Event {
        let event = self.handle(message);
        self.release_stale_preview();
        event
    }

    fn handle(&mut self, message: Message) -> Event {
        match message {
            Message::ChooseFiles => {
                if self.controller.state().is_submitting() {
                    Event::None
                } else {
                    Event::OpenFileDialog
                }
            }
            Message::FilesChosen(paths) => {
                let inspected: Result<Vec<_>, _> = paths
                    .iter()
                    .take(1)
                    .map(|path| read_video_file(path))
                    .collect();
                match inspected {
                    Ok(files) => {
                        let outcome = self.controller.select_files(files);
                        self.selection_event(outcome)
                    }
                    Err(err) => Event::ShowError(err),
                }
            }
            Message::FileHovered => {
                if !self.controller.state().is_submitting() {
                    self.controller.drag_entered();
                }
                Event::None
            }
            Message::FilesHoveredLeft => {
                self.controller.drag_left();
                Event::None
            }
            Message::FileDropped { path, at } => {
                if !self.controller.begin_drop(at) {
                    return Event::None;
                }
                match read_video_file(&path) {
                    Ok(file) => {
                        let outcome = self.controller.select_file(file);
                        self.selection_event(outcome)
                    }
                    Err(err) => Event::ShowError(err),
                }
            }
            Message::UrlDraftChanged(draft) => {
                self.url_draft = draft;
                Event::None
            }
            Message::UseUrl => {
                let outcome = self.controller.select_url(&self.url_draft);
                self.selection_event(outcome)
            }
            Message::Submit => match self.controller.submit() {
                SubmitOutcome::Started(request) => {
                    tracing::info!(
                        request = %request.id,
                        input = request.input.display_name(),
                        source = ?request.source,
                        "submitting video"
                    );
                    Event::Submit(request)
                }
                SubmitOutcome::Rejected(err) => Event::ShowError(err),
                SubmitOutcome::AlreadySubmitting => Event::None,
            },
            Message::Cancel => {
                self.url_draft.clear();
                match self.controller.cancel() {
                    Some(request) => {
                        tracing::info!(%request, "submission cancelled");
                        Event::Abort(request)
                    }
                    None => Event::None,
                }
            }
            Message::Progress { request, progress } => {
                self.controller.report_progress(request, progress);
                Event::None
            }
            Message::EstimatedTick => {
                self.controller.advance_estimated();
                Event::None
            }
            Message::Completed { request, result } => {
                match self.controller.complete(request, result) {
                    Completion::Succeeded => self.start_preview(request),
                    Completion::Failed(err) => {
                        tracing::warn!(%request, error = %err, "thumbnail generation failed");
                        Event::ShowError(err)
                    }
                    Completion::Stale => {
                        tracing::debug!(%request, "ignoring stale completion");
                        Event::None
                    }
                }
            }
            Message::PreviewLoaded { request, result } => {
                if self.preview.as_ref().map(Preview::request) != Some(request) {
                    return Event::None;
                }
                self.preview = Some(match result {
                    Ok(decoded) => Preview::Ready(
                        request,
                        image::Handle::from_rgba(decoded.width, decoded.height, decoded.rgba),
                    ),
                    Err(err) => {
                        tracing::warn!(%request, error = %err, "thumbnail preview unavailable");
                        Preview::Unavailable(request)
                    }
                });
                Event::None
            }
            Message::Download => match self.controller.state().image() {
                Some(image) => Event::Download(image.clone()),
                None => Event::None,
            },
            Message::Edit => match self.controller.state() {
                SubmissionState::Succeeded { .. } => Event::OpenEditor,
                _ => Event::None,
            },
        }
    }

    fn selection_event(&mut self, outcome: SelectionOutcome) -> Event {
        match outcome {
            SelectionOutcome::Accepted => {
                if let Some(input) = self.controller.input() {
                    tracing::debug!(input = input.display_name(), "input selected");
                    if !input.is_file() {
                        self.url_draft.clear();
                    }
                }
                Event::None
            }
            SelectionOutcome::Rejected(err) => Event::ShowError(err),
            SelectionOutcome::Ignored => Event::None,
        }
    }

    fn start_preview(&mut self, request: RequestId) -> Event {
        match self.controller.state().image() {
            Some(image) => {
                self.preview = Some(Preview::Loading(request));
                Event::LoadPreview {
                    request,
                    image: image.clone(),
                }
            }
            None => Event::None,
        }
    }

    /// Drops the preview once the state no longer shows its thumbnail.
    fn release_stale_preview(&mut self) {
        let current = match self.controller.state() {
            SubmissionState::Succeeded { request, .. } => Some(*request),
            _ => None,
        };
        if self.preview.as_ref().map(Preview::request) != current {
            self.preview = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::thumbnail::{Presentation, ProgressSource, ValidationError};
    use std::path::Path;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn write_mp4(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut bytes = vec![0, 0, 0, 0x18];
        bytes.extend_from_slice(b"ftypisom");
        bytes.extend_from_slice(&[0; 64]);
        std::fs::write(&path, bytes).expect("write mp4");
        path
    }

    fn selected(dir: &TempDir) -> State {
        let mut state = State::default();
        let path = write_mp4(dir.path(), "clip.mp4");
        assert_eq!(state.update(Message::FilesChosen(vec![path])), Event::None);
        state
    }

    fn submit(state: &mut State) -> SubmissionRequest {
        match state.update(Message::Submit) {
            Event::Submit(request) => request,
            other => panic!("expected submit event, got {other:?}"),
        }
    }

    fn preview_image() -> PreviewImage {
        PreviewImage {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        }
    }

    #[test]
    fn choosing_a_text_file_shows_the_validation_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");
        let mut state = State::default();

        let event = state.update(Message::FilesChosen(vec![path]));

        assert_eq!(
            event,
            Event::ShowError(ValidationError::UnsupportedFile.into())
        );
        assert!(state.controller().input().is_none());
    }

    #[test]
    fn only_first_chosen_file_is_read() {
        let dir = tempdir().expect("temp dir");
        let first = write_mp4(dir.path(), "first.mp4");
        let missing = dir.path().join("missing.mp4");
        let mut state = State::default();

        state.update(Message::FilesChosen(vec![first, missing]));

        assert_eq!(
            state.controller().input().map(|i| i.display_name()),
            Some("first.mp4")
        );
    }

    #[test]
    fn unreadable_drop_surfaces_io_error() {
        let dir = tempdir().expect("temp dir");
        let mut state = State::default();

        let event = state.update(Message::FileDropped {
            path: dir.path().join("gone.mp4"),
            at: Instant::now(),
        });

        assert!(matches!(event, Event::ShowError(SubmissionError::Io(_))));
    }

    #[test]
    fn second_drop_of_a_gesture_is_not_read() {
        let dir = tempdir().expect("temp dir");
        let first = write_mp4(dir.path(), "a.mp4");
        let mut state = State::default();
        let t0 = Instant::now();

        state.update(Message::FileHovered);
        assert!(state.controller().is_dragging());
        state.update(Message::FileDropped { path: first, at: t0 });
        assert!(!state.controller().is_dragging());

        // Missing file would be an I/O error if it were inspected.
        let event = state.update(Message::FileDropped {
            path: dir.path().join("missing.mp4"),
            at: t0 + Duration::from_millis(10),
        });
        assert_eq!(event, Event::None);
        assert_eq!(
            state.controller().input().map(|i| i.display_name()),
            Some("a.mp4")
        );
    }

    #[test]
    fn empty_submit_is_rejected_locally() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::Submit),
            Event::ShowError(SubmissionError::Precondition)
        );
        assert_eq!(state.controller().presentation(), Presentation::Affordance);
    }

    #[test]
    fn url_is_selected_and_draft_cleared() {
        let mut state = State::default();
        state.update(Message::UrlDraftChanged(
            " https://example.com/v.mp4 ".into(),
        ));
        assert_eq!(state.update(Message::UseUrl), Event::None);
        assert_eq!(state.url_draft(), "");

        let request = submit(&mut state);
        assert_eq!(request.source, ProgressSource::Estimated);
        assert!(state.is_estimating());
    }

    #[test]
    fn invalid_url_keeps_draft_for_editing() {
        let mut state = State::default();
        state.update(Message::UrlDraftChanged("not a url".into()));
        assert_eq!(
            state.update(Message::UseUrl),
            Event::ShowError(ValidationError::InvalidUrl.into())
        );
        assert_eq!(state.url_draft(), "not a url");
    }

    #[test]
    fn success_requests_preview_then_shows_it() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        let request = submit(&mut state);

        let image = ImageRef::remote("http://x/t.png");
        let event = state.update(Message::Completed {
            request: request.id,
            result: Ok(image.clone()),
        });
        assert_eq!(
            event,
            Event::LoadPreview {
                request: request.id,
                image
            }
        );
        assert!(matches!(state.preview(), Some(Preview::Loading(_))));

        state.update(Message::PreviewLoaded {
            request: request.id,
            result: Ok(preview_image()),
        });
        assert!(matches!(state.preview(), Some(Preview::Ready(..))));
    }

    #[test]
    fn failed_preview_keeps_download_available() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        let request = submit(&mut state);
        state.update(Message::Completed {
            request: request.id,
            result: Ok(ImageRef::placeholder()),
        });

        state.update(Message::PreviewLoaded {
            request: request.id,
            result: Err(Error::Image("bad".into())),
        });

        assert!(matches!(state.preview(), Some(Preview::Unavailable(_))));
        assert_eq!(
            state.update(Message::Download),
            Event::Download(ImageRef::placeholder())
        );
        assert_eq!(state.update(Message::Edit), Event::OpenEditor);
    }

    #[test]
    fn cancel_aborts_and_releases_preview() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        let request = submit(&mut state);
        assert_eq!(state.update(Message::Cancel), Event::Abort(request.id));
        assert!(state.controller().input().is_none());

        // A late answer from the aborted request changes nothing.
        let late = state.update(Message::Completed {
            request: request.id,
            result: Ok(ImageRef::placeholder()),
        });
        assert_eq!(late, Event::None);
        assert!(state.preview().is_none());
    }

    #[test]
    fn cancel_after_success_drops_thumbnail_preview() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        let request = submit(&mut state);
        state.update(Message::Completed {
            request: request.id,
            result: Ok(ImageRef::placeholder()),
        });
        state.update(Message::PreviewLoaded {
            request: request.id,
            result: Ok(preview_image()),
        });

        assert_eq!(state.update(Message::Cancel), Event::None);
        assert!(state.preview().is_none());
        assert_eq!(state.controller().presentation(), Presentation::Affordance);
    }

    #[test]
    fn stale_preview_is_ignored() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        let request = submit(&mut state);
        state.update(Message::Completed {
            request: request.id,
            result: Ok(ImageRef::placeholder()),
        });

        state.update(Message::PreviewLoaded {
            request: RequestId::new(request.id.value() + 7),
            result: Ok(preview_image()),
        });
        assert!(matches!(state.preview(), Some(Preview::Loading(_))));
    }

    #[test]
    fn backend_failure_is_reported_once() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        let request = submit(&mut state);

        let event = state.update(Message::Completed {
            request: request.id,
            result: Err(SubmissionError::rejected_by_backend()),
        });

        assert_eq!(
            event,
            Event::ShowError(SubmissionError::rejected_by_backend())
        );
        assert_eq!(state.update(Message::Download), Event::None);
        assert_eq!(state.update(Message::Edit), Event::None);
    }

    #[test]
    fn choose_files_is_ignored_while_submitting() {
        let dir = tempdir().expect("temp dir");
        let mut state = selected(&dir);
        assert_eq!(state.update(Message::ChooseFiles), Event::OpenFileDialog);
        submit(&mut state);
        assert_eq!(state.update(Message::ChooseFiles), Event::None);
        assert_eq!(state.update(Message::Submit), Event::None);
    }
}
