// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Components return events; the handlers here turn them into side effects:
//! dialogs, backend calls, state persistence and notifications.

use super::persisted_state::AppState;
use super::submission;
use super::{InFlight, Message, Screen};
use crate::application::port::ThumbnailBackend;
use crate::application::{download, preview};
use crate::domain::thumbnail::{ImageRef, SubmissionError};
use crate::error::Error;
use crate::ui::edit;
use crate::ui::notifications::{self, Notification};
use crate::ui::upload;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Extensions offered by the open dialog's video filter.
const VIDEO_DIALOG_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// Mutable view of the application state used by the handlers.
pub(super) struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub upload: &'a mut upload::State,
    pub edit: &'a mut edit::State,
    pub backend: &'a Arc<dyn ThumbnailBackend>,
    pub in_flight: &'a mut Option<InFlight>,
    pub app_state: &'a mut AppState,
    pub state_dir: &'a Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

// =============================================================================
// Upload screen
// =============================================================================

pub(super) fn handle_upload_message(
    ctx: &mut UpdateContext<'_>,
    message: upload::Message,
) -> Task<Message> {
    let event = ctx.upload.update(message);
    let task = handle_upload_event(ctx, event);

    // A finished request no longer needs its abort handle.
    if ctx.in_flight.as_ref().map(|f| f.request) != ctx.upload.controller().in_flight() {
        *ctx.in_flight = None;
    }
    task
}

pub(super) fn handle_upload_event(ctx: &mut UpdateContext<'_>, event: upload::Event) -> Task<Message> {
    match event {
        upload::Event::None => Task::none(),
        upload::Event::OpenFileDialog => open_file_dialog(ctx.app_state.last_open_directory.clone()),
        upload::Event::Submit(request) => {
            if let Some(previous) = ctx.in_flight.take() {
                previous.abort.abort();
            }
            let id = request.id;
            let (task, abort) = submission::spawn(Arc::clone(ctx.backend), request);
            *ctx.in_flight = Some(InFlight { request: id, abort });
            task
        }
        upload::Event::Abort(request) => {
            if let Some(in_flight) = ctx.in_flight.take() {
                if in_flight.request == request {
                    in_flight.abort.abort();
                    tracing::debug!(%request, "backend request aborted");
                } else {
                    *ctx.in_flight = Some(in_flight);
                }
            }
            Task::none()
        }
        upload::Event::ShowError(err) => {
            push_submission_error(ctx.notifications, &err);
            Task::none()
        }
        upload::Event::LoadPreview { request, image } => {
            let backend = Arc::clone(ctx.backend);
            Task::perform(
                async move { preview::load_preview(backend.as_ref(), &image).await },
                move |result| Message::Upload(upload::Message::PreviewLoaded { request, result }),
            )
        }
        upload::Event::Download(image) => {
            open_save_dialog(image, ctx.app_state.last_save_directory.clone())
        }
        upload::Event::OpenEditor => {
            *ctx.screen = Screen::Edit;
            Task::none()
        }
    }
}

pub(super) fn handle_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    paths: Option<Vec<PathBuf>>,
) -> Task<Message> {
    let Some(paths) = paths else {
        return Task::none();
    };
    if let Some(first) = paths.first() {
        ctx.app_state.remember_open_location(first);
        persist_app_state(ctx);
    }
    handle_upload_message(ctx, upload::Message::FilesChosen(paths))
}

// =============================================================================
// Download
// =============================================================================

pub(super) fn handle_download_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
    image: ImageRef,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    ctx.app_state.remember_save_location(&path);
    persist_app_state(ctx);

    let backend = Arc::clone(ctx.backend);
    Task::perform(
        async move { download::save_thumbnail(backend.as_ref(), &image, &path).await },
        Message::DownloadCompleted,
    )
}

pub(super) fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => ctx.notifications.push(
            Notification::success("notification-download-success")
                .with_arg("path", path.display().to_string()),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "thumbnail download failed");
            ctx.notifications.push(
                Notification::error("notification-download-error")
                    .with_arg("message", err.to_string()),
            );
        }
    }
    Task::none()
}

// =============================================================================
// Edit screen
// =============================================================================

pub(super) fn handle_edit_message(ctx: &mut UpdateContext<'_>, message: edit::Message) -> Task<Message> {
    match ctx.edit.update(message) {
        edit::Event::None => {}
        edit::Event::GoHome => *ctx.screen = Screen::Upload,
    }
    Task::none()
}

// =============================================================================
// Helpers
// =============================================================================

pub(super) fn push_submission_error(manager: &mut notifications::Manager, err: &SubmissionError) {
    manager.push(Notification::error(err.i18n_key()).with_arg("message", err.to_string()));
}

fn persist_app_state(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = ctx.app_state.save_to(ctx.state_dir.clone()) {
        ctx.notifications.push(Notification::warning(key));
    }
}

fn open_file_dialog(start_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Video", &VIDEO_DIALOG_EXTENSIONS)
                .add_filter("All files", &["*"]);
            if let Some(dir) = start_dir.filter(|dir| dir.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_files().await.map(|handles| {
                handles
                    .into_iter()
                    .map(|handle| handle.path().to_path_buf())
                    .collect::<Vec<_>>()
            })
        },
        Message::FileDialogResult,
    )
}

fn open_save_dialog(image: ImageRef, start_dir: Option<PathBuf>) -> Task<Message> {
    let file_name = image.suggested_filename().to_string();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(file_name);
            if let Some(dir) = start_dir.filter(|dir| dir.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::DownloadDialogResult { path, image },
    )
}
