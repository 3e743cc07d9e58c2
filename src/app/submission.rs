// SPDX-License-Identifier: MPL-2.0
//! Runs one submission through the backend and streams its progress back.
//!
//! The backend call runs on a spawned tokio task. Progress travels through a
//! bounded channel and the result through a oneshot; both are merged into a
//! single [`Task::stream`] of upload messages. The returned
//! [`AbortHandle`] cancels the request.

use super::Message;
use crate::application::port::ThumbnailBackend;
use crate::domain::thumbnail::{ImageRef, Progress, RequestId, SubmissionError, SubmissionRequest};
use crate::ui::upload;
use iced::futures::channel::{mpsc, oneshot};
use iced::futures::{stream, StreamExt};
use iced::Task;
use std::sync::Arc;
use tokio::task::AbortHandle;

/// Capacity of the progress channel; extra updates are dropped.
const PROGRESS_CHANNEL_CAPACITY: usize = 100;

type SubmissionResult = Result<ImageRef, SubmissionError>;

enum Phase {
    ReceivingProgress {
        progress_rx: mpsc::Receiver<Progress>,
        result_rx: oneshot::Receiver<SubmissionResult>,
    },
    Completed,
}

/// Starts `request` and returns the task that reports it.
pub(super) fn spawn(
    backend: Arc<dyn ThumbnailBackend>,
    request: SubmissionRequest,
) -> (Task<Message>, AbortHandle) {
    let (messages, abort) = start(backend, request);
    (Task::stream(messages), abort)
}

/// Spawns the backend call for `request`; the stream ends after its
/// `Completed` message.
pub(super) fn start(
    backend: Arc<dyn ThumbnailBackend>,
    request: SubmissionRequest,
) -> (impl iced::futures::Stream<Item = Message>, AbortHandle) {
    let id = request.id;
    let (mut progress_tx, progress_rx) = mpsc::channel::<Progress>(PROGRESS_CHANNEL_CAPACITY);
    let (result_tx, result_rx) = oneshot::channel::<SubmissionResult>();

    let handle = tokio::spawn(async move {
        let sink = Box::new(move |progress: Progress| {
            let _ = progress_tx.try_send(progress);
        });
        let result = backend.submit(request.input, sink).await;
        let _ = result_tx.send(result);
    });

    (report(id, progress_rx, result_rx), handle.abort_handle())
}

fn report(
    request: RequestId,
    progress_rx: mpsc::Receiver<Progress>,
    result_rx: oneshot::Receiver<SubmissionResult>,
) -> impl iced::futures::Stream<Item = Message> {
    stream::unfold(
        Phase::ReceivingProgress {
            progress_rx,
            result_rx,
        },
        move |phase| async move {
            match phase {
                Phase::ReceivingProgress {
                    mut progress_rx,
                    result_rx,
                } => match progress_rx.next().await {
                    Some(progress) => Some((
                        Message::Upload(upload::Message::Progress { request, progress }),
                        Phase::ReceivingProgress {
                            progress_rx,
                            result_rx,
                        },
                    )),
                    // Sender dropped: the backend call has returned or was aborted.
                    None => {
                        let result = result_rx.await.unwrap_or(Err(SubmissionError::Aborted));
                        Some((completed(request, result), Phase::Completed))
                    }
                },
                Phase::Completed => None,
            }
        },
    )
}

fn completed(request: RequestId, result: SubmissionResult) -> Message {
    Message::Upload(upload::Message::Completed { request, result })
}
