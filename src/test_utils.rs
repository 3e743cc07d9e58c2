// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests: an in-memory thumbnail backend.

use crate::application::port::{ProgressSink, ThumbnailBackend};
use crate::domain::thumbnail::{ImageRef, Progress, SelectedInput, SubmissionError};
use bytes::Bytes;
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Backend that answers every submission with a canned result.
pub struct FakeBackend {
    submissions: AtomicUsize,
    fetches: AtomicUsize,
    result: Result<ImageRef, SubmissionError>,
    progress: Vec<u8>,
    image_bytes: Bytes,
    hang: bool,
    last_input: Mutex<Option<SelectedInput>>,
}

impl FakeBackend {
    pub fn succeeding(image: ImageRef) -> Self {
        Self::with_result(Ok(image))
    }

    pub fn failing(error: SubmissionError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<ImageRef, SubmissionError>) -> Self {
        Self {
            submissions: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
            result,
            progress: Vec::new(),
            image_bytes: Bytes::from_static(b"fake-image"),
            hang: false,
            last_input: Mutex::new(None),
        }
    }

    /// Reports these percentages before resolving.
    pub fn with_progress(mut self, steps: &[u8]) -> Self {
        self.progress = steps.to_vec();
        self
    }

    /// Bytes returned by `fetch_image`.
    pub fn with_image_bytes(mut self, bytes: &'static [u8]) -> Self {
        self.image_bytes = Bytes::from_static(bytes);
        self
    }

    /// Never resolves submissions.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<SelectedInput> {
        self.last_input.lock().unwrap().clone()
    }
}

impl ThumbnailBackend for FakeBackend {
    fn submit(
        &self,
        input: SelectedInput,
        mut progress: ProgressSink,
    ) -> BoxFuture<'static, Result<ImageRef, SubmissionError>> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some(input);

        let steps = self.progress.clone();
        let result = self.result.clone();
        let hang = self.hang;
        Box::pin(async move {
            for step in steps {
                progress(Progress::new(step));
            }
            if hang {
                futures_util::future::pending::<()>().await;
            }
            result
        })
    }

    fn fetch_image(&self, _url: &str) -> BoxFuture<'static, Result<Bytes, SubmissionError>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let bytes = self.image_bytes.clone();
        Box::pin(async move { Ok(bytes) })
    }
}
