// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the thumbnail backend.
//!
//! Every submission is a single `POST {base}/generate-thumbnail/`:
//!
//! - files are streamed as the multipart field `video`, reporting measured
//!   progress as chunks are read from disk;
//! - URLs are sent as the JSON body `{"video_url": "..."}`.
//!
//! The response is either raw `image/*` bytes or JSON carrying a
//! `thumbnail_url`. JSON without a usable URL falls back to the placeholder.

use crate::application::port::{ProgressSink, ThumbnailBackend};
use crate::domain::thumbnail::{
    ImageRef, Progress, SelectedInput, SubmissionError, VideoFile, VideoUrl,
};
use crate::error::{Error, Result};
use bytes::Bytes;
use futures_util::future::BoxFuture;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::io::ReaderStream;

/// Path appended to the configured base address.
pub const GENERATE_THUMBNAIL_PATH: &str = "/generate-thumbnail/";

/// Multipart field carrying the video file.
pub const VIDEO_FIELD: &str = "video";

const USER_AGENT: &str = concat!("SpotNxt/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct UrlSubmission<'a> {
    video_url: &'a str,
}

#[derive(Deserialize)]
struct ThumbnailResponse {
    #[serde(default)]
    thumbnail_url: Option<String>,
}

/// [`ThumbnailBackend`] talking to the generation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Creates a backend for the service at `base_url`.
    ///
    /// No timeout applies when `timeout` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::from)?;

        Ok(Self {
            client,
            endpoint: endpoint_for(base_url),
        })
    }

    /// Full address submissions are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ThumbnailBackend for HttpBackend {
    fn submit(
        &self,
        input: SelectedInput,
        progress: ProgressSink,
    ) -> BoxFuture<'static, std::result::Result<ImageRef, SubmissionError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            match input {
                SelectedInput::File(file) => submit_file(&client, &endpoint, file, progress).await,
                SelectedInput::Url(url) => submit_url(&client, &endpoint, &url).await,
            }
        })
    }

    fn fetch_image(&self, url: &str) -> BoxFuture<'static, std::result::Result<Bytes, SubmissionError>> {
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let response = client.get(&url).send().await.map_err(network_error)?;
            let status = response.status();
            if !status.is_success() {
                tracing::warn!(%url, %status, "thumbnail fetch rejected");
                return Err(SubmissionError::Network(format!("HTTP status: {status}")));
            }
            response.bytes().await.map_err(network_error)
        })
    }
}

/// Joins the base address and [`GENERATE_THUMBNAIL_PATH`].
#[must_use]
pub fn endpoint_for(base_url: &str) -> String {
    format!(
        "{}{GENERATE_THUMBNAIL_PATH}",
        base_url.trim().trim_end_matches('/')
    )
}

async fn submit_file(
    client: &Client,
    endpoint: &str,
    file: VideoFile,
    mut progress: ProgressSink,
) -> std::result::Result<ImageRef, SubmissionError> {
    let handle = tokio::fs::File::open(file.path())
        .await
        .map_err(|e| SubmissionError::Io(e.to_string()))?;
    let total = match handle.metadata().await {
        Ok(metadata) => metadata.len(),
        Err(_) => file.size(),
    };

    tracing::info!(file = file.name(), size = total, %endpoint, "uploading video");

    let mut sent: u64 = 0;
    let stream = ReaderStream::new(handle).inspect(move |chunk| {
        if let Ok(chunk) = chunk {
            sent += chunk.len() as u64;
            progress(Progress::from_bytes(sent, total));
        }
    });

    let mut part = Part::stream_with_length(Body::wrap_stream(stream), total)
        .file_name(file.name().to_string());
    if let Some(mime) = file.mime() {
        part = part
            .mime_str(mime)
            .map_err(|e| SubmissionError::Io(e.to_string()))?;
    }
    let form = Form::new().part(VIDEO_FIELD, part);

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(network_error)?;

    read_response(response).await
}

async fn submit_url(
    client: &Client,
    endpoint: &str,
    url: &VideoUrl,
) -> std::result::Result<ImageRef, SubmissionError> {
    tracing::info!(video_url = url.as_str(), %endpoint, "submitting video url");

    let response = client
        .post(endpoint)
        .json(&UrlSubmission {
            video_url: url.as_str(),
        })
        .send()
        .await
        .map_err(network_error)?;

    read_response(response).await
}

async fn read_response(response: Response) -> std::result::Result<ImageRef, SubmissionError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, "backend rejected submission");
        return Err(SubmissionError::rejected_by_backend());
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .await
        .map_err(|e| SubmissionError::ResponseFormat(e.to_string()))?;

    interpret_body(content_type.as_deref(), body)
}

/// Turns a successful response body into an [`ImageRef`].
///
/// `image/*` bodies are kept in memory; anything else must be a JSON object.
///
/// # Errors
///
/// Returns [`SubmissionError::ResponseFormat`] when a non-image body is not
/// a JSON object.
pub fn interpret_body(
    content_type: Option<&str>,
    body: Bytes,
) -> std::result::Result<ImageRef, SubmissionError> {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if media_type.starts_with("image/") {
        let extension = image_rs::ImageFormat::from_mime_type(&media_type)
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("png");
        tracing::debug!(content_type = %media_type, size = body.len(), "received image bytes");
        return Ok(ImageRef::local(body, media_type.as_str(), extension));
    }

    let parsed: ThumbnailResponse = serde_json::from_slice(&body)
        .map_err(|e| SubmissionError::ResponseFormat(e.to_string()))?;

    match parsed.thumbnail_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => Ok(ImageRef::remote(url)),
        None => {
            tracing::warn!("response carries no thumbnail_url, using placeholder");
            Ok(ImageRef::placeholder())
        }
    }
}

fn network_error(err: reqwest::Error) -> SubmissionError {
    tracing::warn!(error = %err, "request failed");
    SubmissionError::Network(err.to_string())
}
