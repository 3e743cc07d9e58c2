// SPDX-License-Identifier: MPL-2.0
//! Reference to a generated thumbnail.

use bytes::Bytes;

/// Shown when the backend answers with JSON but no usable `thumbnail_url`.
pub const PLACEHOLDER_THUMBNAIL_URL: &str = "https://via.placeholder.com/480x360.png?text=Thumbnail";

/// Download name used when nothing more specific is known.
pub const DEFAULT_THUMBNAIL_FILENAME: &str = "thumbnail.png";

/// Where the thumbnail pixels live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An address to fetch the image from.
    Remote(String),
    /// Image bytes returned directly by the backend.
    Local { bytes: Bytes, content_type: String },
}

/// A generated thumbnail plus the file name offered on download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    source: ImageSource,
    suggested_filename: String,
}

impl ImageRef {
    /// Thumbnail reachable at `url`.
    #[must_use]
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            source: ImageSource::Remote(url.into()),
            suggested_filename: DEFAULT_THUMBNAIL_FILENAME.to_string(),
        }
    }

    /// The fixed placeholder image.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::remote(PLACEHOLDER_THUMBNAIL_URL)
    }

    /// Thumbnail held in memory. `extension` names the download file.
    #[must_use]
    pub fn local(bytes: Bytes, content_type: impl Into<String>, extension: &str) -> Self {
        let extension = if extension.is_empty() { "png" } else { extension };
        Self {
            source: ImageSource::Local {
                bytes,
                content_type: content_type.into(),
            },
            suggested_filename: format!("thumbnail.{extension}"),
        }
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn suggested_filename(&self) -> &str {
        &self.suggested_filename
    }

    /// The remote address, when the image must be fetched.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        match &self.source {
            ImageSource::Remote(url) => Some(url),
            ImageSource::Local { .. } => None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.remote_url() == Some(PLACEHOLDER_THUMBNAIL_URL)
    }
}
