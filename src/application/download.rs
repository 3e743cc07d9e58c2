// SPDX-License-Identifier: MPL-2.0
//! Saving a generated thumbnail.

use crate::application::port::ThumbnailBackend;
use crate::domain::thumbnail::{ImageRef, ImageSource};
use crate::error::Result;
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Returns the thumbnail's bytes, fetching remote images through `backend`.
pub async fn thumbnail_bytes(backend: &dyn ThumbnailBackend, image: &ImageRef) -> Result<Bytes> {
    match image.source() {
        ImageSource::Local { bytes, .. } => Ok(bytes.clone()),
        ImageSource::Remote(url) => Ok(backend.fetch_image(url).await?),
    }
}

/// Writes the thumbnail to `path` and returns the path written.
pub async fn save_thumbnail(
    backend: &dyn ThumbnailBackend,
    image: &ImageRef,
    path: &Path,
) -> Result<PathBuf> {
    let bytes = thumbnail_bytes(backend, image).await?;
    tokio::fs::write(path, &bytes).await?;
    tracing::info!(path = %path.display(), size = bytes.len(), "thumbnail saved");
    Ok(path.to_path_buf())
}
