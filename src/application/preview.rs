// SPDX-License-Identifier: MPL-2.0
//! Decoding a generated thumbnail for on-screen preview.

use crate::application::download::thumbnail_bytes;
use crate::application::port::ThumbnailBackend;
use crate::domain::thumbnail::ImageRef;
use crate::error::Result;
use bytes::Bytes;

/// Decoded RGBA pixels ready to become an image handle.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba_len", &self.rgba.len())
            .finish()
    }
}

/// Decodes PNG/JPEG/GIF/WebP/BMP bytes into RGBA.
///
/// # Errors
///
/// Returns [`crate::error::Error::Image`] when the format is unknown or the
/// data is corrupt.
pub fn decode_preview(bytes: &[u8]) -> Result<PreviewImage> {
    let rgba = image_rs::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PreviewImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Fetches (when remote) and decodes the thumbnail off the UI thread.
pub async fn load_preview(backend: &dyn ThumbnailBackend, image: &ImageRef) -> Result<PreviewImage> {
    let bytes: Bytes = thumbnail_bytes(backend, image).await?;
    let decoded = tokio::task::spawn_blocking(move || decode_preview(&bytes))
        .await
        .map_err(|err| crate::error::Error::Image(err.to_string()))??;
    tracing::debug!(
        width = decoded.width,
        height = decoded.height,
        "thumbnail preview decoded"
    );
    Ok(decoded)
}
