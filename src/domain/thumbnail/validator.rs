// SPDX-License-Identifier: MPL-2.0
//! Input validation.
//!
//! A file is accepted when its declared content type starts with `video/`
//! or when its extension (any case) is in [`ALLOWED_EXTENSIONS`]. The
//! declared type of a local file comes from [`sniff_video_mime`], which looks
//! at the first bytes of the container.

use super::error::ValidationError;
use super::input::VideoUrl;
use std::path::Path;

/// Extensions accepted regardless of the declared content type.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// Content type prefix accepted regardless of the extension.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// Number of header bytes [`sniff_video_mime`] needs to decide.
pub const SNIFF_LEN: usize = 64;

/// ISO-BMFF brands that are still images or audio, not video.
const NON_VIDEO_BRANDS: [&[u8; 4]; 11] = [
    b"avif", b"avis", b"heic", b"heix", b"heim", b"heis", b"mif1", b"msf1", b"M4A ", b"M4B ",
    b"M4P ",
];

/// Validates a candidate file by name and declared content type.
pub fn validate_file(name: &str, mime: Option<&str>) -> Result<(), ValidationError> {
    let mime_is_video = mime.is_some_and(|m| {
        m.get(..VIDEO_MIME_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(VIDEO_MIME_PREFIX))
    });

    if mime_is_video || has_allowed_extension(name) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFile)
    }
}

/// Whether the file name ends with one of [`ALLOWED_EXTENSIONS`].
#[must_use]
pub fn has_allowed_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

/// Guesses a video content type from the first bytes of a file.
///
/// Returns `None` for anything that is not a recognised video container.
#[must_use]
pub fn sniff_video_mime(header: &[u8]) -> Option<&'static str> {
    // ISO base media (mp4, mov): size(4) "ftyp" brand(4)
    if header.len() >= 12 && &header[4..8] == b"ftyp" {
        let brand = &header[8..12];
        if NON_VIDEO_BRANDS.iter().any(|b| &b[..] == brand) {
            return None;
        }
        return Some(if brand == b"qt  " {
            "video/quicktime"
        } else {
            "video/mp4"
        });
    }

    if header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"AVI " {
        return Some("video/x-msvideo");
    }

    // EBML magic; the DocType element follows within the first bytes
    if header.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
        let doc = &header[4..];
        if contains(doc, b"webm") {
            return Some("video/webm");
        }
        return Some("video/x-matroska");
    }

    None
}

/// Validates a URL typed by the user.
///
/// Accepts absolute `http://` or `https://` addresses with a non-empty host
/// and no embedded whitespace. Surrounding whitespace is trimmed.
pub fn validate_url(raw: &str) -> Result<VideoUrl, ValidationError> {
    let url = raw.trim();
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or(ValidationError::InvalidUrl)?;

    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('@')
        .next()
        .unwrap_or_default();
    let host_name = host.split(':').next().unwrap_or_default();

    if host_name.is_empty() || url.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(VideoUrl::new_unchecked(url.to_string()))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
