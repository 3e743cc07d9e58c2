// SPDX-License-Identifier: MPL-2.0
//! The user's current video selection.

use std::path::{Path, PathBuf};

/// Bytes per mebibyte, used for the size shown next to the file name.
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A local video file chosen through the picker, a drop or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    path: PathBuf,
    name: String,
    size: u64,
    mime: Option<String>,
}

impl VideoFile {
    /// Creates a file descriptor. The display name is the last path component.
    pub fn new(path: impl Into<PathBuf>, size: u64, mime: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            name,
            size,
            mime,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Declared content type, if one could be determined.
    #[must_use]
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// Size in mebibytes, formatted with two decimals (`"5.00"`).
    #[must_use]
    pub fn size_mb_label(&self) -> String {
        format!("{:.2}", self.size as f64 / BYTES_PER_MB)
    }
}

/// A remote video address. Only produced by [`super::validator::validate_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl(String);

impl VideoUrl {
    pub(super) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The single active input slot. Selecting one kind replaces the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedInput {
    File(VideoFile),
    Url(VideoUrl),
}

impl SelectedInput {
    /// Short label for the selection bar and the window title.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            SelectedInput::File(file) => file.name(),
            SelectedInput::Url(url) => url.as_str(),
        }
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, SelectedInput::File(_))
    }
}
