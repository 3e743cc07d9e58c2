// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ThumbnailBackend;
use crate::config::Config;
use crate::domain::thumbnail::ImageRef;
use crate::error::Error;
use crate::ui::edit;
use crate::ui::notifications;
use crate::ui::upload;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    Edit(edit::Message),
    Notification(notifications::NotificationMessage),
    /// Paths picked in the open dialog, `None` when cancelled.
    FileDialogResult(Option<Vec<PathBuf>>),
    /// Destination picked in the save dialog for `image`.
    DownloadDialogResult {
        path: Option<PathBuf>,
        image: ImageRef,
    },
    DownloadCompleted(Result<PathBuf, Error>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Everything the application needs at startup.
#[derive(Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional video to pre-select, validated like a picked file.
    pub file_path: Option<PathBuf>,
    pub config: Config,
    /// Warning key from loading `config`, shown as a toast.
    pub config_warning: Option<String>,
    /// Directory holding `state.cbor`; platform default when `None`.
    pub state_dir: Option<PathBuf>,
    pub backend: Arc<dyn ThumbnailBackend>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("lang", &self.lang)
            .field("file_path", &self.file_path)
            .field("config", &self.config)
            .field("config_warning", &self.config_warning)
            .field("state_dir", &self.state_dir)
            .finish_non_exhaustive()
    }
}
