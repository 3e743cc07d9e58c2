// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR.
//!
//! Holds what improves the next session but is not a preference: the
//! directories the file dialogs last used. Stored as `state.cbor` in the data
//! directory (see [`paths::get_app_data_dir_with_override`]), apart from the user-editable
//! `settings.toml`.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last saved thumbnail.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Directory of the last picked video.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns (state, optional warning key). Failures yield the default state.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the default location when `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot open state file");
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot parse state file");
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location. Returns a warning key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state to `base_dir`, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %err, "cannot create data dir");
                return Some("notification-state-dir-error".to_string());
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot create state file");
                return Some("notification-state-write-error".to_string());
            }
        };
        if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
            tracing::warn!(error = %err, "cannot write state file");
            return Some("notification-state-write-error".to_string());
        }
        None
    }

    /// Remembers the directory of a saved thumbnail.
    pub fn remember_save_location(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }

    /// Remembers the directory of a picked video.
    pub fn remember_open_location(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remember_locations_store_parent_directory() {
        let mut state = AppState::default();
        state.remember_open_location(Path::new("/home/user/videos/clip.mp4"));
        state.remember_save_location(Path::new("/home/user/pictures/thumbnail.png"));

        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/videos"))
        );
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/pictures"))
        );
    }

    #[test]
    fn remember_ignores_root() {
        let mut state = AppState::default();
        state.remember_save_location(Path::new("/"));
        assert!(state.last_save_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");
        let original = AppState {
            last_save_directory: Some(PathBuf::from("/test/save")),
            last_open_directory: Some(PathBuf::from("/test/open")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_returns_default_silently() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }
}
