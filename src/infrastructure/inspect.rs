// SPDX-License-Identifier: MPL-2.0
//! Local file inspection for picked or dropped videos.

use crate::domain::thumbnail::validator::{sniff_video_mime, SNIFF_LEN};
use crate::domain::thumbnail::{SubmissionError, VideoFile};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Builds a [`VideoFile`] from a path: size from metadata, declared type
/// from the header bytes.
///
/// Only reads the first few bytes, so it is cheap enough to run inside the
/// update loop.
///
/// # Errors
///
/// Returns [`SubmissionError::Io`] when the path is not a readable file.
pub fn read_video_file(path: &Path) -> Result<VideoFile, SubmissionError> {
    let metadata = std::fs::metadata(path).map_err(|e| SubmissionError::Io(e.to_string()))?;
    if !metadata.is_file() {
        return Err(SubmissionError::Io(format!(
            "{} is not a file",
            path.display()
        )));
    }

    let mime = read_header(path)
        .ok()
        .and_then(|header| sniff_video_mime(&header))
        .map(str::to_string);

    Ok(VideoFile::new(path, metadata.len(), mime))
}

fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut header = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sniffs_mp4_header() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("renamed.bin");
        let mut bytes = vec![0, 0, 0, 0x18];
        bytes.extend_from_slice(b"ftypmp42");
        bytes.extend_from_slice(&[0; 100]);
        std::fs::write(&path, &bytes).expect("write");

        let file = read_video_file(&path).expect("inspect");
        assert_eq!(file.mime(), Some("video/mp4"));
        assert_eq!(file.size(), bytes.len() as u64);
        assert_eq!(file.name(), "renamed.bin");
    }

    #[test]
    fn text_file_has_no_mime() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");

        let file = read_video_file(&path).expect("inspect");
        assert_eq!(file.mime(), None);
    }

    #[test]
    fn missing_file_and_directory_are_io_errors() {
        let dir = tempdir().expect("temp dir");
        assert!(matches!(
            read_video_file(&dir.path().join("absent.mp4")),
            Err(SubmissionError::Io(_))
        ));
        assert!(matches!(
            read_video_file(dir.path()),
            Err(SubmissionError::Io(_))
        ));
    }
}
