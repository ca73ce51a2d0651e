use crate::ports::outbound::ReportReader;
use crate::shared::error::DiffError;
use crate::shared::security::{inspect_regular_file, validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading dependency reports from disk
///
/// Symbolic links, non-regular files and files above [`MAX_FILE_SIZE`]
/// are refused before any content is read.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Reader with a custom size limit (tests use a small one).
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let size = inspect_regular_file(path, "dependency report")?;
        validate_file_size(size, path, self.max_file_size)?;
        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read dependency report: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if fs::symlink_metadata(path).is_err() {
            return Err(DiffError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            }
            .into());
        }

        let text = self.safe_read_file(path).map_err(|e| DiffError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        log::debug!("Read {} byte(s) from {}", text.len(), path.display());
        Ok(text)
    }
}
