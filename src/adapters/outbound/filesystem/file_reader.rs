use crate::ports::outbound::GraphDescriptionReader;
use crate::shared::error::ExplorerError;
use crate::shared::security::{check_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading graph description files
///
/// Used both for the temporary file Maven writes and for a DOT file the
/// user passes with `--dot-file`.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Reader with a custom size limit (in bytes)
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphDescriptionReader for FileSystemReader {
    fn read_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ExplorerError::FileReadError {
                path: path.to_path_buf(),
                details: "Dependency graph file does not exist".to_string(),
            }
            .into());
        }

        check_readable_file(path, "dependency graph file", self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            ExplorerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
