use crate::shared::error::ExplorerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for DOT files we are willing to load (100 MB).
/// Large multi-module reactors stay far below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file (not a symlink or directory)
/// no larger than `max_size`, and returns its size.
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
pub fn check_readable_file(path: &Path, file_description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ExplorerError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ExplorerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ExplorerError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(ExplorerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_description, size, max_size
            ),
            hint: "Split the reactor or explore a single module".to_string(),
        }
        .into());
    }

    Ok(size)
}

/// Rejects output targets that already exist as symbolic links.
pub fn check_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(ExplorerError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Write to a regular file path".to_string(),
        }
        .into()),
        // Missing files are fine: they are about to be created.
        _ => Ok(()),
    }
}
