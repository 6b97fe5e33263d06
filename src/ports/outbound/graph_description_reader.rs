use crate::shared::Result;
use std::path::Path;

/// GraphDescriptionReader port for loading a graph description file
///
/// This port abstracts the file system operations needed to read the
/// file written by the build tool (or passed in by the user).
pub trait GraphDescriptionReader {
    /// Reads the whole description file as text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or exceeds the size limit
    /// - The file cannot be read as UTF-8
    fn read_description(&self, path: &Path) -> Result<String>;
}
