use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a broken Maven build apart from a usage mistake
/// or an I/O problem on our side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The dependency tree was rendered
    Success = 0,
    /// Maven could not be started or exited with a failure status
    BuildToolFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Any other error (missing pom.xml, unreadable DOT file, write failure, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code that matches an error returned by the application.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ExplorerError>() {
            Some(ExplorerError::BuildToolFailed { .. }) => ExitCode::BuildToolFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BuildToolFailed => write!(f, "Build Tool Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// User-facing errors raised while exploring a dependency tree.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("pom.xml not found: {path}\n\n💡 Hint: {suggestion}")]
    PomNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid Maven project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Maven dependency:tree failed\nCommand: {command}\nStatus: {status}\nDetails: {details}\n\n💡 Hint: Run the command yourself to see the full build output")]
    BuildToolFailed {
        command: String,
        status: String,
        details: String,
    },

    #[error("Failed to parse dependency graph: {source_name} (line {line})\nDetails: {details}\n\n💡 Hint: The file is expected to be Graphviz DOT output of `mvn dependency:tree -DoutputType=dot`")]
    DotParseError {
        source_name: String,
        line: usize,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Invalid configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
