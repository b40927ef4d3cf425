//! Error types for packaging operations.
//!
//! No error is recovered from locally: every variant ends the run with a
//! one-line message, and the staging directory is left behind for inspection.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling release artifacts
#[derive(ThisError, Debug)]
pub enum Error {
    /// A required external tool was not found locally and could not be downloaded
    #[error("failed to locate {name}")]
    ToolNotFound {
        /// Executable name or path
        name: String,
    },

    /// A user-supplied `--extra-libs` pattern matched nothing
    #[error("failed to locate {pattern}")]
    ExtraLibraryNotFound {
        /// The glob pattern as given on the command line
        pattern: String,
    },

    /// An external command could not be spawned
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Program that failed to start
        command: String,
        /// Underlying spawn error
        #[source]
        error: io::Error,
    },

    /// An external command exited with a non-zero status
    #[error("failed to execute \"{command}\"")]
    CommandExited {
        /// Full command line
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },

    /// A tool download failed
    #[error("failed to download {url}: {reason}")]
    Download {
        /// Source URL
        url: String,
        /// Failure description
        reason: String,
    },

    /// Filesystem operation failed
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// Malformed glob pattern
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// IO errors without further context
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Host operating system has no packager
    #[error("unsupported host platform: {0}")]
    UnsupportedHost(String),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

impl From<glob::GlobError> for Error {
    fn from(error: glob::GlobError) -> Self {
        let path = error.path().to_path_buf();
        Error::Fs {
            context: "reading glob match".to_string(),
            path,
            error: io::Error::from(error),
        }
    }
}

/// Attach a message to a failed `Result` or an empty `Option`.
pub trait Context<T> {
    /// Wrap the failure with a fixed message.
    fn context<C: Display>(self, context: C) -> Result<T>;

    /// Wrap the failure with a lazily built message.
    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

impl<T, E: std::error::Error> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", context, e)))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", f(), e)))
    }
}

/// Filesystem context for `io::Result`.
pub trait ErrorExt<T> {
    /// Wrap an IO failure with the action and the path it concerned.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
