//! Top-level error types for the deployment tool.
//!
//! Every failure is fatal: errors propagate to `main`, which prints a single
//! line on stderr and exits with a non-zero status.

use thiserror::Error;

/// Result type alias for deployment operations
pub type Result<T> = std::result::Result<T, DeployError>;

/// Main error type for all deployment operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// CLI argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// Packaging errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing required argument
    #[error("the following arguments are required: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}
