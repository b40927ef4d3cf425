//! Release deployment library for Otter Browser
//!
//! This library assembles platform-specific release artifacts from an
//! already-built browser binary:
//! - Linux: a single-file AppImage
//! - Windows: an Inno Setup installer plus `.7z` and `.zip` portable archives
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, DeployError, Result};
