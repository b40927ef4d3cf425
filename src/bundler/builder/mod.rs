//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! selected [`Packager`](crate::bundler::Packager) and describes what it
//! produced.
//!
//! # Example
//!
//! ```no_run
//! use otter_deploy::bundler::{Bundler, Packager, SettingsBuilder};
//!
//! # async fn example() -> otter_deploy::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .qt_path("/opt/Qt/5.15.2/gcc_64")
//!     .build()?;
//!
//! let bundler = Bundler::new(settings, Packager::for_host()?);
//! for artifact in bundler.bundle().await? {
//!     println!("{}: {} ({} bytes)", artifact.kind, artifact.path.display(), artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct

mod checksum;
mod orchestrator;

pub use orchestrator::Bundler;

use std::{fmt, path::Path, path::PathBuf};

/// Kind of file a packager produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `.AppImage`
    AppImage,
    /// Inno Setup `.exe`
    Installer,
    /// `.7z` release archive
    SevenZip,
    /// `.zip` portable archive
    Zip,
}

impl ArtifactKind {
    /// Classify an artifact by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();

        match extension.as_str() {
            "appimage" => Some(ArtifactKind::AppImage),
            "exe" => Some(ArtifactKind::Installer),
            "7z" => Some(ArtifactKind::SevenZip),
            "zip" => Some(ArtifactKind::Zip),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::AppImage => "AppImage",
            ArtifactKind::Installer => "installer",
            ArtifactKind::SevenZip => "7z archive",
            ArtifactKind::Zip => "zip archive",
        };
        f.write_str(name)
    }
}

/// A produced release file.
#[derive(Clone, Debug)]
pub struct BundledArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256
    pub checksum: String,
}
