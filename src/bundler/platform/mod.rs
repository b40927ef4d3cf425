//! Platform packagers.
//!
//! Exactly one packager runs per invocation, chosen from the host operating
//! system at startup. Both pipelines are compiled everywhere; only the
//! external tools they drive are platform specific.

pub mod linux;
pub mod windows;

use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
};
use std::{fmt, path::PathBuf};

/// The platform packaging capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Packager {
    /// Single-file Linux image built with linuxdeploy and appimagetool
    AppImage,
    /// Inno Setup installer plus portable `.7z`/`.zip` archives
    WindowsInstaller,
}

impl Packager {
    /// Selects the packager for the operating system this binary was built for.
    pub fn for_host() -> Result<Self> {
        Self::for_os(std::env::consts::OS)
    }

    /// Selects the packager for an operating system name as reported by
    /// [`std::env::consts::OS`].
    pub fn for_os(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(Packager::AppImage),
            "windows" => Ok(Packager::WindowsInstaller),
            other => Err(Error::UnsupportedHost(other.to_string())),
        }
    }

    /// Runs the pipeline and returns the paths of the produced artifacts.
    pub async fn package(self, settings: &Settings) -> Result<Vec<PathBuf>> {
        match self {
            Packager::AppImage => linux::appimage::bundle_project(settings).await,
            Packager::WindowsInstaller => windows::bundle_project(settings).await,
        }
    }
}

impl fmt::Display for Packager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packager::AppImage => write!(f, "AppImage"),
            Packager::WindowsInstaller => write!(f, "Windows installer"),
        }
    }
}
