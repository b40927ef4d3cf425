//! Core Settings struct and accessors.

use super::Arch;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Base name shared by the executable, desktop entry, icons and artifacts.
pub const APP_NAME: &str = "otter-browser";

/// Immutable configuration for one deployment run.
///
/// Constructed with [`SettingsBuilder`](super::SettingsBuilder). Environment
/// values the external tools need (`PATH`, `LD_LIBRARY_PATH`) are captured
/// here once instead of being read or written by the pipelines.
#[derive(Clone, Debug)]
pub struct Settings {
    pub(super) source_path: PathBuf,
    pub(super) build_path: PathBuf,
    pub(super) target_path: PathBuf,
    pub(super) qt_path: PathBuf,
    pub(super) extra_libs: Vec<String>,
    pub(super) tools_path: Option<PathBuf>,
    pub(super) search_path: OsString,
    pub(super) library_path: Option<OsString>,
}

impl Settings {
    /// Source tree root (contains `resources/`, `packaging/`, `COPYING`).
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Directory holding the built `otter-browser` executable.
    pub fn build_path(&self) -> &Path {
        &self.build_path
    }

    /// Output directory for artifacts; staging directories are created here.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Qt installation root (contains `bin/` and `lib/`).
    pub fn qt_path(&self) -> &Path {
        &self.qt_path
    }

    /// User-supplied glob patterns for additional Windows libraries.
    pub fn extra_libs(&self) -> &[String] {
        &self.extra_libs
    }

    /// Where missing Linux deployment tools are looked up and downloaded.
    ///
    /// `None` when tool downloads are disabled.
    pub fn tools_path(&self) -> Option<&Path> {
        self.tools_path.as_deref()
    }

    /// Executable search path used by the tool locator.
    pub fn search_path(&self) -> &OsString {
        &self.search_path
    }

    /// Library search path inherited from the invoking environment.
    pub fn library_path(&self) -> Option<&OsString> {
        self.library_path.as_ref()
    }

    /// Architecture of the Qt kit, inferred from its directory name.
    pub fn qt_arch(&self) -> Arch {
        Arch::from_qt_path(&self.qt_path)
    }

    /// Path to the built executable for the given file name.
    pub fn binary_path(&self, file_name: &str) -> PathBuf {
        self.build_path.join(file_name)
    }
}
