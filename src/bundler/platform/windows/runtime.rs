//! Qt runtime deployment into the installer staging directory.

use crate::bundler::{
    error::{Error, Result},
    settings::windows::{EXTRA_DLLS, REDUNDANT_PLUGINS},
    utils::{
        fs,
        process::{self, CommandLine},
    },
};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// `windeployqt.exe <staged executable>` from Qt's `bin` directory.
pub fn windeployqt_command(qt_path: &Path, executable: &Path) -> CommandLine {
    CommandLine::new(qt_path.join("bin").join("windeployqt.exe")).arg(executable.as_os_str())
}

/// Runs windeployqt against the staged executable, pulling Qt DLLs and
/// plugins in next to it.
pub async fn run_windeployqt(qt_path: &Path, executable: &Path, search_path: &OsStr) -> Result<()> {
    log::info!("Running windeployqt");

    // The Qt path may contain spaces; the shell line escapes it per segment
    let command =
        windeployqt_command(qt_path, executable).envs(process::search_path_env(search_path));
    process::run_shell(&command).await
}

/// Copies every DLL in `dll_dir` matching [`EXTRA_DLLS`] into `staging_dir`.
///
/// Patterns without matches are skipped.
pub async fn copy_extra_dlls(dll_dir: &Path, staging_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for pattern in EXTRA_DLLS {
        for dll in fs::glob_in(dll_dir, pattern)? {
            copied.push(fs::copy_into(&dll, staging_dir).await?);
        }
    }

    Ok(copied)
}

/// Copies user-supplied libraries into `staging_dir`, pattern by pattern.
///
/// # Errors
///
/// [`Error::ExtraLibraryNotFound`] for the first pattern that matches no
/// file; later patterns are not processed.
pub async fn copy_extra_libs(patterns: &[String], staging_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for pattern in patterns {
        let matches = fs::glob_matches(pattern)?;

        if matches.is_empty() {
            return Err(Error::ExtraLibraryNotFound {
                pattern: pattern.clone(),
            });
        }

        for library in matches {
            copied.push(fs::copy_into(&library, staging_dir).await?);
        }
    }

    Ok(copied)
}

/// Deletes the [`REDUNDANT_PLUGINS`] directories windeployqt created.
pub async fn remove_redundant_plugins(staging_dir: &Path) -> Result<()> {
    for plugin in REDUNDANT_PLUGINS {
        let path = staging_dir.join(plugin);

        if let Err(e) = fs::remove_dir_all(&path).await {
            log::warn!("Could not remove plugin directory: {}", e);
        }
    }

    Ok(())
}
