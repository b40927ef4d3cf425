//! Release naming and archive production.

use crate::bundler::{
    error::{ErrorExt, Result},
    settings::{
        APP_NAME,
        windows::{ARGUMENTS_FILE, INSTALLER_SUFFIX, PORTABLE_ARGUMENTS},
    },
    utils::{fs, process::CommandLine},
};
use std::path::{Path, PathBuf};

/// First installer executable in `target_path`, in file name order.
pub fn find_installer(target_path: &Path) -> Result<Option<PathBuf>> {
    Ok(fs::glob_in(target_path, "*.exe")?.into_iter().next())
}

/// Canonical release name derived from the installer file name.
///
/// `otter-browser-win64-1.0.03-setup.exe` gives `otter-browser-win64-1.0.03`;
/// without an installer the plain application name is used.
pub fn release_name(installer: Option<&Path>) -> String {
    installer
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().replace(INSTALLER_SUFFIX, ""))
        .unwrap_or_else(|| APP_NAME.to_string())
}

/// `7z a <target>/<release>.7z <release dir>`
pub fn seven_zip_command(seven_zip: &Path, archive: &Path, release_dir: &Path) -> CommandLine {
    CommandLine::new(seven_zip)
        .arg("a")
        .arg(archive.as_os_str())
        .arg(release_dir.as_os_str())
}

/// `powershell Compress-Archive "<release dir>" "<target>/<release>.zip"`
///
/// Paths are quoted for PowerShell, which re-parses its arguments as a script.
pub fn zip_command(archive: &Path, release_dir: &Path) -> CommandLine {
    CommandLine::new("powershell")
        .arg("Compress-Archive")
        .arg(format!("\"{}\"", release_dir.display()))
        .arg(format!("\"{}\"", archive.display()))
}

/// Writes `arguments.txt` so the unpacked release starts in portable mode.
pub async fn write_portable_flag(release_dir: &Path) -> Result<PathBuf> {
    let path = release_dir.join(ARGUMENTS_FILE);

    tokio::fs::write(&path, PORTABLE_ARGUMENTS)
        .await
        .fs_context("writing portable arguments", &path)?;

    Ok(path)
}
