//! Windows installer pipeline.

use super::{archive, runtime};
use crate::bundler::{
    error::{ErrorExt, Result},
    resources::deploy_locale,
    settings::{
        APP_NAME, Settings,
        windows::{INNO_SETUP, INNO_SETUP_PATH, INSTALLER_SCRIPT, SEVEN_ZIP, SEVEN_ZIP_PATH, STAGING_DIR},
    },
    utils::{
        fs,
        process::{self, CommandLine},
        tools::ToolLocator,
    },
};
use std::path::{Path, PathBuf};

/// Bundle the browser as an Inno Setup installer with portable archives.
///
/// # Process
///
/// 1. Locates 7-Zip (optional) and the Inno Setup compiler (required)
/// 2. Stages the executable, `COPYING` and translations in `<target>/input`
/// 3. Runs windeployqt and adds extra DLLs and `--extra-libs` matches
/// 4. Removes unneeded Qt plugin directories
/// 5. Compiles the installer
/// 6. Renames the staging directory after the installer, then archives it
///    as `.7z` (when 7-Zip is available) and `.zip` with portable mode on
///
/// # Returns
///
/// The installer (when one was produced), the `.7z` archive (when 7-Zip was
/// found) and the `.zip` archive.
pub async fn bundle_project(settings: &Settings) -> Result<Vec<PathBuf>> {
    log::info!("Building Windows installer for {}", APP_NAME);

    let target_path = settings.target_path();
    fs::create_dir_all(target_path).await?;

    // 1. Locate tools
    let locator = ToolLocator::new(None, settings.search_path());
    let seven_zip = match conventional_tool(SEVEN_ZIP_PATH) {
        Some(path) => Some(path),
        None => locator.find_optional(SEVEN_ZIP, None).await?,
    };
    let inno_setup = match conventional_tool(INNO_SETUP_PATH) {
        Some(path) => path,
        None => locator.require(INNO_SETUP, None).await?,
    };

    // 2. Stage files
    let staging_dir = target_path.join(STAGING_DIR);

    tokio::fs::create_dir(&staging_dir)
        .await
        .fs_context("creating installer staging directory", &staging_dir)?;

    let executable = fs::copy_into(
        &settings.binary_path(&format!("{}.exe", APP_NAME)),
        &staging_dir,
    )
    .await?;
    fs::copy_into(&settings.source_path().join("COPYING"), &staging_dir).await?;
    deploy_locale(settings.source_path(), &staging_dir).await?;

    // 3. Qt runtime and extra libraries
    runtime::run_windeployqt(settings.qt_path(), &executable, settings.search_path()).await?;
    runtime::copy_extra_dlls(&settings.qt_path().join("bin"), &staging_dir).await?;
    runtime::copy_extra_libs(settings.extra_libs(), &staging_dir).await?;

    // 4. Prune plugins
    runtime::remove_redundant_plugins(&staging_dir).await?;

    // 5. Compile installer
    log::info!("Running Inno Setup compiler");
    let compiler = installer_compiler_command(&inno_setup, settings)
        .envs(process::search_path_env(settings.search_path()));
    process::run_shell(&compiler).await?;

    // 6. Release directory and archives
    let installer = archive::find_installer(target_path)?;
    let release_name = archive::release_name(installer.as_deref());
    let release_dir = target_path.join(&release_name);

    if installer.is_none() {
        log::warn!("No installer found in {}", target_path.display());
    }

    tokio::fs::rename(&staging_dir, &release_dir)
        .await
        .fs_context("renaming staging directory", &staging_dir)?;

    let mut artifacts: Vec<PathBuf> = installer.into_iter().collect();

    if let Some(seven_zip) = &seven_zip {
        let archive_path = target_path.join(format!("{}.7z", release_name));

        log::info!("Creating {}", archive_path.display());
        process::run(&archive::seven_zip_command(seven_zip, &archive_path, &release_dir)).await?;
        artifacts.push(archive_path);
    } else {
        log::warn!("Skipping .7z archive");
    }

    archive::write_portable_flag(&release_dir).await?;

    let zip_path = target_path.join(format!("{}.zip", release_name));

    log::info!("Creating {}", zip_path.display());
    let zip = archive::zip_command(&zip_path, &release_dir)
        .envs(process::search_path_env(settings.search_path()));
    process::run_shell(&zip).await?;
    artifacts.push(zip_path);

    fs::remove_dir_all(&release_dir).await?;

    Ok(artifacts)
}

/// `ISCC.exe /DOtterWorkingDir="<target>" [/DOtterWin64=1] "<source>\packaging\otter-browser.iss"`
///
/// The installer script reads its input from `<OtterWorkingDir>\input`.
/// `OtterWin64` is defined only for 64-bit Qt kits, see
/// [`Arch::from_qt_path`](crate::bundler::Arch::from_qt_path).
pub fn installer_compiler_command(inno_setup: &Path, settings: &Settings) -> CommandLine {
    let script = INSTALLER_SCRIPT
        .iter()
        .fold(settings.source_path().to_path_buf(), |path, part| path.join(part));

    let mut command = CommandLine::new(inno_setup).arg(format!(
        "/DOtterWorkingDir=\"{}\"",
        settings.target_path().display()
    ));

    if settings.qt_arch().is_64_bit() {
        command = command.arg("/DOtterWin64=1");
    }

    command.arg(format!("\"{}\"", script.display()))
}

fn conventional_tool(path: &str) -> Option<PathBuf> {
    let path = PathBuf::from(path);
    path.is_file().then_some(path)
}
