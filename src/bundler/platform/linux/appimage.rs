//! AppImage bundler - portable Linux applications.

use crate::bundler::{
    error::{Context, ErrorExt, Result},
    resources::{deploy_icons, deploy_locale},
    settings::{
        APP_NAME, Settings,
        linux::{
            APPIMAGE_ARCH, APPIMAGETOOL, ICON_SIZES, ICU_LIBRARIES, LINUXDEPLOY,
            LINUXDEPLOY_PLUGIN_QT, REDUNDANT_LIBRARIES,
        },
    },
    utils::{
        fs,
        process::{self, CommandLine},
        tools::ToolLocator,
    },
};
use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Bundle the browser as an AppImage.
///
/// # Process
///
/// 1. Locates (or downloads into the tools directory) linuxdeploy, its Qt
///    plugin and appimagetool
/// 2. Creates the AppDir skeleton under `<target>/otter-browser`
/// 3. Copies the desktop entry, icons and translations
/// 4. Runs linuxdeploy with Qt's `lib` directory on the library path
/// 5. Drops bundled documentation and redundant shared libraries
/// 6. Runs appimagetool and removes the AppDir
///
/// A failure at any step aborts the run and leaves the AppDir in place.
///
/// # Returns
///
/// Vector containing the path to `otter-browser-x86_64.AppImage`.
pub async fn bundle_project(settings: &Settings) -> Result<Vec<PathBuf>> {
    log::info!("Building AppImage for {}", APP_NAME);

    // 1. Locate tools
    if let Some(tools_path) = settings.tools_path() {
        fs::create_dir_all(tools_path).await?;
    }

    let locator = ToolLocator::new(settings.tools_path(), settings.search_path());
    let linuxdeploy = locator
        .require(LINUXDEPLOY.name, Some(LINUXDEPLOY.url))
        .await?;
    let appimagetool = locator
        .require(APPIMAGETOOL.name, Some(APPIMAGETOOL.url))
        .await?;

    // linuxdeploy finds its Qt plugin next to itself or on PATH
    locator
        .require(LINUXDEPLOY_PLUGIN_QT.name, Some(LINUXDEPLOY_PLUGIN_QT.url))
        .await?;

    // 2. Create AppDir structure
    let app_dir = settings.target_path().join(APP_NAME);
    let share_dir = app_dir.join("usr").join("share");
    let applications_dir = share_dir.join("applications");
    let theme_dir = share_dir.join("icons").join("hicolor");
    let data_dir = share_dir.join(APP_NAME);

    for dir in [&applications_dir, &theme_dir, &data_dir] {
        fs::create_dir_all(dir).await?;
    }

    // 3. Copy resources
    let desktop_file = format!("{}.desktop", APP_NAME);
    fs::copy_file(
        &settings.source_path().join(&desktop_file),
        &applications_dir.join(&desktop_file),
    )
    .await?;

    deploy_icons(settings.source_path(), &theme_dir, ICON_SIZES).await?;
    deploy_locale(settings.source_path(), &data_dir).await?;

    // 4. Invoke linuxdeploy
    log::info!("Running linuxdeploy");

    let deploy = CommandLine::new(&linuxdeploy)
        .arg("--plugin=qt")
        .arg(format!(
            "--executable={}",
            settings.binary_path(APP_NAME).display()
        ))
        .arg(format!("--appdir={}", app_dir.display()))
        .envs(deployer_environment(
            settings.qt_path(),
            settings.library_path(),
        )?);

    process::run(&deploy).await?;

    // 5. Trim the bundle
    if let Err(e) = fs::remove_dir_all(&share_dir.join("doc")).await {
        log::warn!("Could not remove bundled documentation: {}", e);
    }

    let removed = prune_libraries(&app_dir.join("usr").join("lib"), settings.qt_path()).await?;
    log::info!("Removed {} redundant libraries", removed.len());

    // 6. Invoke appimagetool
    let appimage_path = settings.target_path().join(appimage_file_name());

    log::info!("Running appimagetool");

    let package = CommandLine::new(&appimagetool)
        .arg(app_dir.as_os_str())
        .arg(appimage_path.as_os_str());

    process::run(&package).await?;

    fs::remove_dir_all(&app_dir).await?;

    Ok(vec![appimage_path])
}

/// `otter-browser-x86_64.AppImage`
pub fn appimage_file_name() -> String {
    format!("{}-{}.AppImage", APP_NAME, APPIMAGE_ARCH.as_str())
}

/// Environment for linuxdeploy and its Qt plugin.
///
/// `LD_LIBRARY_PATH` is Qt's `lib` directory followed by the inherited
/// library path, and `QMAKE` points at Qt's qmake so the plugin deploys the
/// right Qt installation.
pub fn deployer_environment(
    qt_path: &Path,
    inherited_library_path: Option<&OsString>,
) -> Result<BTreeMap<OsString, OsString>> {
    let mut library_dirs = vec![qt_path.join("lib")];

    if let Some(inherited) = inherited_library_path {
        library_dirs.extend(std::env::split_paths(inherited));
    }

    let library_path =
        std::env::join_paths(library_dirs).context("building LD_LIBRARY_PATH")?;

    let mut environment = BTreeMap::new();
    environment.insert(OsString::from("LD_LIBRARY_PATH"), library_path);
    environment.insert(
        OsString::from("QMAKE"),
        qt_path.join("bin").join("qmake").into_os_string(),
    );

    Ok(environment)
}

/// Deletes libraries from `lib_dir` that should not ship in the image.
///
/// Everything matching [`REDUNDANT_LIBRARIES`] goes. ICU libraries go unless
/// Qt's own `lib` directory contains a file of the same name, meaning the
/// bundled copy is the one Qt was built against.
pub async fn prune_libraries(lib_dir: &Path, qt_path: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = fs::remove_matching(lib_dir, REDUNDANT_LIBRARIES).await?;
    let qt_lib_dir = qt_path.join("lib");

    for library in fs::glob_in(lib_dir, ICU_LIBRARIES)? {
        let Some(name) = library.file_name() else {
            continue;
        };

        if qt_lib_dir.join(name).exists() {
            log::debug!("Keeping {} shipped by Qt", library.display());
            continue;
        }

        tokio::fs::remove_file(&library)
            .await
            .fs_context("removing ICU library", &library)?;
        removed.push(library);
    }

    Ok(removed)
}
