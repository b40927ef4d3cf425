//! End-to-end AppImage pipeline with stand-in deployment tools.

#![cfg(unix)]

mod common;

use common::{FAKE_APPIMAGETOOL, FAKE_LINUXDEPLOY, FAKE_PLUGIN, TestTree};
use otter_deploy::bundler::{ArtifactKind, Bundler, Packager, SettingsBuilder};
use std::ffi::OsString;

#[tokio::test]
async fn produces_single_appimage_and_removes_appdir() {
    let tree = TestTree::new();
    tree.install_tool("linuxdeploy-x86_64.AppImage", FAKE_LINUXDEPLOY);
    tree.install_tool("appimagetool-x86_64.AppImage", FAKE_APPIMAGETOOL);
    tree.install_tool("linuxdeploy-plugin-qt-x86_64.AppImage", FAKE_PLUGIN);

    let settings = SettingsBuilder::new()
        .source_path(&tree.source)
        .qt_path(&tree.qt)
        .search_path(OsString::new())
        .library_path(None)
        .build()
        .expect("Failed to build settings");

    let artifacts = Bundler::new(settings, Packager::AppImage)
        .bundle()
        .await
        .expect("AppImage pipeline failed");

    assert_eq!(tree.target_entries(), ["otter-browser-x86_64.AppImage"]);
    assert!(!tree.target.join("otter-browser").exists());

    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].kind, ArtifactKind::AppImage);
    assert_eq!(artifacts[0].path, tree.target.join("otter-browser-x86_64.AppImage"));
    assert_eq!(artifacts[0].size, "image\n".len() as u64);
    assert_eq!(artifacts[0].checksum.len(), 64);
}
