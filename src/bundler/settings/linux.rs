//! Fixed tables for the AppImage pipeline.

use super::Arch;

/// Architecture of the produced AppImage and of the deployment tools.
pub const APPIMAGE_ARCH: Arch = Arch::X86_64;

/// An external tool fetched on demand into the tools directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinuxTool {
    /// Executable file name
    pub name: &'static str,
    /// Pinned download location
    pub url: &'static str,
}

/// AppDir deployer; bundles shared libraries next to the executable.
pub const LINUXDEPLOY: LinuxTool = LinuxTool {
    name: "linuxdeploy-x86_64.AppImage",
    url: "https://bintray.com/qtproject/linuxdeploy-mirror/download_file?file_path=2020-06-03%2Flinuxdeploy-x86_64.AppImage",
};

/// Qt plugin for the AppDir deployer. Located but never invoked: linuxdeploy
/// picks it up from its own directory or `PATH`.
pub const LINUXDEPLOY_PLUGIN_QT: LinuxTool = LinuxTool {
    name: "linuxdeploy-plugin-qt-x86_64.AppImage",
    url: "https://bintray.com/qtproject/linuxdeploy-mirror/download_file?file_path=2020-06-03%2Flinuxdeploy-plugin-qt-x86_64.AppImage",
};

/// Turns a populated AppDir into a single-file image.
pub const APPIMAGETOOL: LinuxTool = LinuxTool {
    name: "appimagetool-x86_64.AppImage",
    url: "https://github.com/AppImage/AppImageKit/releases/download/continuous/appimagetool-x86_64.AppImage",
};

/// Icon variants installed into the hicolor theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSize {
    /// PNG rendered at `n`x`n` pixels
    Raster(u32),
    /// SVG
    Scalable,
}

pub const ICON_SIZES: &[IconSize] = &[
    IconSize::Raster(16),
    IconSize::Raster(32),
    IconSize::Raster(48),
    IconSize::Raster(64),
    IconSize::Raster(128),
    IconSize::Raster(256),
    IconSize::Scalable,
];

/// Bundled libraries removed after deployment (`usr/lib` globs). Target
/// systems ship these or the browser does not need them.
pub const REDUNDANT_LIBRARIES: &[&str] = &[
    "libgst*-1.0.*",
    "libFLAC.*",
    "libogg.*",
    "libvorbis*.*",
    "libmount.*",
    "libpulse*.*",
    "libsystemd.*",
    "libxml2.*",
];

/// ICU libraries; kept only when Qt's own `lib` directory ships the same file.
pub const ICU_LIBRARIES: &str = "libicu*.*";
