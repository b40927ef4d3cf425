//! Shared fixtures for deployment integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch source tree, build directory and Qt installation.
pub struct TestTree {
    pub temp: TempDir,
    pub source: PathBuf,
    pub build: PathBuf,
    pub target: PathBuf,
    pub qt: PathBuf,
}

impl TestTree {
    /// Lays out everything the AppImage pipeline copies from the source tree.
    pub fn new() -> Self {
        let tree = Self::with_qt_kit("gcc_64");
        tree.write("otter-browser/build/otter-browser", "elf");
        tree.write("Qt/5.15.2/gcc_64/lib/libicudata.so.56", "icu");
        tree.write("Qt/5.15.2/gcc_64/bin/qmake", "qmake");
        tree
    }

    /// Source tree, Windows build output and a Qt kit named `kit`, e.g.
    /// `msvc2019_64`.
    pub fn windows(kit: &str) -> Self {
        let tree = Self::with_qt_kit(kit);
        tree.write("otter-browser/build/otter-browser.exe", "MZ");
        tree.write(&format!("Qt/5.15.2/{}/bin/libxml2-2.dll", kit), "MZ");
        tree.write(&format!("Qt/5.15.2/{}/bin/Qt5Core.dll", kit), "MZ");
        tree
    }

    fn with_qt_kit(kit: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("otter-browser");
        let build = source.join("build");
        let target = source.join("output");
        let qt = temp.path().join("Qt/5.15.2").join(kit);

        let tree = Self {
            temp,
            source,
            build,
            target,
            qt,
        };

        tree.write("otter-browser/otter-browser.desktop", "[Desktop Entry]\nName=Otter Browser\n");
        for size in [16, 32, 48, 64, 128, 256] {
            tree.write(
                &format!("otter-browser/resources/icons/otter-browser-{}.png", size),
                "png",
            );
        }
        tree.write("otter-browser/resources/icons/otter-browser.svg", "<svg/>");
        tree.write("otter-browser/resources/translations/otter-browser_de_DE.qm", "qm");
        tree.write("otter-browser/resources/translations/otter-browser_pl_PL.qm", "qm");
        tree.write("otter-browser/COPYING", "GPL");

        tree
    }

    /// Write a file relative to the temp root
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Tools directory the AppImage pipeline uses when downloads are enabled.
    pub fn tools_dir(&self) -> PathBuf {
        self.source.join("packaging").join("appimage-tools")
    }

    /// Install a shell script as an executable tool.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) -> PathBuf {
        self.install_executable(&format!("otter-browser/packaging/appimage-tools/{}", name), script)
    }

    /// Write an executable script relative to the temp root.
    #[cfg(unix)]
    pub fn install_executable(&self, path: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write(path, script);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        path
    }

    /// File names directly inside the target directory.
    pub fn target_entries(&self) -> Vec<String> {
        list(&self.target)
    }
}

pub fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Fake linuxdeploy: fills the AppDir with a binary, libraries and docs.
pub const FAKE_LINUXDEPLOY: &str = r#"#!/bin/sh
for arg in "$@"; do
    case "$arg" in
        --appdir=*) appdir="${arg#--appdir=}" ;;
        --executable=*) executable="${arg#--executable=}" ;;
    esac
done
[ -f "$executable" ] || exit 3
[ -n "$QMAKE" ] || exit 4
case "$LD_LIBRARY_PATH" in
    */lib*) ;;
    *) exit 5 ;;
esac
mkdir -p "$appdir/usr/bin" "$appdir/usr/lib" "$appdir/usr/share/doc/otter-browser"
cp "$executable" "$appdir/usr/bin/"
for lib in libogg.so.0 libxml2.so.2 libicuuc.so.66 libicudata.so.56 libQt5Core.so.5; do
    echo elf > "$appdir/usr/lib/$lib"
done
echo doc > "$appdir/usr/share/doc/otter-browser/README"
"#;

/// Fake appimagetool: checks the pruned AppDir and writes the image.
pub const FAKE_APPIMAGETOOL: &str = r#"#!/bin/sh
[ -d "$1" ] || exit 3
[ ! -e "$1/usr/lib/libogg.so.0" ] || exit 4
[ ! -e "$1/usr/lib/libicuuc.so.66" ] || exit 5
[ -e "$1/usr/lib/libicudata.so.56" ] || exit 6
[ ! -e "$1/usr/share/doc" ] || exit 7
[ -f "$1/usr/share/icons/hicolor/scalable/apps/otter-browser.svg" ] || exit 8
[ -f "$1/usr/share/otter-browser/locale/otter-browser_de_DE.qm" ] || exit 9
[ -f "$1/usr/share/applications/otter-browser.desktop" ] || exit 10
echo image > "$2"
"#;

/// Placeholder for linuxdeploy's Qt plugin, which is only located.
pub const FAKE_PLUGIN: &str = "#!/bin/sh\nexit 0\n";

/// Fake windeployqt: drops Qt runtime files and plugins next to the executable.
pub const FAKE_WINDEPLOYQT: &str = r#"#!/bin/sh
[ -f "$1" ] || exit 3
dir=$(dirname "$1")
mkdir -p "$dir/platforms" "$dir/qmltooling" "$dir/sensors"
echo dll > "$dir/platforms/qwindows.dll"
echo dll > "$dir/qmltooling/qmldbg_debugger.dll"
echo dll > "$dir/sensors/qtsensors_generic.dll"
echo dll > "$dir/Qt5Core.dll"
"#;

/// Fake Inno Setup compiler: records its arguments in `{log}`, checks the
/// staged input and writes the installer.
pub const FAKE_ISCC: &str = r#"#!/bin/sh
echo "$@" > "{log}"
for arg in "$@"; do
    case "$arg" in
        /DOtterWorkingDir=*) workdir="${arg#/DOtterWorkingDir=}" ;;
    esac
done
[ -f "$workdir/input/otter-browser.exe" ] || exit 3
[ -f "$workdir/input/COPYING" ] || exit 4
[ -f "$workdir/input/locale/otter-browser_de_DE.qm" ] || exit 5
[ -f "$workdir/input/libxml2-2.dll" ] || exit 6
[ -f "$workdir/input/platforms/qwindows.dll" ] || exit 7
[ ! -e "$workdir/input/qmltooling" ] || exit 8
[ ! -e "$workdir/input/sensors" ] || exit 9
echo installer > "$workdir/otter-browser-1.0-setup.exe"
"#;

/// Fake 7-Zip: `7z.exe a <archive> <dir>`, run before portable mode is set.
pub const FAKE_SEVEN_ZIP: &str = r#"#!/bin/sh
[ "$1" = a ] || exit 3
[ -f "$3/otter-browser.exe" ] || exit 4
[ ! -e "$3/arguments.txt" ] || exit 5
echo 7z > "$2"
"#;

/// Fake PowerShell: `Compress-Archive <dir> <archive>` over a portable release.
pub const FAKE_POWERSHELL: &str = r#"#!/bin/sh
[ "$1" = Compress-Archive ] || exit 3
[ -f "$2/otter-browser.exe" ] || exit 4
[ "$(cat "$2/arguments.txt")" = --portable ] || exit 5
echo zip > "$3"
"#;
