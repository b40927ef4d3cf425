//! Fixed tables for the Windows installer pipeline.

/// Conventional 7-Zip location, tried before searching `PATH`.
pub const SEVEN_ZIP_PATH: &str = r"C:\Program Files\7-Zip\7z.exe";
pub const SEVEN_ZIP: &str = "7z.exe";

/// Conventional Inno Setup compiler location, tried before searching `PATH`.
pub const INNO_SETUP_PATH: &str = r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe";
pub const INNO_SETUP: &str = "ISCC.exe";

/// Installer script, relative to the source tree.
pub const INSTALLER_SCRIPT: &[&str] = &["packaging", "otter-browser.iss"];

/// Staging directory name inside the target directory.
pub const STAGING_DIR: &str = "input";

/// Suffix Inno Setup appends to the installer name.
pub const INSTALLER_SUFFIX: &str = "-setup";

/// Extra runtime DLLs copied from Qt's `bin` directory.
pub const EXTRA_DLLS: &[&str] = &["libxml2*.dll", "libxslt*.dll"];

/// Plugin directories windeployqt installs that the browser never loads.
pub const REDUNDANT_PLUGINS: &[&str] = &[
    "playlistformats",
    "position",
    "qmltooling",
    "scenegraph",
    "sensorgestures",
    "sensors",
];

/// Written to `arguments.txt` so the unpacked archive runs in portable mode.
pub const PORTABLE_ARGUMENTS: &str = "--portable";
pub const ARGUMENTS_FILE: &str = "arguments.txt";
