//! Builder for constructing Settings.

use super::Settings;
use crate::bundler::error::{Context, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Builder for constructing [`Settings`].
///
/// Unset paths fall back to the source tree layout:
///
/// | setting       | default                                  |
/// |---------------|------------------------------------------|
/// | `source_path` | current working directory                |
/// | `build_path`  | `<source>/build`                         |
/// | `target_path` | `<source>/output`                        |
/// | tools dir     | `<source>/packaging/appimage-tools`      |
///
/// # Examples
///
/// ```no_run
/// use otter_deploy::bundler::SettingsBuilder;
///
/// # fn example() -> otter_deploy::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_path("/src/otter-browser")
///     .qt_path("/opt/Qt/5.15.2/gcc_64")
///     .extra_libs(vec!["C:/OpenSSL/bin/*.dll".into()])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_path: Option<PathBuf>,
    build_path: Option<PathBuf>,
    target_path: Option<PathBuf>,
    qt_path: Option<PathBuf>,
    extra_libs: Vec<String>,
    disable_tools_download: bool,
    search_path: Option<OsString>,
    library_path: Option<OsString>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn source_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn build_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn target_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.target_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Qt installation root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn qt_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.qt_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn extra_libs(mut self, patterns: Vec<String>) -> Self {
        self.extra_libs = patterns;
        self
    }

    /// Never fetch missing deployment tools from the network.
    pub fn disable_tools_download(mut self, disable: bool) -> Self {
        self.disable_tools_download = disable;
        self
    }

    /// Overrides the executable search path.
    ///
    /// Default: the `PATH` environment variable at build time.
    pub fn search_path(mut self, path: OsString) -> Self {
        self.search_path = Some(path);
        self
    }

    /// Overrides the inherited library search path.
    ///
    /// Default: the `LD_LIBRARY_PATH` environment variable at build time.
    pub fn library_path(mut self, path: Option<OsString>) -> Self {
        self.library_path = path;
        self
    }

    /// Builds the settings, resolving defaults and absolutizing every path.
    ///
    /// # Errors
    ///
    /// Returns an error if `qt_path` is missing or the working directory
    /// cannot be determined.
    pub fn build(self) -> Result<Settings> {
        let qt_path = self.qt_path.context("qt_path is required")?;

        let source_path = match self.source_path {
            Some(path) => absolute(&path)?,
            None => std::env::current_dir().fs_context("reading working directory", ".")?,
        };

        let build_path = match self.build_path {
            Some(path) => absolute(&path)?,
            None => source_path.join("build"),
        };

        let target_path = match self.target_path {
            Some(path) => absolute(&path)?,
            None => source_path.join("output"),
        };

        let tools_path = if self.disable_tools_download {
            None
        } else {
            Some(source_path.join("packaging").join("appimage-tools"))
        };

        let search_path = self
            .search_path
            .unwrap_or_else(|| std::env::var_os("PATH").unwrap_or_default());
        let library_path = self
            .library_path
            .or_else(|| std::env::var_os("LD_LIBRARY_PATH"));

        Ok(Settings {
            source_path,
            build_path,
            target_path,
            qt_path: absolute(&qt_path)?,
            extra_libs: self.extra_libs,
            tools_path,
            search_path,
            library_path,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving path", path)?
        .into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn paths_default_to_source_layout() {
        let settings = SettingsBuilder::new()
            .source_path("/src/otter")
            .qt_path("/opt/qt")
            .search_path(OsString::new())
            .build()
            .unwrap();

        assert_eq!(settings.build_path(), Path::new("/src/otter/build"));
        assert_eq!(settings.target_path(), Path::new("/src/otter/output"));
        assert_eq!(
            settings.tools_path(),
            Some(Path::new("/src/otter/packaging/appimage-tools"))
        );
    }

    #[test]
    fn disabling_downloads_clears_tools_path() {
        let settings = SettingsBuilder::new()
            .source_path("/src/otter")
            .qt_path("/opt/qt")
            .disable_tools_download(true)
            .build()
            .unwrap();

        assert!(settings.tools_path().is_none());
    }

    #[test]
    fn explicit_paths_are_kept() {
        let settings = SettingsBuilder::new()
            .source_path("/src/otter")
            .build_path("/tmp/build")
            .target_path("/tmp/out")
            .qt_path("/opt/qt")
            .build()
            .unwrap();

        assert_eq!(settings.build_path(), Path::new("/tmp/build"));
        assert_eq!(settings.target_path(), Path::new("/tmp/out"));
        assert_eq!(settings.qt_path(), Path::new("/opt/qt"));
    }

    #[test]
    fn qt_path_is_required() {
        let error = SettingsBuilder::new().source_path("/src").build().unwrap_err();
        assert_eq!(error.to_string(), "qt_path is required");
    }
}
