//! Command line argument parsing and validation.

use crate::{
    bundler::{Result as BundlerResult, Settings, SettingsBuilder},
    error::CliError,
};
use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

/// Otter Browser deployment tool
#[derive(Parser, Debug)]
#[command(
    name = "otter-deploy",
    version,
    about = "Otter Browser deployment tool.",
    long_about = "Packages an already built Otter Browser into release artifacts.

On Linux an AppImage is produced; on Windows an Inno Setup installer plus .7z
and .zip archives. Missing AppImage tools are downloaded into
<source>/packaging/appimage-tools unless --disable-tools-download is given.

Usage:
  otter-deploy --qt-path /opt/Qt/5.15.2/gcc_64
  otter-deploy --qt-path C:\\Qt\\5.15.2\\msvc2019_64 --extra-libs C:\\OpenSSL\\bin\\*.dll

Exit code 0 = every artifact was written to the target path."
)]
pub struct Args {
    /// Path to the build directory [default: <source>/build]
    #[arg(long, value_name = "DIR")]
    pub build_path: Option<PathBuf>,

    /// Path to the source directory [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub source_path: Option<PathBuf>,

    /// Path to the output directory [default: <source>/output]
    #[arg(long, value_name = "DIR")]
    pub target_path: Option<PathBuf>,

    /// Path to the Qt directory
    ///
    /// Parsed as a raw string so an empty value reaches validation.
    #[arg(
        long,
        value_name = "DIR",
        env = "QTDIR",
        value_parser = clap::builder::ValueParser::os_string()
    )]
    pub qt_path: Option<OsString>,

    /// Paths to the extra libraries to include (glob patterns)
    #[arg(long, value_name = "PATTERN", num_args = 0..)]
    pub extra_libs: Vec<String>,

    /// Disable download of missing deployment tools
    #[arg(long)]
    pub disable_tools_download: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments before any work starts.
    pub fn validate(&self) -> Result<(), CliError> {
        match &self.qt_path {
            Some(path) if !path.is_empty() => Ok(()),
            _ => Err(CliError::MissingArgument {
                argument: "--qt-path".to_string(),
            }),
        }
    }

    /// Build the immutable run configuration.
    pub fn to_settings(&self) -> BundlerResult<Settings> {
        let mut builder = SettingsBuilder::new()
            .extra_libs(self.extra_libs.clone())
            .disable_tools_download(self.disable_tools_download);

        if let Some(path) = &self.qt_path {
            builder = builder.qt_path(PathBuf::from(path));
        }
        if let Some(path) = &self.source_path {
            builder = builder.source_path(path);
        }
        if let Some(path) = &self.build_path {
            builder = builder.build_path(path);
        }
        if let Some(path) = &self.target_path {
            builder = builder.target_path(path);
        }

        builder.build()
    }
}
