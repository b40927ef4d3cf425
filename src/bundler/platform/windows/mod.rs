//! Windows installer packaging.
//!
//! # Module Organization
//!
//! - `installer` - The pipeline and the Inno Setup invocation
//! - `runtime` - windeployqt, extra DLLs/libraries and plugin pruning
//! - `archive` - Release naming, `.7z`/`.zip` archives and portable mode

mod archive;
mod installer;
mod runtime;

pub use archive::{find_installer, release_name, write_portable_flag};
pub use installer::{bundle_project, installer_compiler_command};
pub use runtime::{copy_extra_dlls, copy_extra_libs, remove_redundant_plugins, windeployqt_command};
