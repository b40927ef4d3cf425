//! Release packaging engine.
//!
//! # Module Organization
//!
//! - [`settings`] - Immutable deployment configuration and the named pattern tables
//! - [`utils`] - Process runner, tool locator, downloads and filesystem helpers
//! - [`resources`] - Locale and icon deployment shared by the pipelines
//! - [`platform`] - The AppImage and Windows installer pipelines
//! - [`builder`] - The [`Bundler`] orchestrator and artifact checksums

pub mod builder;
pub mod error;
pub mod platform;
pub mod resources;
pub mod settings;
pub mod utils;

pub use builder::{ArtifactKind, BundledArtifact, Bundler};
pub use error::{Error, Result};
pub use platform::Packager;
pub use settings::{Arch, Settings, SettingsBuilder};
