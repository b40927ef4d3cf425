//! Configuration for a deployment run.
//!
//! [`Settings`] is built once from the command line and never mutated. The
//! fixed pattern tables each pipeline relies on live in [`linux`] and
//! [`windows`] so they can be audited and tested on their own.

mod arch;
mod builder;
mod core;
pub mod linux;
pub mod windows;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use self::core::{APP_NAME, Settings};
