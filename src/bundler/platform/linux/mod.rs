//! Linux packaging.

pub mod appimage;
