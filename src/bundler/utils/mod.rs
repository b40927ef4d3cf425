//! Helpers shared by the packaging pipelines.

pub mod fs;
pub mod http;
pub mod process;
pub mod tools;
