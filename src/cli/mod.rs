//! Command line interface for the deployment tool.

mod args;

pub use args::Args;

use crate::{bundler::Bundler, bundler::Packager, error::Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs the deployment described by `args`.
///
/// Arguments are validated and the host packager selected before anything is
/// touched on disk.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()?;

    let packager = Packager::for_host()?;
    let settings = args.to_settings()?;

    log::debug!("Settings: {:?}", settings);

    let bundler = Bundler::new(settings, packager);
    let artifacts = bundler.bundle().await?;

    for artifact in &artifacts {
        log::info!(
            "✓ {} {} ({} bytes, sha256 {})",
            artifact.kind,
            artifact.path.display(),
            artifact.size,
            artifact.checksum
        );
    }

    Ok(0)
}
