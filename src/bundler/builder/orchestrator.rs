//! Main bundler orchestration.

use super::{ArtifactKind, BundledArtifact, checksum::calculate_sha256};
use crate::{
    bail,
    bundler::{Packager, Result, Settings, error::ErrorExt},
};

/// Main bundler orchestrator.
///
/// Runs one [`Packager`] against the [`Settings`] and reports every file it
/// produced with its size and checksum.
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    packager: Packager,
}

impl Bundler {
    pub fn new(settings: Settings, packager: Packager) -> Self {
        Self { settings, packager }
    }

    /// Runs the packaging pipeline.
    ///
    /// # Returns
    ///
    /// One [`BundledArtifact`] per produced file, in the order the pipeline
    /// created them.
    pub async fn bundle(&self) -> Result<Vec<BundledArtifact>> {
        log::info!(
            "Packaging {} from {}",
            self.packager,
            self.settings.build_path().display()
        );

        let paths = self.packager.package(&self.settings).await?;

        if paths.is_empty() {
            bail!(
                "{} packager returned no artifacts - this indicates a bundler bug",
                self.packager
            );
        }

        let mut artifacts = Vec::with_capacity(paths.len());

        for path in paths {
            let Some(kind) = ArtifactKind::from_path(&path) else {
                bail!("Unrecognized artifact: {}", path.display());
            };

            let size = tokio::fs::metadata(&path)
                .await
                .fs_context("reading artifact metadata", &path)?
                .len();
            let checksum = calculate_sha256(&path).await?;

            artifacts.push(BundledArtifact {
                kind,
                path,
                size,
                checksum,
            });
        }

        Ok(artifacts)
    }
}
