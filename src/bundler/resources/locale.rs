//! Compiled translation deployment.

use crate::bundler::{
    error::{ErrorExt, Result},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Creates `<target>/locale` and copies every `resources/translations/*.qm`
/// file from the source tree into it.
///
/// The `locale` directory must not exist yet: each run stages into a fresh
/// directory, so an existing one means a previous run was left behind.
pub async fn deploy_locale(source_path: &Path, target_path: &Path) -> Result<PathBuf> {
    log::info!("Deploying locale files");

    let locale_path = target_path.join("locale");

    tokio::fs::create_dir(&locale_path)
        .await
        .fs_context("creating locale directory", &locale_path)?;

    let translations = source_path.join("resources").join("translations");
    let files = fs::glob_in(&translations, "*.qm")?;

    for file in &files {
        fs::copy_into(file, &locale_path).await?;
    }

    log::debug!("Copied {} translations", files.len());

    Ok(locale_path)
}
