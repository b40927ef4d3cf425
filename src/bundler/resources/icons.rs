//! Application icons for the hicolor theme.

use crate::bundler::{
    error::Result,
    settings::{APP_NAME, linux::IconSize},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Icon file in the source tree for a given size.
///
/// Raster icons are `resources/icons/otter-browser-<n>.png`, the scalable one
/// is `resources/icons/otter-browser.svg`.
pub fn icon_source(source_path: &Path, size: IconSize) -> PathBuf {
    let icons = source_path.join("resources").join("icons");

    match size {
        IconSize::Raster(pixels) => icons.join(format!("{}-{}.png", APP_NAME, pixels)),
        IconSize::Scalable => icons.join(format!("{}.svg", APP_NAME)),
    }
}

/// Destination below the theme root: `<n>x<n>/apps/otter-browser.png` or
/// `scalable/apps/otter-browser.svg`.
pub fn icon_destination(theme_path: &Path, size: IconSize) -> PathBuf {
    match size {
        IconSize::Raster(pixels) => theme_path
            .join(format!("{}x{}", pixels, pixels))
            .join("apps")
            .join(format!("{}.png", APP_NAME)),
        IconSize::Scalable => theme_path
            .join("scalable")
            .join("apps")
            .join(format!("{}.svg", APP_NAME)),
    }
}

/// Copies one icon per entry of `sizes` into `theme_path`.
pub async fn deploy_icons(
    source_path: &Path,
    theme_path: &Path,
    sizes: &[IconSize],
) -> Result<Vec<PathBuf>> {
    log::info!("Deploying icons");

    let mut deployed = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let destination = icon_destination(theme_path, size);
        fs::copy_file(&icon_source(source_path, size), &destination).await?;
        deployed.push(destination);
    }

    Ok(deployed)
}
