//! HTTP utilities for downloading deployment tools.
//!
//! Downloads are single-attempt and unauthenticated; the pinned URLs are
//! trusted as-is.

use crate::bundler::error::{Error, Result};

/// Downloads a file from a URL.
///
/// Returns the file contents as a byte vector. Non-success HTTP statuses are
/// reported as errors so an error page is never saved as a tool.
pub async fn download(url: &str) -> Result<Vec<u8>> {
    let download_error = |e: reqwest::Error| Error::Download {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let response = reqwest::get(url)
        .await
        .map_err(download_error)?
        .error_for_status()
        .map_err(download_error)?;

    let bytes = response.bytes().await.map_err(download_error)?;

    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);

    Ok(bytes.to_vec())
}
