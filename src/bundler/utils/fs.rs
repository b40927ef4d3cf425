//! File system utilities for packaging.
//!
//! Thin wrappers over `tokio::fs` that attach the path to every error, plus
//! glob helpers for the library and plugin tables.

use crate::bundler::error::{Context, Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(parent) = to.parent() {
        create_dir_all(parent).await?;
    }

    log::debug!("Copying {} to {}", from.display(), to.display());

    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

/// Copies a file into `directory`, keeping its file name.
pub async fn copy_into(from: &Path, directory: &Path) -> Result<PathBuf> {
    let file_name = from
        .file_name()
        .with_context(|| format!("{} has no file name", from.display()))?;
    let to = directory.join(file_name);

    copy_file(from, &to).await?;
    Ok(to)
}

/// Expands a glob pattern, returning matches in sorted order.
pub fn glob_matches(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for entry in glob::glob(pattern)? {
        matches.push(entry?);
    }

    Ok(matches)
}

/// Expands `pattern` relative to `directory`.
///
/// Glob metacharacters in `directory` itself are escaped, so only the file
/// name part is treated as a pattern.
pub fn glob_in(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let directory = directory
        .to_str()
        .with_context(|| format!("{} is not valid UTF-8", directory.display()))?;
    let full_pattern = Path::new(&glob::Pattern::escape(directory)).join(pattern);

    glob_matches(&full_pattern.to_string_lossy())
}

/// Deletes every file in `directory` matching any of `patterns`.
///
/// Returns the deleted paths.
pub async fn remove_matching(directory: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for pattern in patterns {
        for file in glob_in(directory, pattern)? {
            log::debug!("Removing {}", file.display());
            fs::remove_file(&file)
                .await
                .fs_context("removing file", &file)?;
            removed.push(file);
        }
    }

    Ok(removed)
}
