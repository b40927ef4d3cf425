//! External tool location.
//!
//! Tools are looked up in three places, in order:
//!
//! 1. the configured tools directory,
//! 2. every directory of the executable search path,
//! 3. a download into the tools directory, when both it and a URL are known.
//!
//! Results are not cached across runs.

use super::http;
use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Locates external tools for one run.
#[derive(Clone, Copy, Debug)]
pub struct ToolLocator<'a> {
    tools_path: Option<&'a Path>,
    search_path: &'a OsStr,
}

impl<'a> ToolLocator<'a> {
    /// `tools_path` may be `None` (no local cache and no downloads).
    pub fn new(tools_path: Option<&'a Path>, search_path: &'a OsStr) -> Self {
        Self {
            tools_path,
            search_path,
        }
    }

    /// Locate a tool that must be present.
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] when no step finds the tool.
    pub async fn require(&self, name: &str, url: Option<&str>) -> Result<PathBuf> {
        match self.locate(name, url).await? {
            Some(path) => Ok(path),
            None => Err(Error::ToolNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Locate a tool whose absence is tolerated.
    pub async fn find_optional(&self, name: &str, url: Option<&str>) -> Result<Option<PathBuf>> {
        let found = self.locate(name, url).await?;

        if found.is_none() {
            log::warn!("{} not found, continuing without it", name);
        }

        Ok(found)
    }

    async fn locate(&self, name: &str, url: Option<&str>) -> Result<Option<PathBuf>> {
        if let Some(tools_path) = self.tools_path {
            let candidate = tools_path.join(name);

            if candidate.is_file() {
                log::debug!("Using {} from tools directory", candidate.display());
                return Ok(Some(candidate));
            }
        }

        if let Some(path) = self.search(name) {
            log::debug!("Found {} at {}", name, path.display());
            return Ok(Some(path));
        }

        if let (Some(tools_path), Some(url)) = (self.tools_path, url) {
            return download_tool(name, url, tools_path).await.map(Some);
        }

        Ok(None)
    }

    /// Scan the search path for an executable file called `name`.
    fn search(&self, name: &str) -> Option<PathBuf> {
        if self.search_path.is_empty() {
            return None;
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        which::which_in(name, Some(self.search_path), cwd).ok()
    }
}

async fn download_tool(name: &str, url: &str, tools_path: &Path) -> Result<PathBuf> {
    log::info!("downloading {} from {}", name, url);

    let tool_path = tools_path.join(name);
    let data = http::download(url).await?;

    tokio::fs::create_dir_all(tools_path)
        .await
        .fs_context("creating tools directory", tools_path)?;
    tokio::fs::write(&tool_path, data)
        .await
        .fs_context("writing downloaded tool", &tool_path)?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = tokio::fs::metadata(&tool_path)
            .await
            .fs_context("reading tool permissions", &tool_path)?
            .permissions()
            .mode();
        tokio::fs::set_permissions(&tool_path, std::fs::Permissions::from_mode(mode | 0o111))
            .await
            .fs_context("marking tool executable", &tool_path)?;
    }

    Ok(tool_path)
}
