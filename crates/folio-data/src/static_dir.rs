//! Fetcher serving files from a static assets directory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::{Fetch, FetchError, Method, Request, Response};

/// Serves `GET` requests from a directory on disk, the way a site's
/// `static/` folder is served.
///
/// - missing file or directory: 404
/// - method other than `GET`/`HEAD`: 405
/// - path escaping the root (`..`): 400
///
/// Paths are taken relative to `mount`, so a fetcher mounted at
/// `/portfolio` serves `/portfolio/projects.yaml` from `<root>/projects.yaml`.
#[derive(Debug, Clone)]
pub struct StaticDirFetcher {
    root: PathBuf,
    mount: String,
}

impl StaticDirFetcher {
    /// Serve files under `root`, mounted at `/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mount: String::new(),
        }
    }

    /// Mount the directory under a path prefix.
    pub fn with_mount(mut self, mount: impl Into<String>) -> Self {
        self.mount = mount.into().trim_end_matches('/').to_string();
        self
    }

    /// The directory files are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path to a file under the root.
    ///
    /// Returns `None` when the path lies outside the mount, `Err` when it tries
    /// to escape the root.
    fn locate(&self, path: &str) -> Result<Option<PathBuf>, FetchError> {
        let Some(relative) = path.strip_prefix(self.mount.as_str()) else {
            return Ok(None);
        };
        if !relative.starts_with('/') {
            return Ok(None);
        }

        let mut file = self.root.clone();
        for component in Path::new(relative.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => file.push(part),
                Component::CurDir => {}
                _ => return Err(FetchError::InvalidUrl(path.to_string())),
            }
        }
        Ok(Some(file))
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => "application/yaml",
        Some("json") => "application/json",
        Some("html") => "text/html; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Fetch for StaticDirFetcher {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        if !matches!(request.method, Method::Get | Method::Head) {
            return Ok(Response::status(405));
        }

        let file = match self.locate(request.path()) {
            Ok(Some(file)) => file,
            Ok(None) => return Ok(Response::status(404)),
            Err(_) => return Ok(Response::status(400)),
        };

        match tokio::fs::metadata(&file).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(Response::status(404)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(file = %file.display(), "static file not found");
                return Ok(Response::status(404));
            }
            Err(e) => return Err(e.into()),
        }

        let body = tokio::fs::read(&file).await?;

        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            content_type_for(&file).to_string(),
        );
        headers.insert("Content-Length".to_string(), body.len().to_string());

        let body = if request.method == Method::Head {
            Vec::new()
        } else {
            body
        };

        Ok(Response::new(200, headers, body))
    }
}
