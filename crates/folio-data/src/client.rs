//! Fetch capability bound to an application base path.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{FetchError, Method, Request, Response};

/// Something that can perform an HTTP-style retrieval.
///
/// A non-2xx status is a successful fetch that returns a `Response`; only
/// transport-level failures are errors.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Fetch: Send + Sync {
    /// Send a request and return the full response.
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// Fetch client handed to page loaders.
///
/// Relative paths are resolved against the base path the application is
/// mounted under; absolute `http://` and `https://` URLs pass through.
#[derive(Clone)]
pub struct FetchClient {
    fetcher: Arc<dyn Fetch>,
    base_path: String,
    default_headers: HashMap<String, String>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_path", &self.base_path)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client over a fetcher, mounted at the root.
    pub fn new(fetcher: impl Fetch + 'static) -> Self {
        Self::from_arc(Arc::new(fetcher))
    }

    /// Create a client over a shared fetcher.
    pub fn from_arc(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            base_path: String::new(),
            default_headers: HashMap::new(),
        }
    }

    /// Set the base path (e.g. `/portfolio`) or base URL prepended to relative paths.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into().trim_end_matches('/').to_string();
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The configured base path, without a trailing slash.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a path against the base path.
    pub fn resolve(&self, url: &str) -> Result<String, FetchError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        if !url.starts_with('/') {
            return Err(FetchError::InvalidUrl(format!(
                "relative path must start with '/': {}",
                url
            )));
        }
        Ok(format!("{}{}", self.base_path, url))
    }

    /// Issue a GET request.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        self.request(Method::Get, url).await
    }

    /// Issue a request with the given method and no body.
    pub async fn request(&self, method: Method, url: &str) -> Result<Response, FetchError> {
        let request = Request::new(method, self.resolve(url)?);
        self.send(request).await
    }

    /// Send a prepared request. Default headers never override explicit ones.
    pub async fn send(&self, mut request: Request) -> Result<Response, FetchError> {
        for (key, value) in &self.default_headers {
            request
                .headers
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "fetch");
        let response = self.fetcher.send(request).await?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "fetched");

        Ok(response)
    }
}
