//! In-memory fetcher serving canned responses.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Fetch, FetchError, Request, Response};

/// What a route answers with.
#[derive(Debug, Clone)]
enum Route {
    Respond(Response),
    Fail(FetchError),
}

/// Fetcher backed by a table of canned responses.
///
/// Routes are keyed by the request path (query string ignored). Unknown
/// paths answer 404. Every request is recorded so callers can check how often
/// a resource was actually fetched.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    routes: Mutex<HashMap<String, Route>>,
    log: Mutex<Vec<Request>>,
}

impl MemoryFetcher {
    /// Create a fetcher with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a fixed response.
    pub fn with_response(self, path: impl Into<String>, response: Response) -> Self {
        self.set_response(path, response);
        self
    }

    /// Answer `path` with a 200 YAML document.
    pub fn with_yaml(self, path: impl Into<String>, yaml: impl Into<String>) -> Self {
        let yaml: String = yaml.into();
        self.with_response(path, Response::ok_with("application/yaml", yaml))
    }

    /// Fail requests for `path` with a transport error.
    pub fn with_failure(self, path: impl Into<String>, error: FetchError) -> Self {
        self.insert(path.into(), Route::Fail(error));
        self
    }

    /// Replace the response for `path` on a shared fetcher.
    pub fn set_response(&self, path: impl Into<String>, response: Response) {
        self.insert(path.into(), Route::Respond(response));
    }

    /// Number of requests seen for `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.path() == path)
            .count()
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn insert(&self, path: String, route: Route) {
        match self.routes.lock() {
            Ok(mut routes) => routes.insert(path, route),
            Err(poisoned) => poisoned.into_inner().insert(path, route),
        };
    }

    fn lookup(&self, path: &str) -> Option<Route> {
        match self.routes.lock() {
            Ok(routes) => routes.get(path).cloned(),
            Err(poisoned) => poisoned.into_inner().get(path).cloned(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Fetch for MemoryFetcher {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let route = self.lookup(request.path());

        match self.log.lock() {
            Ok(mut log) => log.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }

        match route {
            Some(Route::Respond(response)) => Ok(response),
            Some(Route::Fail(error)) => Err(error),
            None => Ok(Response::status(404)),
        }
    }
}
