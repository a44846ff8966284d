//! Outbound HTTP through the Spin host.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{Fetch, FetchError, Method, Request, Response};

/// Fetcher that sends requests with Spin's outbound HTTP.
///
/// Request URLs must be absolute; mount a `FetchClient` on the site origin
/// with `with_base_path("https://example.com")`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinFetcher;

impl SpinFetcher {
    /// Create a fetcher for the current Spin component.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Fetch for SpinFetcher {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        use spin_sdk::http::Method as SpinMethod;

        let method = match request.method {
            Method::Get => SpinMethod::Get,
            Method::Head => SpinMethod::Head,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
            Method::Options => SpinMethod::Options,
        };

        let mut builder = spin_sdk::http::Request::builder();
        builder.method(method);
        builder.uri(&request.url);
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder.body(body);
        }

        let resp: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *resp.status();
        let headers: HashMap<String, String> = resp
            .headers()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.to_string(), v.to_string())))
            .collect();

        Ok(Response::new(status, headers, resp.body().to_vec()))
    }
}
