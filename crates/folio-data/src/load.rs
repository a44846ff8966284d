//! Page load events and the loader trait.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::{LogFormat, LogLevel, LogSink, PageError, RequestId, StructuredLogger};

use crate::FetchClient;

/// Everything a page loader receives from the host.
#[derive(Debug, Clone)]
pub struct LoadEvent {
    /// Unique identifier for this load.
    pub request_id: RequestId,
    /// Route being rendered (e.g. `/hackclub`).
    pub route: String,
    fetch: FetchClient,
    logger: StructuredLogger,
}

impl LoadEvent {
    /// Create an event for `route` using the given fetch client.
    pub fn new(fetch: FetchClient, route: impl Into<String>) -> Self {
        let request_id = RequestId::generate();
        let route = route.into();
        let logger = StructuredLogger::new(request_id.clone()).with_route(route.clone());
        Self {
            request_id,
            route,
            fetch,
            logger,
        }
    }

    /// Send log entries to a custom sink.
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.logger = self.logger.with_sink(sink);
        self
    }

    /// Lowest level the event's logger emits.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.logger = self.logger.with_min_level(level);
        self
    }

    /// Render log entries as JSON (default) or human-readable text.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logger = self.logger.with_format(format);
        self
    }

    /// The fetch capability, bound to the application base path.
    pub fn fetch(&self) -> &FetchClient {
        &self.fetch
    }

    /// Logger carrying this event's request ID and route.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }
}

/// A function run before a page renders, producing the data the view needs.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PageLoad: Send + Sync {
    /// Data handed to the view on success.
    type Data: Send;
    /// Error surfaced to the visitor on failure.
    type Error: Into<PageError> + Send;

    /// Load the page data.
    async fn load(&self, event: &LoadEvent) -> Result<Self::Data, Self::Error>;
}
