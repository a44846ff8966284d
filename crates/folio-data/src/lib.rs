//! Fetch capability for folio page loaders.
//!
//! Page loaders never talk to the network directly. They receive a
//! [`LoadEvent`] whose [`FetchClient`] is bound to the base path the site is
//! mounted under, and issue requests through it. What actually answers those
//! requests is a [`Fetch`] implementation chosen by the host:
//!
//! - [`StaticDirFetcher`] - files from the site's static assets directory
//! - [`MemoryFetcher`] - canned responses (prerendering, tests)
//! - `SpinFetcher` - outbound HTTP on the Spin runtime (wasm32 only)
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_data::{FetchClient, LoadEvent, StaticDirFetcher};
//!
//! let client = FetchClient::new(StaticDirFetcher::new("static"));
//! let event = LoadEvent::new(client, "/hackclub");
//!
//! let response = event.fetch().get("/projects.yaml").await?;
//! if response.is_success() {
//!     let text = response.text()?;
//! }
//! ```

mod client;
mod error;
mod load;
mod memory;
mod request;
mod response;

#[cfg(not(target_arch = "wasm32"))]
mod static_dir;

#[cfg(target_arch = "wasm32")]
mod spin;

pub use client::{Fetch, FetchClient};
pub use error::FetchError;
pub use load::{LoadEvent, PageLoad};
pub use memory::MemoryFetcher;
pub use request::{Method, Request};
pub use response::Response;

#[cfg(not(target_arch = "wasm32"))]
pub use static_dir::StaticDirFetcher;

#[cfg(target_arch = "wasm32")]
pub use spin::SpinFetcher;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Fetch, FetchClient, FetchError, LoadEvent, PageLoad, Response};
}
