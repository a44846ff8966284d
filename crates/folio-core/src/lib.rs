//! Core types for folio pages.
//!
//! This crate provides:
//! - `RequestId` - Unique identifier attached to every page load
//! - `PageError` - User-facing error with an HTTP status
//! - `StructuredLogger` - Structured logging with request context

mod context;
mod error;
mod logging;

pub use context::*;
pub use error::*;
pub use logging::*;
