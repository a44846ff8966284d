//! Data models for the projects page.

mod project;

pub use project::*;
