//! Error types for the projects loader.

use folio_core::PageError;
use folio_data::FetchError;
use thiserror::Error;

/// Errors surfaced to the page renderer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsError {
    /// The projects file does not exist or the fetch did not succeed.
    #[error("Projects file not found")]
    NotFound,

    /// Any other failure while loading projects.
    #[error("Failed to load projects")]
    Load,
}

impl ProjectsError {
    /// HTTP status for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Load => 500,
        }
    }

    /// Visitor-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Projects file not found",
            Self::Load => "Failed to load projects",
        }
    }
}

impl From<ProjectsError> for PageError {
    fn from(err: ProjectsError) -> Self {
        PageError::new(err.status(), err.message())
    }
}

/// Why a load failed. Logged, never shown to visitors.
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("GET {path} returned status {status}")]
    NotFound { path: String, status: u16 },

    #[error("fetch failed: {0}")]
    Fetch(FetchError),

    #[error("could not read response body: {0}")]
    Body(FetchError),

    #[error("invalid YAML: {0}")]
    Decode(serde_yaml::Error),

    #[error("document is empty")]
    EmptyDocument,

    #[error("unexpected projects shape: {0}")]
    Shape(serde_yaml::Error),
}
