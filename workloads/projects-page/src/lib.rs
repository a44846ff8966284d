//! Projects page - portfolio entries loaded from a static YAML document.
//!
//! This workload provides:
//! - `ProjectsLoader` - fetches `/projects.yaml` and decodes the project list
//! - `ProjectsConfig` - resource path and not-found reporting
//! - Section renderers for the project grid and the error view
//! - `ProjectsPage` - runs the loader and renders the result
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_data::{FetchClient, LoadEvent, StaticDirFetcher};
//! use projects_page::{ProjectsLoader, ProjectsPage};
//!
//! let client = FetchClient::new(StaticDirFetcher::new("static"));
//! let event = LoadEvent::new(client, ProjectsPage::ROUTE);
//!
//! let page = ProjectsPage::new(ProjectsLoader::new()).render(&event).await;
//! assert_eq!(page.status, 200);
//! ```

mod config;
mod data;
mod error;
mod loader;
mod sections;

pub use config::*;
pub use data::*;
pub use error::*;
pub use loader::*;
pub use sections::*;

use folio_core::PageError;
use folio_data::{LoadEvent, PageLoad};

/// Result of rendering the projects page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// HTTP status for the response.
    pub status: u16,
    /// Rendered HTML for the page content.
    pub body: String,
    /// Loaded data, for client hydration. `None` on error.
    pub data: Option<ProjectsData>,
}

/// The projects page: load, then render.
#[derive(Debug, Clone, Default)]
pub struct ProjectsPage {
    loader: ProjectsLoader,
}

impl ProjectsPage {
    /// Route the page is served under.
    pub const ROUTE: &'static str = "/hackclub";

    /// Create a page around a configured loader.
    pub fn new(loader: ProjectsLoader) -> Self {
        Self { loader }
    }

    /// Run the loader and render either the project grid or the error view.
    pub async fn render(&self, event: &LoadEvent) -> RenderedPage {
        match self.loader.load(event).await {
            Ok(data) => RenderedPage {
                status: 200,
                body: render_projects(&data),
                data: Some(data),
            },
            Err(err) => {
                let error: PageError = err.into();
                RenderedPage {
                    status: error.status,
                    body: render_error(&error),
                    data: None,
                }
            }
        }
    }
}
