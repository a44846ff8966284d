//! Loader for the projects page.

use std::time::Instant;

use async_trait::async_trait;
use folio_data::{FetchClient, LoadEvent, PageLoad};
use serde_yaml::Value;

use crate::config::{NotFoundPolicy, ProjectsConfig};
use crate::data::{Project, ProjectsData};
use crate::error::{LoadFailure, ProjectsError};

/// Fetches the projects document and turns it into [`ProjectsData`].
///
/// Every load fetches the document again. Any failure is logged on the
/// event's logger and reported as [`ProjectsError::Load`], unless the
/// configuration asks for missing files to surface as
/// [`ProjectsError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct ProjectsLoader {
    config: ProjectsConfig,
}

impl ProjectsLoader {
    /// Create a loader with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with an explicit configuration.
    pub fn with_config(config: ProjectsConfig) -> Self {
        Self { config }
    }

    /// The loader's configuration.
    pub fn config(&self) -> &ProjectsConfig {
        &self.config
    }

    async fn try_load(&self, fetch: &FetchClient) -> Result<ProjectsData, LoadFailure> {
        let path = &self.config.resource_path;

        let response = fetch.get(path).await.map_err(LoadFailure::Fetch)?;
        if !response.is_success() {
            return Err(LoadFailure::NotFound {
                path: path.clone(),
                status: response.status,
            });
        }

        let text = response.text().map_err(LoadFailure::Body)?;
        let projects = decode_projects(&text)?;

        Ok(ProjectsData { projects })
    }

    fn surface(&self, failure: &LoadFailure) -> ProjectsError {
        match (failure, self.config.not_found) {
            (LoadFailure::NotFound { .. }, NotFoundPolicy::Propagate) => ProjectsError::NotFound,
            _ => ProjectsError::Load,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PageLoad for ProjectsLoader {
    type Data = ProjectsData;
    type Error = ProjectsError;

    async fn load(&self, event: &LoadEvent) -> Result<ProjectsData, ProjectsError> {
        let started = Instant::now();
        match self.try_load(event.fetch()).await {
            Ok(data) => {
                event
                    .logger()
                    .debug_builder("Loaded projects")
                    .field("path", self.config.resource_path.as_str())
                    .field_u64("count", data.len() as u64)
                    .duration_ms("duration_ms", started.elapsed())
                    .emit();
                Ok(data)
            }
            Err(failure) => {
                event
                    .logger()
                    .error_builder("Error loading projects")
                    .field("path", self.config.resource_path.as_str())
                    .field("error", failure.to_string())
                    .duration_ms("duration_ms", started.elapsed())
                    .emit();
                Err(self.surface(&failure))
            }
        }
    }
}

/// Decode a projects document.
///
/// A missing or falsy `projects` key (null, `false`, `0`, `""`) yields an
/// empty list. A document that is empty or only comments is an error.
pub fn decode_projects(text: &str) -> Result<Vec<Project>, LoadFailure> {
    let document: Value = serde_yaml::from_str(text).map_err(LoadFailure::Decode)?;
    if document.is_null() {
        return Err(LoadFailure::EmptyDocument);
    }

    match document.get("projects") {
        Some(projects) if !is_falsy(projects) => {
            serde_yaml::from_value(projects.clone()).map_err(LoadFailure::Shape)
        }
        _ => Ok(Vec::new()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0 || f.is_nan()).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
