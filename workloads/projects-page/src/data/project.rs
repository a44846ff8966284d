//! Project records as they appear in `projects.yaml`.

use serde::{Deserialize, Deserializer, Serialize};

/// A displayable portfolio entry.
///
/// Text fields accept any YAML scalar, so `title: 2048` reads as `"2048"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// URL to the project.
    #[serde(deserialize_with = "scalar_text")]
    pub link: String,
    /// Embeddable URL shown in an iframe.
    #[serde(deserialize_with = "scalar_text")]
    pub iframe: String,
    /// Image URL.
    #[serde(deserialize_with = "scalar_text")]
    pub image: String,
    /// Display name.
    #[serde(deserialize_with = "scalar_text")]
    pub title: String,
    /// Free text.
    #[serde(deserialize_with = "scalar_text")]
    pub description: String,
    /// Built as part of Hack Club.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hackclub: Option<bool>,
}

/// A YAML scalar in a text position.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

impl Project {
    /// Create a project whose embed points at its link.
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            link: link.to_string(),
            iframe: link.to_string(),
            image: String::new(),
            title: title.to_string(),
            description: String::new(),
            hackclub: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    /// Set the embed URL.
    pub fn with_iframe(mut self, iframe: &str) -> Self {
        self.iframe = iframe.to_string();
        self
    }

    /// Set the Hack Club flag.
    pub fn with_hackclub(mut self, hackclub: bool) -> Self {
        self.hackclub = Some(hackclub);
        self
    }

    /// Whether the project carries the Hack Club flag. Absent means no.
    pub fn is_hackclub(&self) -> bool {
        self.hackclub.unwrap_or(false)
    }
}

/// Data returned by the projects loader, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsData {
    /// Projects in document order.
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectsData {
    /// Wrap a list of projects.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether there are no projects to show.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Serialize for client-side hydration.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
