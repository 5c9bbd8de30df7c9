//! Software/tooling domain model.

use serde::{Deserialize, Serialize};

/// A released tool or library maintained by the lab.
///
/// Developer names are free text, like publication authors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Software {
    /// Opaque collection-unique id, `"software-<millis>"` when generated.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Ordered developer display names, free text.
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub project_ids: Vec<String>,
    #[serde(default)]
    pub publication_ids: Vec<String>,
}

impl Software {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            repo_url: String::new(),
            technologies: Vec::new(),
            developers: Vec::new(),
            license: String::new(),
            project_ids: Vec::new(),
            publication_ids: Vec::new(),
        }
    }
}
