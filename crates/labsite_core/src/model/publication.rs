//! Publication domain model.

use serde::{Deserialize, Serialize};

/// Venue category for a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
    Journal,
    Conference,
    Workshop,
    Preprint,
    Thesis,
    Other,
}

/// A published paper or preprint.
///
/// Author names are free text (external co-authors have no Person
/// record); explicit id lists carry the real cross-links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Opaque collection-unique id, `"publication-<millis>"` when generated.
    pub id: String,
    pub title: String,
    /// Ordered author display names, free text.
    #[serde(default)]
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    /// Formatted citation shown verbatim on the site.
    #[serde(default)]
    pub citation: String,
    /// Legacy single-project link kept for older persisted data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub project_ids: Vec<String>,
    #[serde(default)]
    pub software_ids: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Publication {
    pub fn new(title: impl Into<String>, year: i32, kind: PublicationType) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            authors: Vec::new(),
            year,
            kind,
            citation: String::new(),
            project_id: None,
            project_ids: Vec::new(),
            software_ids: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// All project links, merging the legacy single id with the id list.
    pub fn all_project_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        if let Some(legacy) = self.project_id.as_deref() {
            ids.push(legacy);
        }
        for id in &self.project_ids {
            if !ids.contains(&id.as_str()) {
                ids.push(id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::{Publication, PublicationType};

    #[test]
    fn all_project_ids_merges_legacy_id_without_duplicates() {
        let mut publication = Publication::new("Paper", 2024, PublicationType::Preprint);
        publication.project_id = Some("project-a".to_string());
        publication.project_ids = vec!["project-a".to_string(), "project-b".to_string()];

        assert_eq!(publication.all_project_ids(), vec!["project-a", "project-b"]);
    }

    #[test]
    fn all_project_ids_is_empty_without_links() {
        let publication = Publication::new("Paper", 2024, PublicationType::Other);
        assert!(publication.all_project_ids().is_empty());
    }
}
