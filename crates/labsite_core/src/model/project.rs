//! Project domain model.
//!
//! # Responsibility
//! - Define the research project record, the hub of most cross-links.
//!
//! # Invariants
//! - `team` holds person ids; legacy persisted values holding display
//!   names are converted once at load time.
//! - `topics_with_colors` and `display_color` are derived from the topic
//!   color registry on every add/update, never edited directly.
//! - `last_updated` increases on every mutation of the record.

use crate::model::topic::TopicColor;
use serde::{Deserialize, Serialize};

/// A research project shown on the public site and edited in the admin area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque collection-unique id, `"project-<millis>"` when generated.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One or more free-form category labels ("Robotics", "NLP", ...).
    #[serde(default)]
    pub categories: Vec<String>,
    /// Ordered person ids of the project team. Entries that match no
    /// person are display-only credits and are ignored by link upkeep.
    #[serde(default)]
    pub team: Vec<String>,
    /// Ordered topic names; colors live in the topic registry.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Snapshot of `{name, color, hue}` per topic, rebuilt from the
    /// registry whenever the project or a topic color changes.
    #[serde(default)]
    pub topics_with_colors: Vec<TopicColor>,
    /// Composed gradient (or brand fallback) used as the card background.
    #[serde(default)]
    pub display_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Free-form status label ("active", "completed", ...).
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Ordered publication ids associated with this project.
    #[serde(default)]
    pub publications: Vec<String>,
    /// Unix epoch milliseconds of the last edit.
    #[serde(default)]
    pub last_updated: i64,
}

impl Project {
    /// Creates a minimal project; derived fields are filled by the store.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: String::new(),
            categories: Vec::new(),
            team: Vec::new(),
            topics: Vec::new(),
            topics_with_colors: Vec::new(),
            display_color: String::new(),
            image: None,
            emoji: None,
            status: String::new(),
            start_date: None,
            end_date: None,
            publications: Vec::new(),
            last_updated: 0,
        }
    }
}
