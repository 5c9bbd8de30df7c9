//! Person domain model.
//!
//! # Invariants
//! - `projects` is a derived back-reference maintained by the store's
//!   link upkeep; it is never edited directly by callers.

use serde::{Deserialize, Serialize};

/// A lab member or alumnus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Opaque collection-unique id, `"person-<millis>"` when generated.
    pub id: String,
    /// Display name. Not a join key: projects reference people by id.
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    /// Accent color for the person's profile card.
    #[serde(default)]
    pub color: String,
    /// Ordered project ids, kept in sync with `Project.team`.
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            role: String::new(),
            bio: String::new(),
            color: String::new(),
            projects: Vec::new(),
            email: None,
            github: None,
            cv: None,
            image: None,
        }
    }
}
