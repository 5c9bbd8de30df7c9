//! Leaf records: collections with no back-references into other
//! collections. Deleting or editing these never triggers link upkeep.

use serde::{Deserialize, Serialize};

/// An open position advertised on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    /// Opaque collection-unique id, `"job-<millis>"` when generated.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
}

impl JobOpening {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: String::new(),
            location: String::new(),
            deadline: None,
            apply_url: None,
        }
    }
}

/// An external collaborating group or institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    /// Opaque collection-unique id, `"collaborator-<millis>"` when generated.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Collaborator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            affiliation: String::new(),
            url: None,
            logo: None,
        }
    }
}

/// A grant or funding program acknowledged on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSource {
    /// Opaque collection-unique id, `"funding-<millis>"` when generated.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub program: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FundingSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            program: String::new(),
            grant_id: None,
            url: None,
        }
    }
}

/// A dated announcement for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Opaque collection-unique id, `"news-<millis>"` when generated.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// ISO date string, display only.
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            body: String::new(),
            date: String::new(),
            link: None,
        }
    }
}
