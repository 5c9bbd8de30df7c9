//! Persistence adapter: flat key-value storage for serialized collections.
//!
//! # Responsibility
//! - Define the durable key-value contract the store persists through.
//! - Isolate SQLite details from store orchestration.
//!
//! # Invariants
//! - One key per collection; singleton keys for registry/featured/settings.
//! - A value that fails to deserialize reads as absent, never as an error.

pub mod kv;

pub use kv::{KvStore, RepoError, RepoResult, SqliteKvStore};

/// Collection keys, in startup load order.
pub mod keys {
    pub const PEOPLE: &str = "people";
    pub const PROJECTS: &str = "projects";
    pub const PUBLICATIONS: &str = "publications";
    pub const SOFTWARE: &str = "software";
    pub const JOBS: &str = "jobs";
    pub const COLLABORATORS: &str = "collaborators";
    pub const FUNDING: &str = "funding";
    pub const NEWS: &str = "news";

    pub const TOPIC_COLORS: &str = "topicColors";
    pub const FEATURED: &str = "featured";
    pub const TEAM_IMAGE: &str = "teamImage";
    pub const TEAM_IMAGE_POSITION: &str = "teamImagePosition";

    /// Every key the adapter owns; `reset_all` clears exactly these.
    pub const ALL: &[&str] = &[
        PEOPLE,
        PROJECTS,
        PUBLICATIONS,
        SOFTWARE,
        JOBS,
        COLLABORATORS,
        FUNDING,
        NEWS,
        TOPIC_COLORS,
        FEATURED,
        TEAM_IMAGE,
        TEAM_IMAGE_POSITION,
    ];
}
