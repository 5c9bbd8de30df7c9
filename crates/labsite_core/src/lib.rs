//! Core content store for the lab site.
//! This crate is the single source of truth for cross-collection
//! consistency: link upkeep, topic coloring and persistence.

pub mod color;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::featured::FeaturedSelection;
pub use model::leaf::{Collaborator, FundingSource, JobOpening, NewsItem};
pub use model::person::Person;
pub use model::project::Project;
pub use model::publication::{Publication, PublicationType};
pub use model::software::Software;
pub use model::topic::TopicColor;
pub use repo::{KvStore, RepoError, SqliteKvStore};
pub use store::{
    ChangeAction, ChangeEvent, ContentStore, FeaturedItems, ListenerId, StoreError, StoreResult,
    TopicColorRegistry,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
