//! Domain records for the lab site content store.
//!
//! # Responsibility
//! - Define the canonical shape of every managed collection record.
//! - Keep serialization stable: persisted JSON uses camelCase keys.
//!
//! # Invariants
//! - Every record carries an opaque string `id`, unique in its collection.
//! - Cross-collection links are stored as ids; display names are
//!   presentation data only.

pub mod featured;
pub mod leaf;
pub mod person;
pub mod project;
pub mod publication;
pub mod software;
pub mod topic;
