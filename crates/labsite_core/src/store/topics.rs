//! Topic color registry.
//!
//! # Responsibility
//! - Own the single source of truth for topic coloring.
//! - Assign hues to topics seen for the first time.
//!
//! # Invariants
//! - A registered topic keeps its color until explicitly overwritten or
//!   removed; projects only ever look colors up here.
//! - `hue` is cached next to the color and recomputed on registration.

use crate::color::{color_for_hue, hue_of};
use crate::model::topic::TopicColor;
use std::collections::BTreeMap;

/// Name → color mapping for project topics.
///
/// Instance state owned by the content store; construct one per store
/// so independent instances (tests included) cannot interfere.
#[derive(Debug, Clone, Default)]
pub struct TopicColorRegistry {
    entries: BTreeMap<String, TopicColor>,
}

impl TopicColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, TopicColor>) -> Self {
        Self { entries }
    }

    /// Persisted representation: map of name → entry.
    pub fn entries(&self) -> &BTreeMap<String, TopicColor> {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&TopicColor> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers (or overwrites, last writer wins) a topic color.
    ///
    /// The hue cache is recomputed from the color; an unparsable color
    /// registers with hue 0 rather than failing.
    pub fn register(&mut self, name: &str, color: &str) -> &TopicColor {
        let entry = TopicColor {
            name: name.to_string(),
            color: color.to_string(),
            hue: hue_of(color).unwrap_or(0.0),
        };
        self.entries.insert(name.to_string(), entry);
        // Just inserted under this key.
        &self.entries[name]
    }

    /// Hard-deletes a topic. The registry has no awareness of projects;
    /// callers verify no project still references the topic.
    pub fn remove(&mut self, name: &str) -> Option<TopicColor> {
        self.entries.remove(name)
    }

    /// Registers every topic of the list that is not yet known, with
    /// hues evenly spaced over the list. Returns whether anything was
    /// registered.
    ///
    /// Already-registered names keep their color untouched, so every
    /// project reusing a topic sees the identical color.
    pub fn ensure_topics(&mut self, topics: &[String]) -> bool {
        let mut changed = false;
        let count = topics.len();
        for (index, topic) in topics.iter().enumerate() {
            if self.entries.contains_key(topic) {
                continue;
            }
            let hue = index as f32 / count as f32 * 360.0;
            self.register(topic, &color_for_hue(hue));
            changed = true;
        }
        changed
    }

    /// Snapshot of the registered entries for the given topics, in
    /// topic-list order. Unregistered names are skipped.
    pub fn snapshot(&self, topics: &[String]) -> Vec<TopicColor> {
        topics
            .iter()
            .filter_map(|topic| self.entries.get(topic).cloned())
            .collect()
    }
}
