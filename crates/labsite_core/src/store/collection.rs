//! Generic ordered collection of one record kind.
//!
//! # Responsibility
//! - Hold the authoritative display order for one entity kind.
//! - Provide the in-memory half of list/get/add/update/delete/reorder.
//!
//! # Invariants
//! - Order changes only through append-on-add and `reorder`.
//! - `reorder` accepts only a total permutation of the current id set;
//!   a partial or duplicated id list leaves the collection untouched.

use crate::model::leaf::{Collaborator, FundingSource, JobOpening, NewsItem};
use crate::model::person::Person;
use crate::model::project::Project;
use crate::model::publication::Publication;
use crate::model::software::Software;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;

/// A record kind managed by the content store.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Singular kind label, used in generated ids and change events.
    const KIND: &'static str;
    /// Key the collection is persisted under.
    const STORE_KEY: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal, $key:expr) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;
            const STORE_KEY: &'static str = $key;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

impl_record!(Project, "project", crate::repo::keys::PROJECTS);
impl_record!(Person, "person", crate::repo::keys::PEOPLE);
impl_record!(Publication, "publication", crate::repo::keys::PUBLICATIONS);
impl_record!(Software, "software", crate::repo::keys::SOFTWARE);
impl_record!(JobOpening, "job", crate::repo::keys::JOBS);
impl_record!(Collaborator, "collaborator", crate::repo::keys::COLLABORATORS);
impl_record!(FundingSource, "funding", crate::repo::keys::FUNDING);
impl_record!(NewsItem, "news", crate::repo::keys::NEWS);

/// Ordered in-memory collection of one record kind.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Records in authoritative display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends to the end of the display order.
    pub fn push(&mut self, record: T) {
        self.items.push(record);
    }

    /// Replaces the record with a matching id. Returns `false` (state
    /// untouched) when no record matches.
    pub fn replace(&mut self, record: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Replaces the display order with the given id sequence.
    ///
    /// The sequence must be a total permutation of the current ids:
    /// same set, no duplicates. Returns `false` and leaves the order
    /// untouched otherwise.
    pub fn reorder(&mut self, ids_in_order: &[&str]) -> bool {
        if ids_in_order.len() != self.items.len() {
            return false;
        }
        let requested: BTreeSet<&str> = ids_in_order.iter().copied().collect();
        if requested.len() != ids_in_order.len() {
            return false;
        }
        let current: BTreeSet<&str> = self.items.iter().map(Record::id).collect();
        if requested != current {
            return false;
        }

        let mut reordered = Vec::with_capacity(self.items.len());
        for id in ids_in_order {
            // Set equality above guarantees every id resolves.
            if let Some(index) = self.items.iter().position(|item| item.id() == *id) {
                reordered.push(self.items.remove(index));
            }
        }
        self.items = reordered;
        true
    }

    /// Current ids in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(Record::id).collect()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
