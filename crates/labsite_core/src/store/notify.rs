//! Change notification for read-only views.
//!
//! # Responsibility
//! - Let views refresh after edits they are not directly wired to.
//!
//! # Invariants
//! - Delivery is synchronous, in-process and best-effort; events fired
//!   with no listener registered are dropped, there is no replay.
//! - The subscription list is owned by the store instance, not ambient
//!   process state.

use std::collections::BTreeMap;

/// What happened to the announced record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
    Reordered,
    Reset,
}

/// One announced mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Kind label of the touched record ("project", "featured", ...).
    pub kind: &'static str,
    /// Id of the touched record; empty for whole-collection events.
    pub id: String,
    pub action: ChangeAction,
}

/// Handle for removing a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Store-owned subscription list.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: BTreeMap<u64, Box<dyn Fn(&ChangeEvent)>>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it stays registered until `unsubscribe`.
    pub fn subscribe(&mut self, listener: impl Fn(&ChangeEvent) + 'static) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        ListenerId(id)
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id.0).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers the event to every current listener, in registration
    /// order, on the calling thread.
    pub fn announce(&self, event: &ChangeEvent) {
        for listener in self.listeners.values() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
