//! Event store entry point.
//! Owns the authoritative event collection and the day-key index,
//! with operations organized across focused submodules.

use std::collections::HashMap;

use crate::models::event::CalendarEvent;
use crate::utils::id::{IdGenerator, UuidGenerator};

pub mod crud;
pub mod queries;

/// Authoritative, in-memory store of calendar events.
///
/// Alongside the collection it maintains a day-key index
/// (`day_key -> event ids` in insertion order) so per-cell queries are
/// O(bucket size). Both structures are mutated only through the CRUD
/// operations in [`crud`], which keep them consistent: after every call,
/// each stored event's id appears in exactly its own day bucket and empty
/// buckets are dropped.
pub struct EventStore {
    pub(crate) events: HashMap<String, CalendarEvent>,
    pub(crate) day_index: HashMap<String, Vec<String>>,
    pub(crate) id_generator: Box<dyn IdGenerator>,
}

impl EventStore {
    /// Create a store with the default UUID id generator.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Create a store with an injected id generator (deterministic in tests).
    pub fn with_id_generator(id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            events: HashMap::new(),
            day_index: HashMap::new(),
            id_generator,
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
