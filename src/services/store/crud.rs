use super::EventStore;
use crate::error::{CalendarError, CalendarResult};
use crate::models::event::{CalendarEvent, EventDraft, EventPatch};

impl EventStore {
    /// Create a new event from a draft and index it under its day key.
    ///
    /// # Errors
    /// `Validation` for an empty title, `InvalidDayKey` for an unparsable
    /// day key. On error the store is untouched.
    pub fn create(&mut self, draft: EventDraft) -> CalendarResult<CalendarEvent> {
        draft.validate()?;

        let id = self.id_generator.new_id();
        let event = CalendarEvent {
            id: id.clone(),
            title: draft.title,
            day_key: draft.day_key,
            start_time: draft.start_time,
            end_time: draft.end_time,
            location: draft.location,
            description: draft.description,
            color_tag: draft.color_tag,
        };

        self.day_index
            .entry(event.day_key.clone())
            .or_default()
            .push(id.clone());
        self.events.insert(id, event.clone());

        log::debug!("Created event '{}' on {}", event.title, event.day_key);
        Ok(event)
    }

    /// Insert a fully formed event coming from an external source.
    ///
    /// # Errors
    /// Same field validation as [`create`](Self::create); additionally
    /// rejects an id that is already present, since id uniqueness must hold
    /// for the lifetime of the store.
    pub fn import(&mut self, event: CalendarEvent) -> CalendarResult<CalendarEvent> {
        event.validate()?;
        if self.events.contains_key(&event.id) {
            return Err(CalendarError::Validation(format!(
                "Event id {} already exists",
                event.id
            )));
        }

        self.day_index
            .entry(event.day_key.clone())
            .or_default()
            .push(event.id.clone());
        self.events.insert(event.id.clone(), event.clone());

        log::debug!("Imported event '{}' on {}", event.title, event.day_key);
        Ok(event)
    }

    /// Merge a patch into an existing event.
    ///
    /// The merged event is validated before anything is written, so a
    /// rejected patch leaves no partial update behind. When the patch moves
    /// the event to a different day, the index entry is moved in the same
    /// call: the id leaves the old bucket and joins the tail of the new one.
    ///
    /// # Errors
    /// `NotFound` for an unknown id; `Validation`/`InvalidDayKey` when a
    /// patched field fails the creation rules.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> CalendarResult<CalendarEvent> {
        let current = self
            .events
            .get(id)
            .ok_or_else(|| CalendarError::NotFound(id.to_string()))?;

        let mut updated = current.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(day_key) = patch.day_key {
            updated.day_key = day_key;
        }
        if let Some(start_time) = patch.start_time {
            updated.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            updated.end_time = end_time;
        }
        if let Some(location) = patch.location {
            updated.location = location;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(color_tag) = patch.color_tag {
            updated.color_tag = color_tag;
        }
        updated.validate()?;

        let old_day_key = current.day_key.clone();
        if updated.day_key != old_day_key {
            self.remove_from_index(&old_day_key, id);
            self.day_index
                .entry(updated.day_key.clone())
                .or_default()
                .push(id.to_string());
            log::debug!(
                "Moved event '{}' from {} to {}",
                updated.title,
                old_day_key,
                updated.day_key
            );
        }
        self.events.insert(id.to_string(), updated.clone());

        Ok(updated)
    }

    /// Delete an event from the collection and its day bucket.
    ///
    /// # Errors
    /// `NotFound` for an unknown id. Removal is deliberately not idempotent:
    /// a double delete surfaces `NotFound` so callers can detect stale
    /// references.
    pub fn remove(&mut self, id: &str) -> CalendarResult<CalendarEvent> {
        let event = self
            .events
            .remove(id)
            .ok_or_else(|| CalendarError::NotFound(id.to_string()))?;
        self.remove_from_index(&event.day_key, id);

        log::debug!("Removed event '{}' from {}", event.title, event.day_key);
        Ok(event)
    }

    fn remove_from_index(&mut self, day_key: &str, id: &str) {
        if let Some(bucket) = self.day_index.get_mut(day_key) {
            bucket.retain(|entry| entry != id);
            if bucket.is_empty() {
                self.day_index.remove(day_key);
            }
        }
    }
}
