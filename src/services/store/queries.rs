use super::EventStore;
use crate::models::event::CalendarEvent;

impl EventStore {
    /// Look up a single event by id.
    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.get(id)
    }

    /// Events anchored to the given day, in insertion order.
    ///
    /// Ordering is deliberately not sorted by time-of-day; a day with no
    /// events yields an empty Vec, never an error.
    pub fn events_on(&self, day_key: &str) -> Vec<CalendarEvent> {
        self.day_index
            .get(day_key)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|id| self.events.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Events in a day bucket whose `start_time` parses to the given hour.
    ///
    /// Best-effort secondary filter for the week-view hour axis; events with
    /// an unparsable `start_time` never match.
    pub fn events_at_hour(&self, day_key: &str, hour: u32) -> Vec<CalendarEvent> {
        self.events_on(day_key)
            .into_iter()
            .filter(|event| event.start_hour() == Some(hour))
            .collect()
    }

    /// Full snapshot of every event, in no particular order.
    pub fn all(&self) -> Vec<CalendarEvent> {
        self.events.values().cloned().collect()
    }

    /// Search events by title, location, or description.
    ///
    /// Case-insensitive substring match, ordered by day key then start time.
    pub fn search(&self, query: &str) -> Vec<CalendarEvent> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        let mut matches: Vec<CalendarEvent> = self
            .events
            .values()
            .filter(|event| {
                event.title.to_lowercase().contains(&query)
                    || event
                        .location
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&query))
                    || event
                        .description
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&query))
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            (&a.day_key, &a.start_time, &a.id).cmp(&(&b.day_key, &b.start_time, &b.id))
        });
        matches
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
