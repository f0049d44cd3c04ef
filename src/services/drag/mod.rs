//! Drag-and-pickup rescheduling.
//!
//! Turns a pick-up / hover / drop / cancel gesture into at most one
//! [`EventStore`] mutation. Nothing is written while hovering, so an
//! abandoned gesture needs no undo: cancellation simply discards the
//! session and the event's day key is still what it was at pick-up.
//! Only one gesture may be in flight at a time.

use crate::error::{CalendarError, CalendarResult};
use crate::models::event::{CalendarEvent, EventPatch};
use crate::services::store::EventStore;
use crate::utils::date::decode_day_key;

/// Ephemeral state of one in-flight reschedule gesture.
///
/// Created on pick-up, destroyed on drop or cancel; never outlives a single
/// gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub event_id: String,
    /// Day the event was on when the gesture began.
    pub origin_day_key: String,
    /// Day currently under the pointer; `None` while outside any valid cell.
    pub hover_day_key: Option<String>,
}

/// State machine driving event rescheduling between days.
#[derive(Debug, Default)]
pub struct DragRescheduleController {
    session: Option<DragSession>,
}

impl DragRescheduleController {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Whether a gesture is currently in flight.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any, so a renderer can read `hover_day_key`.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Pick up an event and start a gesture.
    ///
    /// # Errors
    /// `InvalidState` if a gesture is already in flight, `NotFound` if the
    /// event is not in the store.
    pub fn begin_drag(&mut self, store: &EventStore, event_id: &str) -> CalendarResult<()> {
        if self.session.is_some() {
            return Err(CalendarError::InvalidState(
                "a drag gesture is already in flight".to_string(),
            ));
        }

        let event = store
            .get(event_id)
            .ok_or_else(|| CalendarError::NotFound(event_id.to_string()))?;

        self.session = Some(DragSession {
            event_id: event_id.to_string(),
            origin_day_key: event.day_key.clone(),
            hover_day_key: None,
        });
        log::debug!("Drag started for '{}' on {}", event.title, event.day_key);
        Ok(())
    }

    /// Record the day currently under the pointer. Bookkeeping only; the
    /// event's stored day key is untouched until [`drop_on`](Self::drop_on).
    pub fn hover(&mut self, day_key: &str) -> CalendarResult<()> {
        let session = self.session.as_mut().ok_or_else(|| idle_error("hover"))?;
        session.hover_day_key = Some(day_key.to_string());
        Ok(())
    }

    /// Pointer left every valid drop cell; the gesture itself continues.
    pub fn leave_target(&mut self) -> CalendarResult<()> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| idle_error("leave_target"))?;
        session.hover_day_key = None;
        Ok(())
    }

    /// Drop the event on a day: the single commit point of the gesture.
    ///
    /// The session ends no matter the outcome. A day key that fails to
    /// decode behaves exactly like [`cancel`](Self::cancel) plus the error;
    /// there is never a partial commit.
    ///
    /// # Errors
    /// `InvalidState` when idle, `InvalidDayKey` for an undecodable target.
    pub fn drop_on(
        &mut self,
        store: &mut EventStore,
        day_key: &str,
    ) -> CalendarResult<CalendarEvent> {
        let session = self.session.take().ok_or_else(|| idle_error("drop_on"))?;

        decode_day_key(day_key)?;

        let updated = store.update(&session.event_id, EventPatch::move_to_day(day_key))?;
        log::info!(
            "Rescheduled '{}' from {} to {}",
            updated.title,
            session.origin_day_key,
            updated.day_key
        );
        Ok(updated)
    }

    /// Abandon the gesture. The store was never written during the gesture,
    /// so this is a true no-op on the model.
    pub fn cancel(&mut self) -> CalendarResult<()> {
        let session = self.session.take().ok_or_else(|| idle_error("cancel"))?;
        log::debug!("Drag cancelled for event {}", session.event_id);
        Ok(())
    }
}

fn idle_error(operation: &str) -> CalendarError {
    CalendarError::InvalidState(format!("{operation} called with no gesture in flight"))
}
