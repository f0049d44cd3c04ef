// Event module
// Calendar event record, creation draft, and merge patch

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::utils::date::decode_day_key;

/// Color tag used only for downstream rendering; opaque to scheduling logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Primary,
    Success,
    Warning,
    Destructive,
}

/// A scheduled calendar event.
///
/// Identity is `id`, assigned once on creation and immutable thereafter.
/// `day_key` is the sole field the scheduling engine buckets on;
/// `start_time`/`end_time` are `HH:MM` strings stored verbatim and are
/// treated as opaque payload (no `start < end` check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub day_key: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub color_tag: ColorTag,
}

impl CalendarEvent {
    /// Validate the event's own fields (title and day key).
    pub fn validate(&self) -> CalendarResult<()> {
        validate_title(&self.title)?;
        decode_day_key(&self.day_key)?;
        Ok(())
    }

    /// Hour-of-day parsed from `start_time`, best effort.
    ///
    /// Returns `None` when the field does not look like `HH:MM`; callers
    /// using this for hour bucketing must treat a `None` as "no hour slot",
    /// not as an error.
    pub fn start_hour(&self) -> Option<u32> {
        let (hour, minute) = self.start_time.split_once(':')?;
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        if hour < 24 && minute < 60 {
            Some(hour)
        } else {
            None
        }
    }
}

fn validate_title(title: &str) -> CalendarResult<()> {
    if title.trim().is_empty() {
        return Err(CalendarError::Validation(
            "Event title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Creation input for [`CalendarEvent`]: everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub day_key: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub color_tag: ColorTag,
}

impl EventDraft {
    /// Create a draft with the required fields.
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty after trim)
    /// * `day_key` - Canonical `YYYY-MM-DD` day key the event is anchored to
    /// * `start_time` - Start time of day in `HH:MM` form (stored verbatim)
    /// * `end_time` - End time of day in `HH:MM` form (stored verbatim)
    ///
    /// # Examples
    /// ```
    /// use calgrid::models::event::EventDraft;
    ///
    /// let draft = EventDraft::new("Standup", "2026-02-19", "09:00", "09:15").unwrap();
    /// assert_eq!(draft.title, "Standup");
    /// ```
    pub fn new(
        title: impl Into<String>,
        day_key: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> CalendarResult<Self> {
        let draft = Self {
            title: title.into(),
            day_key: day_key.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: None,
            description: None,
            color_tag: ColorTag::default(),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Create a builder for constructing drafts with optional fields.
    pub fn builder() -> EventDraftBuilder {
        EventDraftBuilder::new()
    }

    /// Validate the draft fields (same rules as the stored event).
    pub fn validate(&self) -> CalendarResult<()> {
        validate_title(&self.title)?;
        decode_day_key(&self.day_key)?;
        Ok(())
    }
}

/// Builder for creating drafts with optional fields
pub struct EventDraftBuilder {
    title: Option<String>,
    day_key: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    location: Option<String>,
    description: Option<String>,
    color_tag: ColorTag,
}

impl EventDraftBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            day_key: None,
            start_time: None,
            end_time: None,
            location: None,
            description: None,
            color_tag: ColorTag::default(),
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the anchor day key
    pub fn day_key(mut self, day_key: impl Into<String>) -> Self {
        self.day_key = Some(day_key.into());
        self
    }

    /// Set the start time of day (`HH:MM`)
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Set the end time of day (`HH:MM`)
    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the rendering color tag
    pub fn color_tag(mut self, color_tag: ColorTag) -> Self {
        self.color_tag = color_tag;
        self
    }

    /// Build the draft
    pub fn build(self) -> CalendarResult<EventDraft> {
        let title = self
            .title
            .ok_or_else(|| CalendarError::Validation("Event title is required".to_string()))?;
        let day_key = self
            .day_key
            .ok_or_else(|| CalendarError::Validation("Event day key is required".to_string()))?;

        let draft = EventDraft {
            title,
            day_key,
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
            location: self.location,
            description: self.description,
            color_tag: self.color_tag,
        };

        draft.validate()?;
        Ok(draft)
    }
}

impl Default for EventDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge patch for `update`: only the populated fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub day_key: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub color_tag: Option<ColorTag>,
}

impl EventPatch {
    /// Patch that only moves the event to a different day.
    pub fn move_to_day(day_key: impl Into<String>) -> Self {
        Self {
            day_key: Some(day_key.into()),
            ..Self::default()
        }
    }
}
