//! Named, categorized time intervals within a day.

use std::fmt;

use uuid::Uuid;

use crate::category::{Category, CategoryRegistry};
use crate::error::{ModelError, ParseError};
use crate::timestamp::{MINUTES_PER_DAY, Timestamp};

/// Stable identity of an event within a process.
///
/// Copies made with [`Event::duplicate`] get a new identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(Uuid);

impl EventId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open interval `[start, end)` with a name and a category.
///
/// Construction does not require `end` to be after `start`; a `Day` checks
/// that on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    pub start: Timestamp,
    pub end: Timestamp,
    pub name: String,
    pub category: Category,
}

impl Event {
    pub fn new(
        start: Timestamp,
        end: Timestamp,
        name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: EventId::new(),
            start,
            end,
            name: name.into(),
            category,
        }
    }

    pub const fn id(&self) -> EventId {
        self.id
    }

    /// An independent copy with the same times, name and category but a new identity.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: EventId::new(),
            ..self.clone()
        }
    }

    /// Length in minutes. Positive for every event held by a `Day`.
    pub fn duration(&self) -> i32 {
        self.start.duration_in_minutes_until(self.end)
    }

    /// Whether a move by `minutes`, snapping the start to a grid of
    /// `snap_resolution` lines per hour, stays within the day.
    ///
    /// A move forward must leave both the snapped start and the snapped end
    /// strictly later than before, a move backward strictly earlier, so that
    /// wrapping past midnight and snapping back onto the old position are
    /// both rejected. The start is snapped but the end is shifted by the raw
    /// delta, so the snapped start must also stay before the shifted end.
    pub fn can_move_by(&self, minutes: i32, snap_resolution: u32) -> bool {
        if minutes.abs() >= MINUTES_PER_DAY {
            return false;
        }
        if minutes == 0 {
            return true;
        }

        let new_start = self.start.offset_minutes(minutes).snap(snap_resolution);
        let new_end = self.end.offset_minutes(minutes).snap(snap_resolution);
        let moved = if minutes > 0 {
            new_start.is_after(self.start) && new_end.is_after(self.end)
        } else {
            new_start.is_before(self.start) && new_end.is_before(self.end)
        };

        moved && self.end.offset_minutes(minutes).is_after(new_start)
    }

    /// Moves the event by `minutes`, snapping the new start.
    pub fn move_by(&mut self, minutes: i32, snap_resolution: u32) -> Result<(), ModelError> {
        if !self.can_move_by(minutes, snap_resolution) {
            return Err(ModelError::IllegalMove { minutes });
        }
        self.start = self.start.offset_minutes(minutes).snap(snap_resolution);
        self.end = self.end.offset_minutes(minutes);
        Ok(())
    }

    /// Whether the event can be moved to start at `new_start` without snapping.
    ///
    /// The shift is measured forward from the current start to `new_start`,
    /// so a later `new_start` moves the event later.
    pub fn can_move_to(&self, new_start: Timestamp) -> bool {
        self.can_move_by(self.start.duration_in_minutes_until(new_start), 60)
    }

    /// Moves the event to start at `new_start`, keeping its duration.
    pub fn move_to(&mut self, new_start: Timestamp) -> Result<(), ModelError> {
        self.move_by(self.start.duration_in_minutes_until(new_start), 60)
    }

    /// Whether shifting the end by `delta` minutes keeps the event intact.
    ///
    /// Growing must move the end strictly later; shrinking must move it
    /// strictly earlier while staying after the start.
    pub fn can_be_resized_by(&self, delta: i32) -> bool {
        if delta.abs() >= MINUTES_PER_DAY {
            return false;
        }

        let new_end = self.end.offset_minutes(delta);
        match delta.signum() {
            1 => new_end.is_after(self.end),
            -1 => new_end.is_after(self.start) && new_end.is_before(self.end),
            _ => true,
        }
    }

    pub fn resize_by(&mut self, delta: i32) -> Result<(), ModelError> {
        if !self.can_be_resized_by(delta) {
            return Err(ModelError::IllegalResize { minutes: delta });
        }
        self.end = self.end.offset_minutes(delta);
        Ok(())
    }

    /// Snaps start and end independently.
    pub fn snap(&mut self, resolution: u32) {
        self.start = self.start.snap(resolution);
        self.end = self.end.snap(resolution);
    }

    /// Whether this event starts inside `other`.
    ///
    /// Starting together with `other` counts; starting exactly when `other`
    /// ends does not.
    pub fn starts_during(&self, other: &Self) -> bool {
        !other.start.is_after(self.start) && other.end.is_after(self.start)
    }

    /// Whether this event lies entirely within `other`.
    pub fn is_contained_in(&self, other: &Self) -> bool {
        self.starts_during(other) && !self.end.is_after(other.end)
    }

    /// Serializes as `start|end|category|name`.
    pub fn to_record(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.start, self.end, self.category.name, self.name
        )
    }

    /// Parses a `start|end|category|name` record.
    ///
    /// The name is everything after the third `|`. The category is looked up
    /// in `registry`.
    pub fn from_record(line: &str, registry: &CategoryRegistry) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedRecord {
            line: line.to_string(),
        };

        let mut fields = line.splitn(4, '|');
        let (Some(start), Some(end), Some(category), Some(name)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        if category.is_empty() {
            return Err(malformed());
        }

        let start: Timestamp = start.parse()?;
        let end: Timestamp = end.parse()?;
        if !end.is_after(start) {
            return Err(ParseError::IllegalDuration { start, end });
        }

        Ok(Self::new(start, end, name, registry.resolve(category)))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}: {}",
            self.start, self.end, self.category, self.name
        )
    }
}
