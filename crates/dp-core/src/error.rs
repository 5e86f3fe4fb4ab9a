//! Error types for the event model.

use thiserror::Error;

use crate::event::EventId;
use crate::timestamp::Timestamp;

/// Recoverable failures of event and day operations.
///
/// These are returned to the caller, which may retry, ignore or log them.
/// None of them leave the affected `Day` or `Event` modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An event was added whose end is not strictly after its start.
    #[error("invalid duration: event ends at {end}, which is not after its start {start}")]
    InvalidDuration { start: Timestamp, end: Timestamp },

    /// An event was added whose id is already part of the day.
    #[error("event {id} is already part of the day")]
    DuplicateEvent { id: EventId },

    /// A move would cross the day boundary or collapse the event.
    #[error("illegal move by {minutes} minutes")]
    IllegalMove { minutes: i32 },

    /// A resize would cross the day boundary, invert the event, or not change it.
    #[error("illegal resize by {minutes} minutes")]
    IllegalResize { minutes: i32 },

    /// A split point was not strictly inside the event.
    #[error("invalid split point {at}: must be strictly inside {start}-{end}")]
    InvalidSplitPoint {
        at: Timestamp,
        start: Timestamp,
        end: Timestamp,
    },

    /// New times where start is not strictly before end.
    #[error("invalid time range {start}-{end}")]
    InvalidTimeRange { start: Timestamp, end: Timestamp },
}

/// Failures while parsing timestamps and event records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not of the form `HH:MM`.
    #[error("malformed timestamp: {value:?}")]
    MalformedTimestamp { value: String },

    /// Hour or minute outside its range.
    #[error("timestamp out of range: {hour}:{minute}")]
    TimestampOutOfRange { hour: u32, minute: u32 },

    /// A record did not have the four `start|end|category|name` fields.
    #[error("malformed record: expected start|end|category|name, got {line:?}")]
    MalformedRecord { line: String },

    /// A record whose end is not strictly after its start.
    #[error("record ends at {end}, which is not after its start {start}")]
    IllegalDuration { start: Timestamp, end: Timestamp },
}

/// Failures while building a category registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same category name was registered with two priorities.
    #[error("category {name:?} registered with priority {existing} and {conflicting}")]
    ConflictingPriority {
        name: String,
        existing: i32,
        conflicting: i32,
    },
}
