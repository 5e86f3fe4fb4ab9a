//! Core domain logic for the day planner.
//!
//! This crate contains the event model and its overlap resolution:
//! - Timestamp: minute-precision time of day with wraparound arithmetic
//! - Event: a named, categorized interval with checked move/resize
//! - Day: the sorted events of one date with a "current event" cursor
//! - Flatten: non-overlapping segments for per-category time totals

mod category;
mod day;
mod error;
mod event;
mod flatten;
mod timestamp;

pub use category::{Category, CategoryRegistry};
pub use day::Day;
pub use error::{ModelError, ParseError, RegistryError};
pub use event::{Event, EventId};
pub use flatten::total_by_category;
pub use timestamp::{MINUTES_PER_DAY, Offset, Timestamp};
