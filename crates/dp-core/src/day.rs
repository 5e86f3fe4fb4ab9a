//! The events of one calendar date.
//!
//! # Invariants
//! - `events` is sorted by start ascending, ties broken by later end first,
//!   after every public call returns.
//! - Every event has `end` strictly after `start`.
//! - `current` names a member of `events`, or is `None`.
//!
//! # Thread Safety
//!
//! `Day` holds no locks. Callers serialize mutation of a given day
//! themselves, e.g. one `Mutex<Day>` per date. Distinct days are independent.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::ModelError;
use crate::event::{Event, EventId};
use crate::timestamp::Timestamp;

/// An ordered collection of events for one date, with a "current event" cursor.
#[derive(Debug)]
pub struct Day {
    date: NaiveDate,
    events: Vec<Event>,
    current: Option<EventId>,
}

/// Start ascending, then the longer (outer) event first.
fn event_order(a: &Event, b: &Event) -> Ordering {
    a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end))
}

impl Day {
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            events: Vec::new(),
            current: None,
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Events in sorted order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub const fn current_id(&self) -> Option<EventId> {
        self.current
    }

    /// The event under the cursor.
    pub fn current(&self) -> Option<&Event> {
        self.current_index().map(|index| &self.events[index])
    }

    /// Points the cursor at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn set_current(&mut self, id: EventId) {
        self.expect_position(id, "select");
        self.current = Some(id);
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id() == id)
    }

    /// Index of an event the caller claims is part of this day.
    fn expect_position(&self, id: EventId, action: &str) -> usize {
        self.position(id).unwrap_or_else(|| {
            panic!(
                "cannot {action} event {id}: not part of day {}",
                self.date
            )
        })
    }

    fn current_index(&self) -> Option<usize> {
        self.current
            .map(|id| self.expect_position(id, "resolve current"))
    }

    /// Direct access for in-crate algorithms that re-sort before returning.
    pub(crate) fn events_mut(&mut self) -> &mut Vec<Event> {
        &mut self.events
    }

    /// Re-establishes the sort invariant.
    pub(crate) fn update_event_order(&mut self) {
        self.events.sort_by(event_order);
    }

    /// Adds an event and makes it current.
    ///
    /// A clone of an event already in the day is rejected; use
    /// [`Event::duplicate`] for a copy with its own identity.
    pub fn add_event(&mut self, event: Event) -> Result<EventId, ModelError> {
        if !event.end.is_after(event.start) {
            return Err(ModelError::InvalidDuration {
                start: event.start,
                end: event.end,
            });
        }

        let id = event.id();
        if self.position(id).is_some() {
            return Err(ModelError::DuplicateEvent { id });
        }
        self.events.push(event);
        self.update_event_order();
        self.current = Some(id);
        Ok(id)
    }

    /// Removes and returns an event.
    ///
    /// If it was current, the cursor moves to the event now at the same
    /// position, else to the last event, else nowhere.
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn remove_event(&mut self, id: EventId) -> Event {
        let index = self.expect_position(id, "remove");
        let removed = self.events.remove(index);

        if self.current == Some(id) {
            self.current = self
                .events
                .get(index)
                .or_else(|| self.events.last())
                .map(Event::id);
        }

        removed
    }

    /// Advances the cursor. With no cursor, selects the first event.
    pub fn current_next(&mut self) {
        match self.current_index() {
            None => self.current = self.events.first().map(Event::id),
            Some(index) => {
                if let Some(next) = self.events.get(index + 1) {
                    self.current = Some(next.id());
                }
            }
        }
    }

    /// Moves the cursor back. With no cursor, selects the first event.
    pub fn current_prev(&mut self) {
        match self.current_index() {
            None => self.current = self.events.first().map(Event::id),
            Some(index) if index > 0 => self.current = Some(self.events[index - 1].id()),
            Some(_) => {}
        }
    }

    /// The sorted tail starting at `id`, or `None` if `id` is not in this day.
    pub fn events_from(&self, id: EventId) -> Option<&[Event]> {
        self.position(id).map(|index| &self.events[index..])
    }

    /// Splits an event at `at` into `[start, at)` and `[at, end)`.
    ///
    /// The original keeps its identity as the first half; the second half is
    /// a new event with the same name and category, whose id is returned.
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn split_event(&mut self, id: EventId, at: Timestamp) -> Result<EventId, ModelError> {
        let index = self.expect_position(id, "split");
        let event = &mut self.events[index];
        if !(at.is_after(event.start) && event.end.is_after(at)) {
            return Err(ModelError::InvalidSplitPoint {
                at,
                start: event.start,
                end: event.end,
            });
        }

        let mut tail = event.duplicate();
        tail.start = at;
        event.end = at;

        let tail_id = tail.id();
        self.events.push(tail);
        self.update_event_order();
        Ok(tail_id)
    }

    /// Replaces an event's start and end.
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn set_times(
        &mut self,
        id: EventId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<(), ModelError> {
        let index = self.expect_position(id, "re-time");
        if !start.is_before(end) {
            return Err(ModelError::InvalidTimeRange { start, end });
        }

        let event = &mut self.events[index];
        event.start = start;
        event.end = end;
        self.update_event_order();
        Ok(())
    }

    /// Moves one event, see [`Event::move_by`].
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn move_event(
        &mut self,
        id: EventId,
        minutes: i32,
        snap_resolution: u32,
    ) -> Result<(), ModelError> {
        let index = self.expect_position(id, "move");
        self.events[index].move_by(minutes, snap_resolution)?;
        self.update_event_order();
        Ok(())
    }

    /// Moves one event to a new start, see [`Event::move_to`].
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn move_event_to(&mut self, id: EventId, start: Timestamp) -> Result<(), ModelError> {
        let index = self.expect_position(id, "move");
        self.events[index].move_to(start)?;
        self.update_event_order();
        Ok(())
    }

    /// Moves `id` and every event sorted after it by the same amount.
    ///
    /// Either all of them move or, if any single move is illegal, none do.
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn move_events_from(
        &mut self,
        id: EventId,
        minutes: i32,
        snap_resolution: u32,
    ) -> Result<(), ModelError> {
        let index = self.expect_position(id, "move");
        let tail = &mut self.events[index..];
        if tail.iter().any(|e| !e.can_move_by(minutes, snap_resolution)) {
            return Err(ModelError::IllegalMove { minutes });
        }

        for event in tail {
            event.move_by(minutes, snap_resolution)?;
        }
        self.update_event_order();
        Ok(())
    }

    /// Shifts an event's end, see [`Event::resize_by`].
    ///
    /// # Panics
    ///
    /// If `id` is not part of this day.
    pub fn resize_event(&mut self, id: EventId, delta: i32) -> Result<(), ModelError> {
        let index = self.expect_position(id, "resize");
        self.events[index].resize_by(delta)?;
        self.update_event_order();
        Ok(())
    }

    /// One `start|end|category|name` record per event, in sorted order.
    pub fn to_records(&self) -> Vec<String> {
        self.events.iter().map(Event::to_record).collect()
    }
}

/// An independent copy: every event is duplicated with a new identity and
/// re-added, and the cursor follows the copy of the current event.
impl Clone for Day {
    fn clone(&self) -> Self {
        let mut copy = Self::new(self.date);
        let mut current = None;

        for event in &self.events {
            match copy.add_event(event.duplicate()) {
                Ok(id) if self.current == Some(event.id()) => current = Some(id),
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(date = %self.date, error = %err, "dropping invalid event while cloning day");
                }
            }
        }

        copy.current = current;
        copy
    }
}
