//! Overlap resolution.
//!
//! Flattening partitions a day's timeline into non-overlapping segments, each
//! attributed to exactly one category, so per-category totals never count the
//! same minute twice.
//!
//! # Algorithm Summary
//!
//! A sweep with two index cursors, `current` and `next = current + 1`, over the
//! sorted events. The list is re-sorted at the top of every iteration because
//! the edits below can reorder neighbours.
//!
//! 1. `next` contained in `current`: a strictly higher-priority `next` cuts
//!    `current` in two around itself; otherwise `next` is dropped.
//! 2. `next` starts during `current` and runs past it: a higher-priority `next`
//!    truncates `current`; the same category merges; otherwise `next` starts
//!    when `current` ends.
//! 3. No overlap: advance.
//!
//! Flush adjacency (`a.end == b.start`) is not an overlap, so adjacent events
//! of the same category stay separate.

use std::collections::HashMap;

use crate::category::Category;
use crate::day::Day;

impl Day {
    /// A flattened copy of this day. The day itself is not modified.
    #[must_use]
    pub fn flattened(&self) -> Self {
        let mut copy = self.clone();
        copy.flatten_in_place();
        copy
    }

    /// Minutes per category after overlap resolution.
    pub fn sum_up_by_category(&self) -> HashMap<Category, u32> {
        let mut totals: HashMap<Category, u32> = HashMap::new();
        for segment in self.flattened().events() {
            // flattened segments always have positive duration
            let minutes = u32::try_from(segment.duration()).unwrap_or(0);
            *totals.entry(segment.category.clone()).or_insert(0) += minutes;
        }
        totals
    }

    fn flatten_in_place(&mut self) {
        let mut current = 0;
        let mut removed = 0usize;
        let mut split = 0usize;

        while current + 1 < self.len() {
            self.update_event_order();
            let next = current + 1;
            let events = self.events_mut();

            if events[next].is_contained_in(&events[current]) {
                if events[next].category.priority > events[current].category.priority {
                    let mut remainder = events[current].duplicate();
                    remainder.start = events[next].end;
                    events[current].end = events[next].start;
                    if remainder.duration() > 0 {
                        tracing::trace!(segment = %remainder, "keeping remainder after contained event");
                        events.push(remainder);
                        split += 1;
                    }

                    if events[current].duration() == 0 {
                        events.remove(current);
                        removed += 1;
                    } else {
                        current = next;
                    }
                } else {
                    tracing::trace!(event = %events[next], "dropping contained event");
                    events.remove(next);
                    removed += 1;
                }
            } else if events[next].starts_during(&events[current]) {
                if events[next].category.priority > events[current].category.priority {
                    events[current].end = events[next].start;
                    if events[current].duration() == 0 {
                        events.remove(current);
                        removed += 1;
                    } else {
                        current = next;
                    }
                } else if events[next].category.name == events[current].category.name {
                    events[current].end = events[next].end;
                    events.remove(next);
                    removed += 1;
                } else {
                    events[next].start = events[current].end;
                }
            } else {
                current = next;
            }
        }

        self.update_event_order();
        tracing::debug!(
            date = %self.date(),
            segments = self.len(),
            removed,
            split,
            "flattened day"
        );
    }
}

/// Sums per-category minutes over several days.
pub fn total_by_category<'a>(days: impl IntoIterator<Item = &'a Day>) -> HashMap<Category, u32> {
    let mut totals: HashMap<Category, u32> = HashMap::new();
    for day in days {
        for (category, minutes) in day.sum_up_by_category() {
            *totals.entry(category).or_insert(0) += minutes;
        }
    }
    totals
}
