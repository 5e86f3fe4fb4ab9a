//! Move command for shifting events in time.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use super::util::{Planner, event_at};

/// Moves the event at `index` by `minutes`, snapping to the configured grid.
///
/// With `cascade`, every event sorted after it moves too, or none do.
pub fn run<W: Write>(
    writer: &mut W,
    planner: &Planner,
    date: NaiveDate,
    index: usize,
    minutes: i32,
    cascade: bool,
) -> Result<()> {
    let mut day = planner.load(date)?;
    let id = event_at(&day, index)?;
    let moved = if cascade {
        let count = day.events_from(id).map_or(0, <[_]>::len);
        day.move_events_from(id, minutes, planner.snap_resolution)?;
        count
    } else {
        day.move_event(id, minutes, planner.snap_resolution)?;
        1
    };
    planner.save(&day)?;

    if let Some(event) = day.get(id) {
        let plural = if moved == 1 { "" } else { "s" };
        writeln!(writer, "Moved {moved} event{plural}; now {event}")?;
    }
    Ok(())
}
