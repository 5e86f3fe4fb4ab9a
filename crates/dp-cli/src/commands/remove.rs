//! Remove command for deleting an event.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use super::util::{Planner, event_at};

pub fn run<W: Write>(writer: &mut W, planner: &Planner, date: NaiveDate, index: usize) -> Result<()> {
    let mut day = planner.load(date)?;
    let id = event_at(&day, index)?;
    let removed = day.remove_event(id);
    planner.save(&day)?;

    writeln!(writer, "Removed {removed} from {date}")?;
    Ok(())
}
