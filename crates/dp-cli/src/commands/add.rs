//! Add command for recording a new event.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use dp_core::{Event, Timestamp};

use super::util::Planner;

pub fn run<W: Write>(
    writer: &mut W,
    planner: &Planner,
    date: NaiveDate,
    start: Timestamp,
    end: Timestamp,
    category: &str,
    name: &str,
) -> Result<()> {
    let category = category.trim();
    if category.is_empty() || category.contains(['|', '\n']) {
        bail!("category must be non-empty and cannot contain '|' or newlines");
    }
    if name.contains('\n') {
        bail!("event name cannot contain newlines");
    }
    if planner.registry.get(category).is_none() && !planner.registry.is_empty() {
        let known: Vec<_> = planner.registry.iter().map(|c| c.name.as_str()).collect();
        tracing::warn!(category, ?known, "adding event with unconfigured category");
    }

    let mut day = planner.load(date)?;
    let event = Event::new(start, end, name, planner.registry.resolve(category));
    let summary = event.to_string();
    day.add_event(event)?;
    planner.save(&day)?;

    writeln!(writer, "Added {summary} on {date}")?;
    Ok(())
}
