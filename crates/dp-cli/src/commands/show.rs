//! Show command for listing a day's events.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use super::util::{Planner, format_minutes};

/// Lists the events of `date`, or its overlap-resolved segments if `flat`.
pub fn run<W: Write>(writer: &mut W, planner: &Planner, date: NaiveDate, flat: bool) -> Result<()> {
    let day = planner.load(date)?;
    let day = if flat { day.flattened() } else { day };

    if day.is_empty() {
        writeln!(writer, "No events on {date}.")?;
        return Ok(());
    }

    let current = day.current_id();
    for (index, event) in day.events().iter().enumerate() {
        let marker = if !flat && Some(event.id()) == current { '*' } else { ' ' };
        // durations are positive for every stored event
        let minutes = u32::try_from(event.duration()).unwrap_or(0);
        writeln!(
            writer,
            "{marker}{:>3}  {event}  ({})",
            index + 1,
            format_minutes(minutes)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use dp_core::{Category, CategoryRegistry};
    use dp_store::DayStore;

    fn planner(dir: &std::path::Path) -> Planner {
        Planner {
            store: DayStore::new(dir),
            registry: CategoryRegistry::new([
                Category::new("eating", 0),
                Category::new("work", 5),
            ])
            .unwrap(),
            snap_resolution: 12,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn show_lists_events_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let planner = planner(temp.path());
        fs::write(
            planner.store.path_for(date()),
            "05:55|06:20|work|email\n05:50|06:30|eating|breakfast\n",
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &planner, date(), false).unwrap();

        // the last loaded line is current
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "*  1  05:50-06:30 eating: breakfast  (0h40m)\n   2  05:55-06:20 work: email  (0h25m)\n"
        );
    }

    #[test]
    fn show_flat_resolves_overlaps() {
        let temp = tempfile::tempdir().unwrap();
        let planner = planner(temp.path());
        fs::write(
            planner.store.path_for(date()),
            "05:50|06:30|eating|breakfast\n05:55|06:20|work|email\n",
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &planner, date(), true).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                "1  05:50-05:55 eating: breakfast  (0h05m)",
                "2  05:55-06:20 work: email  (0h25m)",
                "3  06:20-06:30 eating: breakfast  (0h10m)",
            ]
        );
    }

    #[test]
    fn show_empty_day() {
        let temp = tempfile::tempdir().unwrap();
        let planner = planner(temp.path());

        let mut output = Vec::new();
        run(&mut output, &planner, date(), false).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "No events on 2024-03-14.\n");
    }
}
