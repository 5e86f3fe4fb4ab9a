//! Split command for cutting an event in two.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use dp_core::Timestamp;

use super::util::{Planner, event_at};

pub fn run<W: Write>(
    writer: &mut W,
    planner: &Planner,
    date: NaiveDate,
    index: usize,
    at: Timestamp,
) -> Result<()> {
    let mut day = planner.load(date)?;
    let id = event_at(&day, index)?;
    let tail = day.split_event(id, at)?;
    planner.save(&day)?;

    if let (Some(head), Some(tail)) = (day.get(id), day.get(tail)) {
        writeln!(writer, "Split into {head} and {tail}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use dp_core::{CategoryRegistry, ModelError};
    use dp_store::DayStore;

    fn setup(dir: &std::path::Path) -> (Planner, NaiveDate) {
        let planner = Planner {
            store: DayStore::new(dir),
            registry: CategoryRegistry::default(),
            snap_resolution: 12,
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        fs::write(planner.store.path_for(date), "09:00|12:00|work|focus\n").unwrap();
        (planner, date)
    }

    #[test]
    fn split_persists_both_halves() {
        let temp = tempfile::tempdir().unwrap();
        let (planner, date) = setup(temp.path());

        let mut output = Vec::new();
        run(&mut output, &planner, date, 1, "10:30".parse().unwrap()).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Split into 09:00-10:30 work: focus and 10:30-12:00 work: focus\n"
        );
        assert_eq!(
            planner.load(date).unwrap().to_records(),
            ["09:00|10:30|work|focus", "10:30|12:00|work|focus"]
        );
    }

    #[test]
    fn split_at_boundary_fails_without_saving() {
        let temp = tempfile::tempdir().unwrap();
        let (planner, date) = setup(temp.path());

        let mut output = Vec::new();
        let err = run(&mut output, &planner, date, 1, "12:00".parse().unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::InvalidSplitPoint { .. })
        ));
        assert_eq!(
            planner.load(date).unwrap().to_records(),
            ["09:00|12:00|work|focus"]
        );
    }
}
