//! Summary command for per-category time totals.
//!
//! Overlapping events are resolved before summing, so every minute of a day
//! is counted for at most one category.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use dp_core::total_by_category;
use serde::Serialize;

use super::util::{Planner, format_minutes};

/// Time spent in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub priority: i32,
    pub minutes: u32,
}

/// Computed summary data.
#[derive(Debug, Serialize)]
pub struct SummaryData {
    pub start: NaiveDate,
    pub days: u64,
    pub total_minutes: u32,
    pub categories: Vec<CategoryTotal>,
}

/// Loads `days` days from `start` and totals them per category.
pub fn compute(planner: &Planner, start: NaiveDate, days: u64) -> Result<SummaryData> {
    let loaded = planner.store.load_range(start, days, &planner.registry)?;

    let mut categories: Vec<CategoryTotal> = total_by_category(&loaded)
        .into_iter()
        .map(|(category, minutes)| CategoryTotal {
            name: category.name,
            priority: category.priority,
            minutes,
        })
        .collect();
    categories.sort_by(|a, b| b.minutes.cmp(&a.minutes).then_with(|| a.name.cmp(&b.name)));

    Ok(SummaryData {
        start,
        days,
        total_minutes: categories.iter().map(|c| c.minutes).sum(),
        categories,
    })
}

pub fn run<W: Write>(
    writer: &mut W,
    planner: &Planner,
    start: NaiveDate,
    days: u64,
    json: bool,
) -> Result<()> {
    let data = compute(planner, start, days)?;
    tracing::debug!(
        categories = data.categories.len(),
        total_minutes = data.total_minutes,
        "computed summary"
    );

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&data)?)?;
    } else {
        write!(writer, "{}", format_summary(&data))?;
    }
    Ok(())
}

fn format_summary(data: &SummaryData) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let plural = if data.days == 1 { "" } else { "s" };
    let _ = writeln!(
        out,
        "Summary for {} ({} day{plural})",
        data.start, data.days
    );

    if data.categories.is_empty() {
        let _ = writeln!(out, "No time recorded.");
        return out;
    }

    for category in &data.categories {
        let _ = writeln!(
            out,
            "{:<12} {:>7}",
            category.name,
            format_minutes(category.minutes)
        );
    }
    let _ = writeln!(out, "{:<12} {:>7}", "total", format_minutes(data.total_minutes));
    out
}
