//! Shared utilities for CLI commands.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use dp_core::{CategoryRegistry, Day, EventId};
use dp_store::DayStore;

use crate::Config;

/// Everything a command needs to read and write days.
#[derive(Debug, Clone)]
pub struct Planner {
    pub store: DayStore,
    pub registry: CategoryRegistry,
    pub snap_resolution: u32,
}

impl Planner {
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = config
            .registry()
            .context("invalid category configuration")?;
        let store = DayStore::new(&config.data_dir);
        tracing::debug!(dir = ?store.dir(), categories = registry.len(), "opened day store");
        Ok(Self {
            store,
            registry,
            snap_resolution: config.snap_resolution,
        })
    }

    pub fn load(&self, date: NaiveDate) -> Result<Day> {
        self.store
            .load(date, &self.registry)
            .with_context(|| format!("failed to load {date}"))
    }

    pub fn save(&self, day: &Day) -> Result<()> {
        self.store
            .save(day)
            .with_context(|| format!("failed to save {}", day.date()))
    }
}

/// The id of the event at a 1-based position, as listed by `show`.
pub fn event_at(day: &Day, index: usize) -> Result<EventId> {
    match index.checked_sub(1).and_then(|i| day.events().get(i)) {
        Some(event) => Ok(event.id()),
        None => bail!(
            "no event at position {index} on {} ({} events)",
            day.date(),
            day.len()
        ),
    }
}

/// Formats minutes as `1h05m`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}
