//! Storage layer for the day planner.
//!
//! Each date is stored in its own plain-text file inside a data directory.
//!
//! # Format
//!
//! The file for a date is named `YYYY-MM-DD` and holds one event per line:
//!
//! ```text
//! 05:50|06:30|eating|breakfast
//! 06:00|07:30|work|email
//! ```
//!
//! Fields are `start|end|category|name`; the name is everything after the
//! third `|` and must not contain a newline. Blank lines are ignored. A date
//! without a file is an empty day.
//!
//! # Thread Safety
//!
//! A [`DayStore`] only holds a path and can be shared freely. Writes to the same
//! date from several threads or processes are not coordinated; callers
//! serialize them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use dp_core::{CategoryRegistry, Day, Event, ModelError, ParseError};
use rayon::prelude::*;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a day file failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line of a day file could not be parsed.
    #[error("{}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
    /// A parsed event was rejected by the day.
    #[error("{}:{line}: {source}", path.display())]
    InvalidEvent {
        path: PathBuf,
        line: usize,
        #[source]
        source: ModelError,
    },
    /// A date range reached past the last representable date.
    #[error("date range starting {start} with {days} days is out of range")]
    DateOutOfRange { start: NaiveDate, days: u64 },
}

/// A directory of day files.
#[derive(Debug, Clone)]
pub struct DayStore {
    dir: PathBuf,
}

impl DayStore {
    /// Uses `dir` for day files. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file holding `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(date.format("%Y-%m-%d").to_string())
    }

    /// Loads one date, resolving categories through `registry`.
    pub fn load(&self, date: NaiveDate, registry: &CategoryRegistry) -> Result<Day, StoreError> {
        let path = self.path_for(date);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = ?path, "no day file, starting empty");
                return Ok(Day::new(date));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        parse_day(date, &content, registry).map_err(|err| match err {
            LineError::Parse(line, source) => StoreError::Parse { path, line, source },
            LineError::Model(line, source) => StoreError::InvalidEvent { path, line, source },
        })
    }

    /// Loads `days` consecutive dates starting at `start`.
    ///
    /// Dates are read in parallel; the result is in date order.
    pub fn load_range(
        &self,
        start: NaiveDate,
        days: u64,
        registry: &CategoryRegistry,
    ) -> Result<Vec<Day>, StoreError> {
        let dates = (0..days)
            .map(|offset| start.checked_add_days(Days::new(offset)))
            .collect::<Option<Vec<_>>>()
            .ok_or(StoreError::DateOutOfRange { start, days })?;

        let loaded: Vec<Day> = dates
            .par_iter()
            .map(|&date| self.load(date, registry))
            .collect::<Result<_, _>>()?;

        tracing::debug!(%start, days, "loaded day range");
        Ok(loaded)
    }

    /// Writes a day, replacing any previous file for its date.
    pub fn save(&self, day: &Day) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(day.date());
        let tmp = path.with_extension("tmp");
        let mut content = day.to_records().join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        fs::write(&tmp, content)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = ?path, events = day.len(), "saved day");
        Ok(())
    }
}

enum LineError {
    Parse(usize, ParseError),
    Model(usize, ModelError),
}

fn parse_day(
    date: NaiveDate,
    content: &str,
    registry: &CategoryRegistry,
) -> Result<Day, LineError> {
    let mut day = Day::new(date);
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let event =
            Event::from_record(line, registry).map_err(|err| LineError::Parse(line_no, err))?;
        day.add_event(event)
            .map_err(|err| LineError::Model(line_no, err))?;
    }
    Ok(day)
}
