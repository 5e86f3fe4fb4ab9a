//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dp_core::Timestamp;

/// Personal day planner.
///
/// Keeps one file of categorized events per day and reports how much time
/// went to each category, counting overlapping events only once.
#[derive(Debug, Parser)]
#[command(name = "dp", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Day to operate on (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the day's events in order.
    Show {
        /// Show overlap-resolved segments instead of the raw events.
        #[arg(long)]
        flat: bool,
    },

    /// Show time per category.
    Summary {
        /// Number of consecutive days starting at the selected date.
        #[arg(long, default_value_t = 1)]
        days: u64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Add an event.
    Add {
        /// Start time (HH:MM).
        #[arg(long)]
        start: Timestamp,

        /// End time (HH:MM).
        #[arg(long)]
        end: Timestamp,

        /// Category name.
        #[arg(long)]
        category: String,

        /// Event name.
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Remove the event at a position (as listed by `show`).
    Remove {
        /// 1-based position.
        index: usize,
    },

    /// Split the event at a position into two at a given time.
    Split {
        /// 1-based position.
        index: usize,

        /// Split point (HH:MM), strictly inside the event.
        #[arg(long)]
        at: Timestamp,
    },

    /// Move the event at a position.
    Move {
        /// 1-based position.
        index: usize,

        /// Minutes to move by; negative moves earlier.
        #[arg(long, allow_hyphen_values = true)]
        by: i32,

        /// Also move every later event.
        #[arg(long)]
        cascade: bool,
    },
}
