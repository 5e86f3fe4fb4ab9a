//! CLI subcommand implementations.

pub mod add;
pub mod moves;
pub mod remove;
pub mod show;
pub mod split;
pub mod summary;
pub mod util;
