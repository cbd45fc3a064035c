use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle
/// missing lon,lat data for a stop
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingStopLocationPolicy {
    /// fail the import
    #[default]
    Fail,
    /// leave the stop out of the feed. a pattern or transfer that still references
    /// the stop fails the import.
    DropStop,
}
