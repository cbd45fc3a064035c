use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{app::TimetableAppError, feed::MissingStopLocationPolicy};

/// options for a timetable import, read from a .toml or .json file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableImportConfig {
    /// reference service day to materialize. when not set, the earliest date with
    /// service in the feed is used.
    #[serde(default)]
    pub service_date: Option<NaiveDate>,
    #[serde(default)]
    pub missing_stop_location_policy: MissingStopLocationPolicy,
    /// replace a previously written timetable
    #[serde(default)]
    pub overwrite: bool,
    /// show a progress bar over the patterns of the feed
    #[serde(default)]
    pub show_progress: bool,
}

impl TryFrom<&String> for TimetableImportConfig {
    type Error = TimetableAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TimetableAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TimetableAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TimetableAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TimetableAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TimetableAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
