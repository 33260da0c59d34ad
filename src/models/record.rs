use serde::Deserialize;

/// Header names of the columns the report needs.
pub const COL_MEMBER: &str = "Member name(s)";
pub const COL_START: &str = "Start datetime";
pub const COL_END: &str = "End datetime";
pub const COL_SECONDS: &str = "Time (seconds)";

pub const REQUIRED_COLUMNS: [&str; 4] = [COL_MEMBER, COL_START, COL_END, COL_SECONDS];

/// One tracked work interval, as exported by the time tracker.
///
/// Only the columns used by the report are kept; `Card title`, `Card labels`
/// and `Time (formatted)` are ignored while deserializing.
/// Timestamps stay raw here: they are parsed only for rows that survive the
/// member filter. An empty `Time (seconds)` cell (e.g. a timer still running)
/// loads as `None` and adds nothing to the sums.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeRecord {
    #[serde(rename = "Member name(s)")]
    pub member_field: String,
    #[serde(rename = "Start datetime")]
    pub start_datetime: String,
    #[serde(rename = "End datetime")]
    pub end_datetime: String,
    #[serde(rename = "Time (seconds)")]
    pub duration_seconds: Option<f64>,
}

impl TimeRecord {
    pub fn new(member_field: &str, start: &str, end: &str, duration_seconds: f64) -> Self {
        Self {
            member_field: member_field.to_string(),
            start_datetime: start.to_string(),
            end_datetime: end.to_string(),
            duration_seconds: Some(duration_seconds),
        }
    }

    /// Tracked seconds, 0 when the cell was empty.
    pub fn seconds(&self) -> f64 {
        self.duration_seconds.unwrap_or(0.0)
    }
}
