use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timed activity within a 24-hour day.
///
/// `start` and `end` are hour offsets from midnight (0–24, fractional);
/// `status` is the duty-status label as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub start: f64,
    pub end: f64,
    pub status: String,
}

/// An annotated time band drawn below the activity grid (e.g. a fuel stop).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remark {
    pub start: f64,
    pub end: f64,
    pub location: String,
    pub information: String,
}

/// One day's worth of duty-status data plus optional annotations and totals.
///
/// Produced once per day by the backend response and immutable afterwards;
/// the layout engine consumes it by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSheet {
    #[serde(default)]
    pub activities: Vec<Activity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Vec<Remark>>,

    // BTreeMap keeps re-serialized sheets byte-stable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours_by_status: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
}
