use crate::models::log_sheet::LogSheet;
use serde::{Deserialize, Serialize};

/// JSON body of the plan-trip request.
#[derive(Debug, Clone, Serialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used_hours: f64,
}

/// A named stop on the map. `coords` are backend order: [lng, lat].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rest {
    pub name: String,
    pub coords: [f64; 2],
}

/// Rest stops grouped by backend-determined category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestStops {
    #[serde(default)]
    pub inputs: Vec<Rest>,
    #[serde(default)]
    pub duty_limit: Vec<Rest>,
    #[serde(default)]
    pub refill: Vec<Rest>,
}

impl RestStops {
    /// Iterate all stops with their category name, in fixed category order.
    pub fn by_category(&self) -> [(&'static str, &[Rest]); 3] {
        [
            ("inputs", self.inputs.as_slice()),
            ("duty_limit", self.duty_limit.as_slice()),
            ("refill", self.refill.as_slice()),
        ]
    }
}

/// Decoded plan-trip response: route geometry, categorized rest stops and
/// one log sheet per day of the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    #[serde(default)]
    pub routes: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    pub rests: RestStops,
    #[serde(default)]
    pub log_sheets: Vec<LogSheet>,
}

/// Backend coordinates are [lng, lat]; map markers want [lat, lng].
pub fn to_lat_lng(coords: [f64; 2]) -> [f64; 2] {
    [coords[1], coords[0]]
}
