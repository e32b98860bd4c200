use crate::errors::{AppError, AppResult};
use crate::models::{TripRequest, TripResult};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Fixed endpoint path on the planning backend.
pub const PLAN_TRIP_PATH: &str = "/api/plan-trip/";

/// Error payload shape used by the backend for non-2xx responses.
/// DRF-style endpoints use `detail`, the trip views use `error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

/// Thin client around the single plan-trip endpoint.
///
/// One blocking request per call, no retry, no timeout: the caller owns
/// the submit-once policy.
pub struct TripClient {
    base_url: String,
    http: Client,
}

impl TripClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// POST the trip parameters and decode the planned itinerary.
    ///
    /// Transport failures, non-2xx statuses and malformed bodies all
    /// normalize into AppError so the caller prints a single message.
    pub fn plan_trip(&self, request: &TripRequest) -> AppResult<TripResult> {
        let url = format!("{}{}", self.base_url, PLAN_TRIP_PATH);

        let response = self.http.post(&url).json(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let msg = extract_error_message(&body)
                .unwrap_or_else(|| format!("Backend request failed with status {status}"));
            return Err(AppError::Backend(msg));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull the backend's own message out of an error body, if it has one.
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.or(parsed.detail)
}
