pub mod client;

pub use client::{PLAN_TRIP_PATH, TripClient, extract_error_message};
