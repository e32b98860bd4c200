mod common;
use common::sample_trip;

use tripsheet::api::extract_error_message;
use tripsheet::export::trip_to_geojson;
use tripsheet::models::{TripResult, to_lat_lng};

#[test]
fn test_decode_full_trip_result() {
    let json = r#"{
        "routes": [[[-87.66, 41.87], [-86.14, 39.78]]],
        "rests": {
            "inputs": [{"name": "Chicago, IL", "coords": [-87.66, 41.87]}],
            "duty_limit": [],
            "refill": []
        },
        "log_sheets": [{
            "activities": [{"start": 5, "end": 8.75, "status": "Driving"}],
            "total_hours_by_status": {"Driving": 3.75},
            "total_hours": 3.75
        }]
    }"#;

    let trip: TripResult = serde_json::from_str(json).expect("decode trip");

    assert_eq!(trip.routes.len(), 1);
    assert_eq!(trip.rests.inputs[0].name, "Chicago, IL");
    assert_eq!(trip.log_sheets.len(), 1);
    assert_eq!(trip.log_sheets[0].activities[0].status, "Driving");
    assert_eq!(trip.log_sheets[0].total_hours, Some(3.75));
}

#[test]
fn test_decode_tolerates_missing_optional_fields() {
    // A minimal backend response: no remarks, no totals, no rests.
    let json = r#"{"routes": [], "log_sheets": [{"activities": []}]}"#;

    let trip: TripResult = serde_json::from_str(json).expect("decode minimal trip");

    assert!(trip.rests.inputs.is_empty());
    assert!(trip.log_sheets[0].remarks.is_none());
    assert!(trip.log_sheets[0].total_hours_by_status.is_none());
}

#[test]
fn test_coordinate_reversal_for_map_markers() {
    assert_eq!(to_lat_lng([-87.66063, 41.87897]), [41.87897, -87.66063]);
}

#[test]
fn test_error_message_extraction() {
    assert_eq!(
        extract_error_message(r#"{"error": "Trip would exceed duty limit"}"#),
        Some("Trip would exceed duty limit".to_string())
    );
    assert_eq!(
        extract_error_message(r#"{"detail": "Not found."}"#),
        Some("Not found.".to_string())
    );
    // `error` wins when both are present.
    assert_eq!(
        extract_error_message(r#"{"error": "a", "detail": "b"}"#),
        Some("a".to_string())
    );
    assert_eq!(extract_error_message("<html>504</html>"), None);
    assert_eq!(extract_error_message(r#"{"other": 1}"#), None);
}

#[test]
fn test_geojson_features() {
    let trip = sample_trip();
    let doc = trip_to_geojson(&trip);

    assert_eq!(doc["type"], "FeatureCollection");

    let features = doc["features"].as_array().expect("features array");
    // 2 route legs + 2 rest stops.
    assert_eq!(features.len(), 4);

    assert_eq!(features[0]["geometry"]["type"], "LineString");
    // GeoJSON keeps backend [lng, lat] order.
    assert_eq!(features[0]["geometry"]["coordinates"][0][0], -87.66063);

    let point = &features[2];
    assert_eq!(point["geometry"]["type"], "Point");
    assert_eq!(point["properties"]["category"], "inputs");
    assert_eq!(point["properties"]["name"], "Chicago, IL");
}
