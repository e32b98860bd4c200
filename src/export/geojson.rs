//! GeoJSON serializer for the planned itinerary.
//!
//! Route legs become LineString features and rest stops become Point
//! features tagged with their backend category, so the output drops
//! straight into any map viewer. Backend coordinates are already
//! [lng, lat], which is already GeoJSON order, so no reversal here.

use crate::errors::AppResult;
use crate::models::TripResult;
use serde_json::{Value, json};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn trip_to_geojson(trip: &TripResult) -> Value {
    let mut features: Vec<Value> = Vec::new();

    for (idx, route) in trip.routes.iter().enumerate() {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": route,
            },
            "properties": { "leg": idx + 1 },
        }));
    }

    for (category, stops) in trip.rests.by_category() {
        for rest in stops {
            features.push(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": rest.coords,
                },
                "properties": {
                    "name": rest.name,
                    "category": category,
                },
            }));
        }
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

pub(crate) fn export_geojson(trip: &TripResult, path: &Path) -> AppResult<()> {
    let doc = trip_to_geojson(trip);
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&doc)?.as_bytes())?;
    Ok(())
}
