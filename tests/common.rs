#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use tripsheet::models::{Activity, LogSheet, Remark, Rest, RestStops, TripResult};

pub fn tsp() -> Command {
    cargo_bin_cmd!("tripsheet")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a unique empty output directory inside the system temp dir
pub fn temp_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tripsheet", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn activity(start: f64, end: f64, status: &str) -> Activity {
    Activity {
        start,
        end,
        status: status.to_string(),
    }
}

/// A realistic one-day sheet: drive, load, drive, unload, off duty.
pub fn sample_sheet() -> LogSheet {
    let mut totals = BTreeMap::new();
    totals.insert("Driving".to_string(), 8.25);
    totals.insert("On Duty (Loading)".to_string(), 1.0);
    totals.insert("On Duty (Unloading)".to_string(), 1.0);
    totals.insert("Off Duty".to_string(), 13.75);

    LogSheet {
        activities: vec![
            activity(5.0, 8.75, "Driving"),
            activity(8.75, 9.75, "On Duty (Loading)"),
            activity(9.75, 14.25, "Driving"),
            activity(14.25, 15.25, "On Duty (Unloading)"),
            activity(15.25, 24.0, "Off Duty"),
        ],
        remarks: Some(vec![Remark {
            start: 8.75,
            end: 9.75,
            location: "Indianapolis, IN".to_string(),
            information: "Loading".to_string(),
        }]),
        total_hours_by_status: Some(totals),
        total_hours: Some(24.0),
    }
}

pub fn sample_trip() -> TripResult {
    TripResult {
        routes: vec![
            vec![[-87.66063, 41.87897], [-86.143448, 39.785871]],
            vec![[-86.143448, 39.785871], [-90.244086, 38.633024]],
        ],
        rests: RestStops {
            inputs: vec![Rest {
                name: "Chicago, IL".to_string(),
                coords: [-87.66063, 41.87897],
            }],
            duty_limit: vec![Rest {
                name: "Rest area I-70".to_string(),
                coords: [-88.0, 40.1],
            }],
            refill: vec![],
        },
        log_sheets: vec![sample_sheet()],
    }
}

/// Write a trip fixture to a unique temp path and return it
pub fn write_trip_fixture(name: &str) -> String {
    let path = temp_out(name, "json");
    let json = serde_json::to_string_pretty(&sample_trip()).expect("serialize fixture");
    fs::write(&path, json).expect("write fixture");
    path
}
