mod common;
use common::{temp_dir, tsp, write_trip_fixture};

use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_version_flag() {
    tsp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tripsheet"));
}

#[test]
fn test_render_svg_from_fixture() {
    let fixture = write_trip_fixture("render_svg");
    let out = temp_dir("render_svg");

    tsp()
        .args([
            "render", "--input", &fixture, "--out-dir", &out, "--format", "svg", "--force",
        ])
        .assert()
        .success();

    let sheet = Path::new(&out).join("day-01.svg");
    let content = fs::read_to_string(&sheet).expect("read rendered svg");
    assert!(content.contains("<svg"));
    assert!(content.contains("<line"));
}

#[test]
fn test_render_pdf_from_fixture() {
    let fixture = write_trip_fixture("render_pdf");
    let out = temp_dir("render_pdf");

    tsp()
        .args([
            "render",
            "--input",
            &fixture,
            "--out-dir",
            &out,
            "--format",
            "pdf",
            "--start-date",
            "2025-06-01",
            "--force",
        ])
        .assert()
        .success();

    let pdf = Path::new(&out).join("log-sheets.pdf");
    let bytes = fs::read(&pdf).expect("read rendered pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_render_unknown_day_fails() {
    let fixture = write_trip_fixture("render_bad_day");
    let out = temp_dir("render_bad_day");

    tsp()
        .args([
            "render", "--input", &fixture, "--out-dir", &out, "--day", "99", "--force",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No log sheet for day 99"));
}

#[test]
fn test_render_missing_input_fails() {
    tsp()
        .args(["render", "--input", "/nonexistent/trip.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_render_invalid_start_date_fails() {
    let fixture = write_trip_fixture("render_bad_date");

    tsp()
        .args([
            "render",
            "--input",
            &fixture,
            "--start-date",
            "06/01/2025",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_plan_rejects_out_of_range_cycle_hours() {
    tsp()
        .args([
            "plan",
            "--current",
            "Chicago, IL",
            "--pickup",
            "Indianapolis, IN",
            "--dropoff",
            "St. Louis, MO",
            "--cycle-used",
            "80",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cycle hours"));
}

#[test]
fn test_plan_surfaces_transport_errors() {
    // Port 9 (discard) is closed on any sane test machine; the request
    // must fail fast and normalize into a single error message.
    tsp()
        .args([
            "--backend-url",
            "http://127.0.0.1:9",
            "plan",
            "--current",
            "Chicago, IL",
            "--pickup",
            "Indianapolis, IN",
            "--dropoff",
            "St. Louis, MO",
            "--cycle-used",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_backend_url_env_override() {
    tsp()
        .env("TRIPSHEET_BACKEND_URL", "http://127.0.0.1:9")
        .args([
            "plan",
            "--current",
            "Chicago, IL",
            "--pickup",
            "Indianapolis, IN",
            "--dropoff",
            "St. Louis, MO",
            "--cycle-used",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
