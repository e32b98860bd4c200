use crate::api::TripClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::summary::totals_by_row;
use crate::errors::AppResult;
use crate::export::logic::{RenderLogic, RenderOptions};
use crate::export::{geojson, notify_export_success};
use crate::models::{TripRequest, TripResult, to_lat_lng};
use crate::ui::messages::{info, item, success};
use crate::utils::hours::validate_cycle_hours;
use crate::utils::{format_hours, parse_date};

use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle the `plan` command: one request/response cycle against the
/// backend, then print a summary and write the requested outputs.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Plan {
        current,
        pickup,
        dropoff,
        cycle_used,
        save,
        logs,
        format,
        geojson: geojson_file,
        start_date,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let request = TripRequest {
        current_location: current.clone(),
        pickup_location: pickup.clone(),
        dropoff_location: dropoff.clone(),
        cycle_used_hours: validate_cycle_hours(*cycle_used)?,
    };

    info(format!("Planning trip via {}", cfg.backend_url));

    let client = TripClient::new(&cfg.backend_url);
    let trip = client.plan_trip(&request)?;

    print_summary(&trip);

    if let Some(path) = save {
        save_trip(&trip, Path::new(path), *force)?;
    }

    if let Some(path) = geojson_file {
        let path = Path::new(path);
        geojson::export_geojson(&trip, path)?;
        notify_export_success("GeoJSON", path);
    }

    if let Some(dir) = logs {
        let start = match start_date {
            Some(s) => Some(parse_date(s)?),
            None => Some(Local::now().date_naive()),
        };

        let opts = RenderOptions {
            out_dir: PathBuf::from(dir),
            format: *format,
            day: None,
            start_date: start,
            template_image: cfg.template_image.clone(),
            force: *force,
        };

        for path in RenderLogic::render_sheets(&trip, &opts)? {
            notify_export_success("Log sheet", &path);
        }
    }

    Ok(())
}

fn print_summary(trip: &TripResult) {
    success(format!(
        "Trip planned: {} route leg(s), {} log day(s)",
        trip.routes.len(),
        trip.log_sheets.len()
    ));

    if !trip.log_sheets.is_empty() {
        info("Daily totals:");
        for (idx, sheet) in trip.log_sheets.iter().enumerate() {
            let mut parts: Vec<String> = totals_by_row(sheet)
                .into_iter()
                .map(|(row, hours)| format!("{} {}", row.as_label(), format_hours(hours)))
                .collect();

            if let Some(total) = sheet.total_hours {
                parts.push(format!("total {}", format_hours(total)));
            }

            if parts.is_empty() {
                item(format!("Day {}: {} activities", idx + 1, sheet.activities.len()));
            } else {
                item(format!("Day {}: {}", idx + 1, parts.join(", ")));
            }
        }
    }

    let rests = trip.rests.by_category();
    if rests.iter().any(|(_, stops)| !stops.is_empty()) {
        info("Rest stops (lat, lng):");
        for (category, stops) in rests {
            for rest in stops {
                let [lat, lng] = to_lat_lng(rest.coords);
                item(format!("[{category}] {} ({lat}, {lng})", rest.name));
            }
        }
    }
}

fn save_trip(trip: &TripResult, path: &Path, force: bool) -> AppResult<()> {
    crate::export::fs_utils::ensure_writable(path, force)?;

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(trip)?.as_bytes())?;

    notify_export_success("Trip result", path);
    Ok(())
}
