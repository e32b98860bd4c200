use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::{RenderLogic, RenderOptions};
use crate::export::notify_export_success;
use crate::models::TripResult;
use crate::ui::messages::info;
use crate::utils::parse_date;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Handle the `render` command: offline rendering of a saved trip result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Render {
        input,
        out_dir,
        format,
        day,
        start_date,
        force,
    } = cmd
    else {
        return Ok(());
    };

    info(format!("Reading trip result: {input}"));

    let file = File::open(input)?;
    let trip: TripResult = serde_json::from_reader(BufReader::new(file))?;

    let start = match start_date {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };

    let opts = RenderOptions {
        out_dir: PathBuf::from(
            out_dir
                .clone()
                .unwrap_or_else(|| cfg.output_dir.clone()),
        ),
        format: *format,
        day: *day,
        start_date: start,
        template_image: cfg.template_image.clone(),
        force: *force,
    };

    for path in RenderLogic::render_sheets(&trip, &opts)? {
        notify_export_success("Log sheet", &path);
    }

    Ok(())
}
