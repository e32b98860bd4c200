use crate::core::layout_sheet;
use crate::errors::{AppError, AppResult};
use crate::export::RenderFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::pdf::SheetPdf;
use crate::export::svg::scene_to_svg;
use crate::models::{LogSheet, TripResult};
use crate::ui::messages::warning;

use chrono::{Days, NaiveDate};
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Combined PDF output name; SVG output is one file per day instead.
const PDF_FILE_NAME: &str = "log-sheets.pdf";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub out_dir: PathBuf,
    pub format: RenderFormat,
    /// 1-based day selection; None renders every sheet.
    pub day: Option<usize>,
    /// Calendar date of day 1; day N is stamped start_date + N - 1.
    pub start_date: Option<NaiveDate>,
    /// Blank-log template image layered behind SVG output.
    pub template_image: Option<String>,
    pub force: bool,
}

/// High-level rendering logic: one scene per selected log sheet, written
/// as day-NN.svg files or one multi-page PDF.
pub struct RenderLogic;

impl RenderLogic {
    pub fn render_sheets(trip: &TripResult, opts: &RenderOptions) -> AppResult<Vec<PathBuf>> {
        let sheets = &trip.log_sheets;

        if sheets.is_empty() {
            warning("The trip result contains no log sheets.");
            return Ok(Vec::new());
        }

        // Resolve --day to a 0-based index range.
        let selected: Vec<usize> = match opts.day {
            Some(day) => {
                if day == 0 || day > sheets.len() {
                    return Err(AppError::InvalidDay(day));
                }
                vec![day - 1]
            }
            None => (0..sheets.len()).collect(),
        };

        fs::create_dir_all(&opts.out_dir)?;

        // The template layer only applies when the asset actually exists;
        // a dangling config path degrades to a blank background.
        let background = opts
            .template_image
            .as_deref()
            .filter(|p| Path::new(p).exists());

        match opts.format {
            RenderFormat::Svg => Self::write_svg_files(sheets, &selected, background, opts),
            RenderFormat::Pdf => Self::write_pdf(sheets, &selected, opts),
        }
    }

    fn write_svg_files(
        sheets: &[LogSheet],
        selected: &[usize],
        background: Option<&str>,
        opts: &RenderOptions,
    ) -> AppResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        for &idx in selected {
            let path = opts.out_dir.join(format!("day-{:02}.svg", idx + 1));
            ensure_writable(&path, opts.force)?;

            let scene = layout_sheet(Some(&sheets[idx]));
            let title = sheet_title(idx, opts.start_date);
            let svg = scene_to_svg(&scene, Some(&title), background);

            let mut file = File::create(&path)?;
            file.write_all(svg.as_bytes())?;
            written.push(path);
        }

        Ok(written)
    }

    fn write_pdf(
        sheets: &[LogSheet],
        selected: &[usize],
        opts: &RenderOptions,
    ) -> AppResult<Vec<PathBuf>> {
        let path = opts.out_dir.join(PDF_FILE_NAME);
        ensure_writable(&path, opts.force)?;

        let mut pdf = SheetPdf::new();
        for &idx in selected {
            let scene = layout_sheet(Some(&sheets[idx]));
            let title = sheet_title(idx, opts.start_date);
            pdf.add_sheet(&scene, Some(&title));
        }

        pdf.save(&path)
            .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;

        Ok(vec![path])
    }
}

/// "Day N", with the calendar date appended when a start date is known.
fn sheet_title(idx: usize, start_date: Option<NaiveDate>) -> String {
    let day = idx + 1;
    match start_date.and_then(|d| d.checked_add_days(Days::new(idx as u64))) {
        Some(date) => format!("Day {day} - {date}"),
        None => format!("Day {day}"),
    }
}
