// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod geojson;
pub mod logic;
pub mod pdf;
pub mod svg;

pub use geojson::trip_to_geojson;
pub use logic::{RenderLogic, RenderOptions};
pub use pdf::SheetPdf;
pub use svg::scene_to_svg;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for rendered/exported files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Svg,
    Pdf,
}

impl RenderFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Svg => "svg",
            RenderFormat::Pdf => "pdf",
        }
    }
}
