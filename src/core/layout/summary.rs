use crate::core::layout::grid::{GRAND_TOTAL_Y, SUMMARY_X, row_y};
use crate::core::scene::{Anchor, Label, Scene};
use crate::models::{DutyStatus, GRID_ROWS, LogSheet};
use crate::utils::hours::format_hours;

pub const SUMMARY_SIZE: f64 = 9.0;

/// Accumulated hours per grid row, in fixed top-to-bottom row order.
///
/// Totals keyed by a loading/unloading sub-label fold into the On Duty
/// row; unknown labels land there too, mirroring the grid fallback. Rows
/// with no entry in the sheet's totals map are omitted.
pub fn totals_by_row(sheet: &LogSheet) -> Vec<(DutyStatus, f64)> {
    let Some(totals) = &sheet.total_hours_by_status else {
        return Vec::new();
    };

    let mut rows = Vec::new();

    for row in GRID_ROWS {
        let mut hours = 0.0;
        let mut present = false;

        for (label, value) in totals {
            let status = DutyStatus::from_label(label).unwrap_or(DutyStatus::OnDuty);
            if status.row() == row {
                hours += value;
                present = true;
            }
        }

        if present {
            rows.push((row, hours));
        }
    }

    rows
}

/// Plot the totals column: one right-aligned number per grid row that has
/// accumulated hours, plus the grand total below the last row.
pub fn plot(scene: &mut Scene, sheet: &LogSheet) {
    for (row, hours) in totals_by_row(sheet) {
        scene.push_label(summary_label(row_y(row), hours));
    }

    if let Some(total) = sheet.total_hours {
        scene.push_label(summary_label(GRAND_TOTAL_Y, total));
    }
}

fn summary_label(y: f64, hours: f64) -> Label {
    Label {
        x: SUMMARY_X,
        y,
        text: format_hours(hours),
        size: SUMMARY_SIZE,
        rotation: 0.0,
        anchor: Anchor::End,
    }
}
