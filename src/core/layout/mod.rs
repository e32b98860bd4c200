//! Daily log layout engine.
//!
//! Deterministically maps one LogSheet onto drawable primitives positioned
//! on the 513x518 log-sheet template: the duty-status line, the remark
//! band, and the totals column. Pure function of its input: calling it
//! twice with the same sheet produces identical scenes.

pub mod activities;
pub mod grid;
pub mod remarks;
pub mod summary;

use crate::core::scene::Scene;
use crate::models::LogSheet;

/// Compute the scene for one day.
///
/// `None` (or a sheet with empty activities and no annotations) yields an
/// empty scene; the background template still renders on its own layer.
/// Missing optional fields render nothing for that layer. Never fails.
pub fn layout_sheet(sheet: Option<&LogSheet>) -> Scene {
    let mut scene = Scene::new();

    let Some(sheet) = sheet else {
        return scene;
    };

    activities::plot(&mut scene, &sheet.activities);

    if let Some(remarks) = &sheet.remarks {
        remarks::plot(&mut scene, remarks);
    }

    summary::plot(&mut scene, sheet);

    scene
}
