use crate::core::layout::grid::hour_x;
use crate::core::scene::{Anchor, Label, Scene, Segment};
use crate::models::Remark;

// Vertical band of the remark brackets, below the activity grid.
pub const TICK_TOP_Y: f64 = 266.0;
pub const TICK_BOTTOM_Y: f64 = 282.0;

// The annotation diagonal runs down-left from the bracket's bottom-left
// corner; equal x/y run gives the 45 degree slant.
pub const DIAGONAL_RUN: f64 = 20.0;

pub const LABEL_SIZE: f64 = 7.0;
pub const LABEL_ROTATION: f64 = 45.0;
pub const LABEL_STACK_GAP: f64 = 9.0;

/// Plot the remark band: one bracket per remark plus its slanted
/// location/information annotation.
pub fn plot(scene: &mut Scene, remarks: &[Remark]) {
    for remark in remarks {
        let x1 = hour_x(remark.start);
        let x2 = hour_x(remark.end);

        // Bracket: two ticks joined along the bottom of the band.
        scene.push_segment(Segment::vertical(x1, TICK_TOP_Y, TICK_BOTTOM_Y));
        scene.push_segment(Segment::vertical(x2, TICK_TOP_Y, TICK_BOTTOM_Y));
        scene.push_segment(Segment::horizontal(x1, x2, TICK_BOTTOM_Y));

        // Diagonal out of the bottom-left corner.
        let dx = x1 - DIAGONAL_RUN;
        let dy = TICK_BOTTOM_Y + DIAGONAL_RUN;
        scene.push_segment(Segment {
            x1,
            y1: TICK_BOTTOM_Y,
            x2: dx,
            y2: dy,
        });

        // Two rotated labels stacked near the diagonal's midpoint.
        let mid_x = (x1 + dx) / 2.0;
        let mid_y = (TICK_BOTTOM_Y + dy) / 2.0;

        scene.push_label(Label {
            x: mid_x,
            y: mid_y,
            text: remark.location.clone(),
            size: LABEL_SIZE,
            rotation: LABEL_ROTATION,
            anchor: Anchor::Start,
        });
        scene.push_label(Label {
            x: mid_x,
            y: mid_y + LABEL_STACK_GAP,
            text: remark.information.clone(),
            size: LABEL_SIZE,
            rotation: LABEL_ROTATION,
            anchor: Anchor::Start,
        });
    }
}
