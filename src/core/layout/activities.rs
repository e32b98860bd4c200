use crate::core::layout::grid::{hour_x, status_y};
use crate::core::scene::{Scene, Segment};
use crate::models::Activity;

/// Plot the duty-status line for one day.
///
/// Each activity becomes one horizontal segment on its status row. Every
/// activity after the first also gets a vertical connector anchored at the
/// *current* activity's start x, joining the previous row to the current
/// one, even when the previous activity's end time does not equal the
/// current start time.
pub fn plot(scene: &mut Scene, activities: &[Activity]) {
    let mut prev_y: Option<f64> = None;

    for activity in activities {
        let x1 = hour_x(activity.start);
        let x2 = hour_x(activity.end);
        let y = status_y(&activity.status);

        scene.push_segment(Segment::horizontal(x1, x2, y));

        if let Some(py) = prev_y {
            scene.push_segment(Segment::vertical(x1, py, y));
        }

        prev_y = Some(y);
    }
}
