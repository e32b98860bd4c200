pub mod layout;
pub mod scene;

pub use layout::layout_sheet;
pub use scene::{Anchor, Label, Scene, Segment};
