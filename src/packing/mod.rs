mod bounds;
mod rect;
mod shelf;

pub use bounds::canvas_bounds;
pub use rect::Rect;
pub use shelf::{
    CANVAS_WIDTH_FACTOR, MIN_CANVAS_WIDTH, Placement, ShelfLayout, ShelfPacker,
    estimate_canvas_width, sorted_by_height,
};
