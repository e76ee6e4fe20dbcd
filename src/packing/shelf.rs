use log::debug;

use super::{Rect, canvas_bounds};
use crate::error::AtlasError;

/// Lower bound for the estimated canvas width
pub const MIN_CANVAS_WIDTH: u32 = 512;

/// Multiplier applied to `sqrt(total area)` when estimating the canvas width
pub const CANVAS_WIDTH_FACTOR: f64 = 1.5;

/// A sprite placement produced by the shelf packer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the sprite in the slice passed to [`ShelfPacker::pack`]
    pub index: usize,
    /// Assigned rectangle, always the sprite's intrinsic size
    pub rect: Rect,
}

/// Result of a packing run
#[derive(Debug, Clone)]
pub struct ShelfLayout {
    /// Placements in the order they were made (tallest first)
    pub placements: Vec<Placement>,
    /// Final canvas width (tight)
    pub width: u32,
    /// Final canvas height (tight)
    pub height: u32,
    /// Row width the shelves were filled against
    pub estimated_width: u32,
}

/// Cursor state threaded through shelf placement
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    x: u32,
    y: u32,
    row_height: u32,
}

/// Row ("shelf") packer.
///
/// Sprites are sorted tallest first and laid out left to right; a new row
/// starts whenever the next sprite would cross the estimated canvas width.
/// Single pass, no backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfPacker {
    padding: u32,
}

impl ShelfPacker {
    pub fn new(padding: u32) -> Self {
        Self { padding }
    }

    /// Pack sprites given as `(width, height)` pairs.
    pub fn pack(&self, sizes: &[(u32, u32)]) -> Result<ShelfLayout, AtlasError> {
        if sizes.is_empty() {
            return Err(AtlasError::EmptyInput);
        }

        let order = sorted_by_height(sizes);
        let canvas_width = estimate_canvas_width(sizes);
        debug!(
            "Estimated canvas width {} for {} sprites",
            canvas_width,
            sizes.len()
        );

        let (placements, _) = order.into_iter().try_fold(
            (Vec::with_capacity(sizes.len()), Cursor::default()),
            |(mut placements, cursor), index| {
                let (width, height) = sizes[index];
                let (rect, cursor) = self.place(cursor, width, height, canvas_width).ok_or(
                    AtlasError::CanvasOverflow {
                        index,
                        width,
                        height,
                    },
                )?;
                debug!(
                    "Placed sprite #{} ({}x{}) at ({}, {})",
                    index, width, height, rect.x, rect.y
                );
                placements.push(Placement { index, rect });
                Ok::<_, AtlasError>((placements, cursor))
            },
        )?;

        let (width, height) = canvas_bounds(placements.iter().map(|p| &p.rect))?;

        Ok(ShelfLayout {
            placements,
            width,
            height,
            estimated_width: canvas_width,
        })
    }

    /// Place one sprite at the cursor, returning its rectangle and the advanced cursor.
    ///
    /// The cursor saturates at `u32::MAX`; `None` means the sprite's far edge
    /// cannot be represented.
    fn place(
        &self,
        mut cursor: Cursor,
        width: u32,
        height: u32,
        canvas_width: u32,
    ) -> Option<(Rect, Cursor)> {
        // An empty row always accepts the sprite, even one wider than the canvas
        if cursor.x > 0 && cursor.x.saturating_add(width) > canvas_width {
            cursor.y = cursor
                .y
                .saturating_add(cursor.row_height)
                .saturating_add(self.padding);
            cursor.x = 0;
            cursor.row_height = 0;
        }

        cursor.x.checked_add(width)?;
        cursor.y.checked_add(height)?;
        let rect = Rect::new(cursor.x, cursor.y, width, height);

        cursor.x = cursor.x.saturating_add(width).saturating_add(self.padding);
        cursor.row_height = cursor.row_height.max(height);

        Some((rect, cursor))
    }
}

/// Indices of `sizes` ordered by height, tallest first. Equal heights keep input order.
pub fn sorted_by_height(sizes: &[(u32, u32)]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..sizes.len()).collect();
    // sort_by is stable
    indices.sort_by(|&a, &b| sizes[b].1.cmp(&sizes[a].1));
    indices
}

/// `max(MIN_CANVAS_WIDTH, ceil(sqrt(total area) * CANVAS_WIDTH_FACTOR))`
pub fn estimate_canvas_width(sizes: &[(u32, u32)]) -> u32 {
    let total_area: u64 = sizes
        .iter()
        .map(|&(w, h)| u64::from(w) * u64::from(h))
        .sum();

    let estimate = ((total_area as f64).sqrt() * CANVAS_WIDTH_FACTOR).ceil();

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "estimate is non-negative and clamped to u32 range"
    )]
    let estimate = estimate.min(f64::from(u32::MAX)) as u32;

    estimate.max(MIN_CANVAS_WIDTH)
}
