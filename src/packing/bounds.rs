use super::Rect;
use crate::error::AtlasError;

/// Compute the tightest canvas enclosing every placement.
///
/// Returns `(max right edge, max bottom edge)`. Trailing padding after the
/// last sprite in a row or column is not part of the canvas.
pub fn canvas_bounds<'a>(
    placements: impl IntoIterator<Item = &'a Rect>,
) -> Result<(u32, u32), AtlasError> {
    placements
        .into_iter()
        .fold(None, |acc: Option<(u32, u32)>, rect| {
            let (w, h) = acc.unwrap_or((0, 0));
            Some((w.max(rect.right()), h.max(rect.bottom())))
        })
        .ok_or(AtlasError::EmptyInput)
}
