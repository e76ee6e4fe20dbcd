use anyhow::Result;
use image::imageops;
use log::info;

use super::Atlas;
use crate::error::AtlasError;
use crate::packing::{ShelfLayout, ShelfPacker};
use crate::sprite::{PackedSprite, SourceSprite};

/// Default gap between sprites in pixels
pub const DEFAULT_PADDING: u32 = 2;

/// Configuration for atlas building
#[derive(Debug, Clone, Copy)]
pub struct AtlasBuilder {
    pub padding: u32,
}

impl Default for AtlasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasBuilder {
    pub fn new() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Compute placements without touching pixel data
    pub fn layout(&self, sprites: &[SourceSprite]) -> Result<ShelfLayout, AtlasError> {
        let sizes: Vec<(u32, u32)> = sprites.iter().map(|s| (s.width(), s.height())).collect();
        ShelfPacker::new(self.padding).pack(&sizes)
    }

    /// Pack the sprites and blit them into a single atlas
    pub fn build(&self, sprites: Vec<SourceSprite>) -> Result<Atlas> {
        let layout = self.layout(&sprites)?;

        let mut atlas = Atlas::new(layout.width, layout.height);
        let mut sprites: Vec<Option<SourceSprite>> = sprites.into_iter().map(Some).collect();

        for placement in &layout.placements {
            // Each index appears exactly once in the layout
            let Some(source) = sprites[placement.index].take() else {
                continue;
            };

            imageops::replace(
                &mut atlas.image,
                &source.image,
                i64::from(placement.rect.x),
                i64::from(placement.rect.y),
            );

            atlas
                .sprites
                .push(PackedSprite::new(source.name, placement.rect));
        }

        info!(
            "Atlas: {}x{} with {} sprites ({:.1}% efficiency, row width {})",
            atlas.width,
            atlas.height,
            atlas.sprites.len(),
            occupancy(&atlas) * 100.0,
            layout.estimated_width,
        );

        Ok(atlas)
    }
}

/// Fraction of the canvas covered by sprite pixels
fn occupancy(atlas: &Atlas) -> f64 {
    let total = u64::from(atlas.width) * u64::from(atlas.height);
    if total == 0 {
        return 0.0;
    }
    let used: u64 = atlas.sprites.iter().map(|s| s.rect().area()).sum();
    used as f64 / total as f64
}
