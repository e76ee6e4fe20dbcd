use image::RgbaImage;

use crate::sprite::PackedSprite;

/// A completed texture atlas
#[derive(Debug)]
pub struct Atlas {
    /// Atlas width
    pub width: u32,
    /// Atlas height
    pub height: u32,
    /// Rendered atlas image
    pub image: RgbaImage,
    /// Packed sprites, in placement order
    pub sprites: Vec<PackedSprite>,
}

impl Atlas {
    /// Create an empty atlas with a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            image: RgbaImage::new(width, height),
            sprites: Vec::new(),
        }
    }
}
