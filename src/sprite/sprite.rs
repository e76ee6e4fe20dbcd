use image::RgbaImage;
use std::path::PathBuf;

use crate::packing::Rect;

/// A decoded sprite before packing
#[derive(Debug, Clone)]
pub struct SourceSprite {
    /// Original file path
    pub path: PathBuf,
    /// Identifier written to metadata (file name without extension)
    pub name: String,
    /// Decoded pixel data
    pub image: RgbaImage,
}

impl SourceSprite {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// A sprite placed in the atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedSprite {
    /// Source sprite name
    pub name: String,
    /// Position in atlas (x coordinate)
    pub x: u32,
    /// Position in atlas (y coordinate)
    pub y: u32,
    /// Width in atlas
    pub width: u32,
    /// Height in atlas
    pub height: u32,
}

impl PackedSprite {
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
