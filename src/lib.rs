pub mod atlas;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod packing;
pub mod pivot;
pub mod sprite;

pub use atlas::{Atlas, AtlasBuilder};
pub use cli::{CliArgs, CompressionLevel};
pub use error::AtlasError;
pub use packing::{Rect, ShelfLayout, ShelfPacker};
pub use pivot::{Pivot, PivotMode};
pub use sprite::{PackedSprite, SourceSprite};
