mod loader;
mod sprite;

pub use loader::load_sprites;
pub use sprite::{PackedSprite, SourceSprite};
