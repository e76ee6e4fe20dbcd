mod builder;
mod types;

pub use builder::{AtlasBuilder, DEFAULT_PADDING};
pub use types::Atlas;
