mod load;
mod merge;
mod types;

pub use load::LoadedConfig;
pub use merge::{DEFAULT_NAME, MergedConfig};
pub use types::{CONFIG_VERSION, CompressConfig, ShelfConfig};
