mod format;
mod json;

pub use format::save_atlas_image;
pub use json::{render_json, write_json};

/// File name of the atlas image for a given base name
pub fn atlas_png_filename(base_name: &str) -> String {
    format!("{}.png", base_name)
}
