use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::atlas::Atlas;
use crate::error::AtlasError;
use crate::output::atlas_png_filename;
use crate::pivot::Pivot;
use crate::sprite::PackedSprite;

#[derive(Serialize)]
struct JsonOutput<'a> {
    atlas: String,
    width: u32,
    height: u32,
    sprites: Vec<JsonSprite<'a>>,
}

#[derive(Serialize)]
struct JsonSprite<'a> {
    name: &'a str,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    #[serde(serialize_with = "two_decimals")]
    pivot_x: f32,
    #[serde(serialize_with = "two_decimals")]
    pivot_y: f32,
}

/// Emit a number with exactly two decimal places (`0.50`, not `0.5`)
fn two_decimals<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    let raw =
        RawValue::from_string(format!("{:.2}", value)).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

/// Render the metadata document for an atlas.
///
/// Sprites are listed in placement order.
pub fn render_json(atlas: &Atlas, pivot: Pivot, base_name: &str) -> Result<String> {
    let output = JsonOutput {
        atlas: atlas_png_filename(base_name),
        width: atlas.width,
        height: atlas.height,
        sprites: atlas
            .sprites
            .iter()
            .map(|sprite| sprite_to_json(sprite, pivot))
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

/// Write `<base_name>.json` into `output_dir`
pub fn write_json(
    atlas: &Atlas,
    pivot: Pivot,
    output_dir: &Path,
    base_name: &str,
) -> Result<()> {
    let json_path = output_dir.join(format!("{}.json", base_name));
    let content = render_json(atlas, pivot, base_name)?;

    fs::write(&json_path, content).map_err(|e| AtlasError::OutputWrite {
        path: json_path,
        source: e,
    })?;

    Ok(())
}

fn sprite_to_json(sprite: &PackedSprite, pivot: Pivot) -> JsonSprite<'_> {
    JsonSprite {
        name: &sprite.name,
        x: sprite.x,
        y: sprite.y,
        w: sprite.width,
        h: sprite.height,
        pivot_x: pivot.x,
        pivot_y: pivot.y,
    }
}
