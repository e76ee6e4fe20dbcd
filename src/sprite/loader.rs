use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;
use log::{info, warn};
use rayon::prelude::*;

use super::SourceSprite;
use crate::error::AtlasError;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Load every supported image directly inside `dir`.
///
/// Files are visited in file-name order and decoded in parallel; the result
/// keeps that order. Files that fail to decode, or decode to an empty image,
/// are skipped with a warning.
pub fn load_sprites(dir: &Path) -> Result<Vec<SourceSprite>> {
    if !dir.is_dir() {
        return Err(AtlasError::MissingDirectory(dir.to_path_buf()).into());
    }

    let image_paths = collect_image_paths(dir)?;
    info!("Loading {} images...", image_paths.len());

    let loaded: Vec<_> = image_paths
        .par_iter()
        .map(|path| load_single_sprite(path))
        .collect();

    let sprites: Vec<SourceSprite> = loaded
        .into_iter()
        .filter_map(|result| match result {
            Ok(sprite) if sprite.width() == 0 || sprite.height() == 0 => {
                warn!("Skipping empty image '{}'", sprite.path.display());
                None
            }
            Ok(sprite) => Some(sprite),
            Err(e) => {
                warn!("Skipping: {}", e);
                None
            }
        })
        .collect();

    if sprites.is_empty() {
        return Err(AtlasError::EmptyInput.into());
    }

    Ok(sprites)
}

fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    // read_dir order is platform dependent
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_single_sprite(path: &Path) -> Result<SourceSprite, AtlasError> {
    let image = ImageReader::open(path)
        .map_err(|e| AtlasError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| AtlasError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| AtlasError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(SourceSprite {
        path: path.to_path_buf(),
        name: sprite_name(path),
        image,
    })
}

/// Identifier for a sprite: its file name without extension
fn sprite_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
