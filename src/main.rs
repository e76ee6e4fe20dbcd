use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use shelfpack::atlas::AtlasBuilder;
use shelfpack::cli::CliArgs;
use shelfpack::config::MergedConfig;
use shelfpack::output::{atlas_png_filename, save_atlas_image, write_json};
use shelfpack::sprite::load_sprites;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = MergedConfig::from_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("shelfpack v{}", env!("CARGO_PKG_VERSION"));

    // Nothing is written unless at least one sprite loads
    let sprites = load_sprites(&merged.input)?;
    info!("Loaded {} sprites", sprites.len());

    let atlas = AtlasBuilder::new().padding(merged.padding).build(sprites)?;

    if !merged.output.exists() {
        fs::create_dir_all(&merged.output).with_context(|| {
            format!(
                "failed to create output directory: {}",
                merged.output.display()
            )
        })?;
    }

    let png_path = merged.output.join(atlas_png_filename(&merged.name));
    save_atlas_image(&atlas, &png_path, merged.compress)?;
    info!("Saved {}", png_path.display());

    info!("Pivot: {}", merged.pivot.token());
    write_json(&atlas, merged.pivot.pivot(), &merged.output, &merged.name)?;
    info!("Generated {}.json", merged.name);

    info!("Done!");

    Ok(())
}
