use clap::Parser;
use std::path::PathBuf;

use crate::pivot::PivotMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "shelfpack")]
#[command(version, about = "Shelf-packing sprite atlas builder", long_about = None)]
pub struct CliArgs {
    /// Folder containing the sprite images
    #[arg(value_name = "INPUT_FOLDER", required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base name for output files (<NAME>.png, <NAME>.json) [default: atlas]
    #[arg(short = 'o', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Directory to write output files into [default: .]
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Padding between sprites in pixels [default: 2]
    #[arg(long)]
    pub padding: Option<u32>,

    /// Pivot written for every sprite: C, TL or BC (unknown values mean C) [default: C]
    #[arg(long, value_name = "C|TL|BC")]
    pub pivot: Option<PivotMode>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
