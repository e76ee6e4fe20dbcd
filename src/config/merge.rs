use std::path::PathBuf;

use anyhow::{Context, Result};

use super::LoadedConfig;
use crate::atlas::DEFAULT_PADDING;
use crate::cli::{CliArgs, CompressionLevel};
use crate::pivot::PivotMode;

/// Default base name for output files
pub const DEFAULT_NAME: &str = "atlas";

/// Merged configuration from CLI args and optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub padding: u32,
    pub pivot: PivotMode,
    pub compress: Option<CompressionLevel>,
    pub verbose: bool,
}

impl MergedConfig {
    /// Load the config file named by `--config`, if any, and merge it with the CLI args.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let loaded_config = if let Some(config_path) = &args.config {
            Some(
                LoadedConfig::load(config_path)
                    .with_context(|| format!("failed to load config: {}", config_path.display()))?,
            )
        } else {
            None
        };

        Self::merge(args, loaded_config.as_ref())
    }

    /// Merge config file values with CLI arguments.
    /// CLI arguments always take precedence over config values.
    pub fn merge(args: &CliArgs, loaded_config: Option<&LoadedConfig>) -> Result<Self> {
        let input = match (&args.input, loaded_config) {
            (Some(input), _) => input.clone(),
            (None, Some(lc)) => lc
                .resolve_input()
                .context("no input folder given on the command line or in the config file")?,
            (None, None) => anyhow::bail!("no input folder given"),
        };

        let output = args.output_dir.clone().unwrap_or_else(|| {
            loaded_config
                .map(LoadedConfig::resolve_output_dir)
                .unwrap_or_else(|| PathBuf::from("."))
        });

        let name = args.name.clone().unwrap_or_else(|| {
            loaded_config
                .map(|lc| lc.config.name.clone())
                .unwrap_or_else(|| DEFAULT_NAME.to_string())
        });

        let padding = args.padding.unwrap_or_else(|| {
            loaded_config
                .map(|lc| lc.config.padding)
                .unwrap_or(DEFAULT_PADDING)
        });

        let pivot = args.pivot.unwrap_or_else(|| {
            loaded_config
                .map(|lc| PivotMode::from_token(&lc.config.pivot))
                .unwrap_or_default()
        });

        // Compress: CLI option overrides config
        let compress = if args.compress.is_some() {
            args.compress
        } else if let Some(lc) = loaded_config {
            lc.compression()?
        } else {
            None
        };

        Ok(Self {
            input,
            output,
            name,
            padding,
            pivot,
            compress,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShelfConfig;
    use clap::Parser;
    use std::path::Path;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("shelfpack").chain(argv.iter().copied())).unwrap()
    }

    fn loaded(config: ShelfConfig) -> LoadedConfig {
        LoadedConfig {
            config,
            config_dir: PathBuf::from("/project"),
        }
    }

    fn sample_config() -> ShelfConfig {
        ShelfConfig {
            input: Some("sprites".to_string()),
            output_dir: "build".to_string(),
            name: "hero".to_string(),
            padding: 7,
            pivot: "BC".to_string(),
            compress: None,
            ..ShelfConfig::default()
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let merged = MergedConfig::merge(&args(&["sprites"]), None).unwrap();

        assert_eq!(merged.input, PathBuf::from("sprites"));
        assert_eq!(merged.output, PathBuf::from("."));
        assert_eq!(merged.name, "atlas");
        assert_eq!(merged.padding, 2);
        assert_eq!(merged.pivot, PivotMode::Center);
        assert_eq!(merged.compress, None);
        assert!(!merged.verbose);
    }

    #[test]
    fn test_config_fills_unset_cli_fields() {
        let lc = loaded(sample_config());
        let merged = MergedConfig::merge(&args(&["-c", "/project/atlas.json"]), Some(&lc)).unwrap();

        assert_eq!(merged.input, Path::new("/project").join("sprites"));
        assert_eq!(merged.output, Path::new("/project").join("build"));
        assert_eq!(merged.name, "hero");
        assert_eq!(merged.padding, 7);
        assert_eq!(merged.pivot, PivotMode::BottomCenter);
    }

    #[test]
    fn test_cli_overrides_config() {
        let lc = loaded(ShelfConfig {
            compress: Some(crate::config::CompressConfig::Level(1)),
            ..sample_config()
        });
        let cli = args(&[
            "other", "-o", "cli", "--padding", "0", "--pivot", "tl", "-d", "out", "--compress",
            "max",
        ]);

        let merged = MergedConfig::merge(&cli, Some(&lc)).unwrap();

        assert_eq!(merged.input, PathBuf::from("other"));
        assert_eq!(merged.output, PathBuf::from("out"));
        assert_eq!(merged.name, "cli");
        assert_eq!(merged.padding, 0);
        assert_eq!(merged.pivot, PivotMode::TopLeft);
        assert_eq!(merged.compress, Some(CompressionLevel::Max));
    }

    #[test]
    fn test_config_defaults_resolve_against_config_dir() {
        let lc = loaded(ShelfConfig {
            input: Some("sprites".to_string()),
            ..ShelfConfig::default()
        });

        let merged = MergedConfig::merge(&args(&["-c", "atlas.json"]), Some(&lc)).unwrap();

        assert_eq!(merged.output, Path::new("/project").join("."));
        assert_eq!(merged.name, "atlas");
        assert_eq!(merged.padding, 2);
        assert_eq!(merged.pivot, PivotMode::Center);
    }

    #[test]
    fn test_unknown_config_pivot_falls_back_to_center() {
        let lc = loaded(ShelfConfig {
            pivot: "upper-left".to_string(),
            ..sample_config()
        });

        let merged = MergedConfig::merge(&args(&["-c", "atlas.json"]), Some(&lc)).unwrap();

        assert_eq!(merged.pivot, PivotMode::Center);
    }

    #[test]
    fn test_missing_input_everywhere_is_an_error() {
        let lc = loaded(ShelfConfig::default());

        assert!(MergedConfig::merge(&args(&["-c", "atlas.json"]), Some(&lc)).is_err());
    }

    #[test]
    fn test_from_args_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.json");
        std::fs::write(&path, r#"{ "input": "art", "padding": 5, "pivot": "tl" }"#).unwrap();

        let merged = MergedConfig::from_args(&args(&["-c", path.to_str().unwrap()])).unwrap();

        assert_eq!(merged.input, dir.path().join("art"));
        assert_eq!(merged.padding, 5);
        assert_eq!(merged.pivot, PivotMode::TopLeft);
    }
}
