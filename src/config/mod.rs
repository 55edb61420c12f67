//! Run configuration.
//!
//! Values come from two places, CLI flags winning over the file:
//!
//! | Source             | Fields                                        |
//! |--------------------|-----------------------------------------------|
//! | CLI positionals    | source folder, destination file               |
//! | `svg2css.toml`     | `[output] prefix`, `[output] write_dimensions` |
//! | CLI options        | `--prefix`, `--write-dimensions`              |
//!
//! The merged result is an immutable [`ConvertConfig`] handed to
//! [`crate::convert::run`].

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, debug, log};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "svg2css.toml";

// ============================================================================
// file configuration
// ============================================================================

/// Structure of `svg2css.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: OutputSection,
}

/// `[output]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Prepended to every selector and variable name.
    pub prefix: String,
    /// Emit `$name-width` / `$name-height` lines.
    pub write_dimensions: bool,
}

impl FileConfig {
    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), fields.join(", "));
    }
}

// ============================================================================
// run configuration
// ============================================================================

/// Immutable configuration of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Folder listed for `.svg` files.
    pub source_dir: PathBuf,
    /// Stylesheet written at the end of the run.
    pub destination: PathBuf,
    /// Selector prefix, empty for none.
    pub prefix: String,
    /// Emit width/height variables per file.
    pub write_dimensions: bool,
}

impl ConvertConfig {
    pub fn new(source_dir: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination: destination.into(),
            prefix: String::new(),
            write_dimensions: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_dimensions(mut self, write_dimensions: bool) -> Self {
        self.write_dimensions = write_dimensions;
        self
    }

    /// Load the config file (if any) and apply CLI options on top.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                FileConfig::from_path(path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    debug!("config"; "loading {}", path.display());
                    FileConfig::from_path(path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        Ok(Self::merge(cli, file))
    }

    /// CLI flags override file values, including `--write-dimensions=false`.
    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let prefix = cli.prefix.clone().unwrap_or(file.output.prefix);
        let write_dimensions = cli
            .write_dimensions
            .unwrap_or(file.output.write_dimensions);

        Self::new(&cli.source, &cli.destination)
            .with_prefix(prefix)
            .with_dimensions(write_dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<FileConfig, ConfigError> {
        FileConfig::parse_with_ignored(content).map(|(config, _)| config)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("svg2css").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_file_config() {
        let config = parse(
            r#"
            [output]
            prefix = "ic-"
            write_dimensions = true
            "#,
        )
        .unwrap();
        assert_eq!(config.output.prefix, "ic-");
        assert!(config.output.write_dimensions);
    }

    #[test]
    fn test_empty_file_config() {
        let config = parse("").unwrap();
        assert_eq!(config.output.prefix, "");
        assert!(!config.output.write_dimensions);
    }

    #[test]
    fn test_invalid_file_config() {
        let err = parse("[output]\nwrite_dimensions = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) = FileConfig::parse_with_ignored(
            r#"
            [output]
            prefix = "x-"
            minify = true

            [input]
            extension = ".SVG"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.prefix, "x-");
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|p| p == "output.minify"));
        assert!(ignored.iter().any(|p| p.starts_with("input")));
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = FileConfig::from_path(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io(path, _) if path == missing));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[output]\nprefix = \"file-\"\nwrite_dimensions = true\n").unwrap();

        let cli = cli(&["icons", "out.css", "--config", path.to_str().unwrap()]);
        let config = ConvertConfig::load(&cli).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("icons"));
        assert_eq!(config.destination, PathBuf::from("out.css"));
        assert_eq!(config.prefix, "file-");
        assert!(config.write_dimensions);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = FileConfig::default();
        file.output.prefix = "file-".into();

        let config = ConvertConfig::merge(&cli(&["src", "dst.css", "--prefix", "cli-"]), file.clone());
        assert_eq!(config.prefix, "cli-");
        assert!(!config.write_dimensions);

        let config = ConvertConfig::merge(&cli(&["src", "dst.css", "-d"]), file);
        assert_eq!(config.prefix, "file-");
        assert!(config.write_dimensions);
    }

    #[test]
    fn test_cli_can_disable_file_dimensions() {
        let mut file = FileConfig::default();
        file.output.write_dimensions = true;

        let config = ConvertConfig::merge(&cli(&["src", "dst.css"]), file.clone());
        assert!(config.write_dimensions);

        let config = ConvertConfig::merge(
            &cli(&["src", "dst.css", "--write-dimensions=false"]),
            file.clone(),
        );
        assert!(!config.write_dimensions);

        let config = ConvertConfig::merge(&cli(&["src", "dst.css", "-d=false"]), file);
        assert!(!config.write_dimensions);
    }

    #[test]
    fn test_builder() {
        let config = ConvertConfig::new("a", "b.css")
            .with_prefix("p-")
            .with_dimensions(true);
        assert_eq!(config.prefix, "p-");
        assert!(config.write_dimensions);
    }
}
