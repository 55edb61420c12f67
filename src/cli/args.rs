//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Svg2Css utility
///
/// Takes a folder of SVG files and translates them into a single CSS file with
/// inline background-images. The file names are used as CSS selectors for the
/// generated rules.
#[derive(Parser, Debug, Clone)]
#[command(name = "svg2css", version, arg_required_else_help = true)]
pub struct Cli {
    /// Folder containing the .svg files
    #[arg(value_name = "SOURCE-FOLDER", value_hint = clap::ValueHint::DirPath)]
    pub source: PathBuf,

    /// CSS file to write
    #[arg(value_name = "DESTINATION-FILE", value_hint = clap::ValueHint::FilePath)]
    pub destination: PathBuf,

    /// Prefix prepended to every selector and variable name
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Emit `$name-width` / `$name-height` variables read from each SVG root
    #[arg(short = 'd', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub write_dimensions: Option<bool>,

    /// Config file path (default: svg2css.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    #[test]
    fn test_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positionals() {
        let cli = Cli::try_parse_from(["svg2css", "icons", "dist/icons.css"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("icons"));
        assert_eq!(cli.destination, PathBuf::from("dist/icons.css"));
        assert_eq!(cli.prefix, None);
        assert_eq!(cli.write_dimensions, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "svg2css",
            "--prefix",
            "ic-",
            "--write-dimensions",
            "icons",
            "out.css",
        ])
        .unwrap();
        assert_eq!(cli.prefix.as_deref(), Some("ic-"));
        assert_eq!(cli.write_dimensions, Some(true));

        let cli = Cli::try_parse_from(["svg2css", "icons", "out.css", "-p", "-x", "-d"]).unwrap();
        assert_eq!(cli.prefix.as_deref(), Some("-x"));
        assert_eq!(cli.write_dimensions, Some(true));
    }

    #[test]
    fn test_write_dimensions_value() {
        let cli = Cli::try_parse_from(["svg2css", "-d", "icons", "out.css"]).unwrap();
        assert_eq!(cli.write_dimensions, Some(true));
        assert_eq!(cli.source, PathBuf::from("icons"));

        let cli =
            Cli::try_parse_from(["svg2css", "icons", "out.css", "--write-dimensions=false"]).unwrap();
        assert_eq!(cli.write_dimensions, Some(false));
    }

    #[test]
    fn test_missing_arguments() {
        let err = Cli::try_parse_from(["svg2css"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );

        let err = Cli::try_parse_from(["svg2css", "icons"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_help_and_version() {
        let err = Cli::try_parse_from(["svg2css", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["svg2css", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
