//! svg2css - convert a folder of SVG files into a single CSS file with
//! inline background-images.

mod cli;
mod config;
mod convert;
mod css;
mod logger;
mod svg;

use anyhow::{Context, Result};
use cli::Cli;
use config::ConvertConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    cli::apply_color(cli.color);
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ConvertConfig::load(cli).context("failed to load config")?;
    debug!("config"; "{:?}", config);

    let summary = convert::run(&config)?;
    let warnings = match summary.warnings.len() {
        0 => String::new(),
        1 => " (1 warning)".to_owned(),
        n => format!(" ({n} warnings)"),
    };
    log!(
        "done";
        "{} file{} -> {}{}",
        summary.files,
        if summary.files == 1 { "" } else { "s" },
        summary.destination.display(),
        warnings
    );
    Ok(())
}
