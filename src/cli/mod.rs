//! Command-line interface module.

mod args;

pub use args::Cli;

use clap::{ColorChoice, Parser, error::ErrorKind};
use std::process::ExitCode;

/// Parse process arguments.
///
/// On failure the clap message is printed and the exit code to use is
/// returned: `0` for `--help` / `--version`, `1` for everything else,
/// including a bare invocation without arguments.
pub fn parse() -> Result<Cli, ExitCode> {
    Cli::try_parse().map_err(|err| {
        err.print().ok();
        ExitCode::from(exit_status_for(err.kind()))
    })
}

fn exit_status_for(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Set global color override based on CLI option
pub fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_status_for(ErrorKind::DisplayHelp), 0);
        assert_eq!(exit_status_for(ErrorKind::DisplayVersion), 0);
        assert_eq!(
            exit_status_for(ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand),
            1
        );
        assert_eq!(exit_status_for(ErrorKind::MissingRequiredArgument), 1);
        assert_eq!(exit_status_for(ErrorKind::UnknownArgument), 1);
    }
}
