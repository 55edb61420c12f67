//! Conversion error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of a conversion run.
///
/// Every variant ends the run; there is no per-file recovery.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot list source folder `{0}`")]
    ListDir(PathBuf, #[source] io::Error),

    #[error("cannot read `{0}`")]
    ReadFile(PathBuf, #[source] io::Error),

    #[error("cannot write `{0}`")]
    WriteOutput(PathBuf, #[source] io::Error),
}
