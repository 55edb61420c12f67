//! Batch conversion of a folder of SVG files into one stylesheet.
//!
//! # Process
//!
//! ```text
//! source folder ──► list ──► filter (.svg) ──► per file, in listing order:
//!                                                 read
//!                                                 svg::normalize
//!                                                 svg::extract_dimensions (optional)
//!                                                 css::css_entry
//!                                          ──► join with "\n" ──► write once
//! ```
//!
//! Listing failures abort before any file is read. A file that cannot be read
//! aborts the whole run, and nothing is written.

mod error;
mod filter;

pub use error::ConvertError;
pub use filter::{SVG_EXTENSION, SourceFile, filter_files};

/// Warning for a run without any `.svg` file in the source folder.
pub const NO_INPUT_FILES: &str = "No input files found!";

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConvertConfig;
use crate::css::{SelectorName, css_entry};
use crate::svg::{Dimensions, MarkupParser, XmlRootParser, extract_dimensions, normalize};
use crate::{debug, log};

/// Generated entries, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    entries: Vec<String>,
}

impl Stylesheet {
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The output document: entries joined by newlines.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of converted files.
    pub files: usize,
    /// Where the stylesheet was written.
    pub destination: PathBuf,
    /// Non-fatal conditions reported during the run.
    pub warnings: Vec<String>,
}

/// Convert `config.source_dir` into `config.destination`.
pub fn run(config: &ConvertConfig) -> Result<ConvertSummary, ConvertError> {
    run_with(config, &XmlRootParser)
}

/// [`run`] with a custom markup parser for dimension extraction.
pub fn run_with(
    config: &ConvertConfig,
    parser: &dyn MarkupParser,
) -> Result<ConvertSummary, ConvertError> {
    let files = list_dir(&config.source_dir)?;
    let stylesheet = process(&files, config, parser)?;

    let mut warnings = Vec::new();
    if stylesheet.is_empty() {
        log!("warning"; "{}", NO_INPUT_FILES);
        warnings.push(NO_INPUT_FILES.to_owned());
    }

    log!("write"; "writing file {}", config.destination.display());
    fs::write(&config.destination, stylesheet.render())
        .map_err(|err| ConvertError::WriteOutput(config.destination.clone(), err))?;

    Ok(ConvertSummary {
        files: stylesheet.len(),
        destination: config.destination.clone(),
        warnings,
    })
}

/// List entry names of `dir` in the order the OS returns them.
///
/// Names that are not valid UTF-8 cannot become selectors and are skipped.
pub fn list_dir(dir: &Path) -> Result<Vec<String>, ConvertError> {
    let list_err = |err: std::io::Error| ConvertError::ListDir(dir.to_path_buf(), err);

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => debug!("convert"; "skipping non UTF-8 file name {:?}", name),
        }
    }

    Ok(names)
}

/// Convert already-listed file names (relative to `config.source_dir`).
///
/// Names without the `.svg` extension are ignored, which may leave the
/// stylesheet empty.
pub fn process<S: AsRef<str>>(
    files: &[S],
    config: &ConvertConfig,
    parser: &dyn MarkupParser,
) -> Result<Stylesheet, ConvertError> {
    let inputs = filter_files(files, SVG_EXTENSION);

    let mut stylesheet = Stylesheet::default();
    for name in &inputs {
        let source = SourceFile::new(&config.source_dir, name);
        log!("convert"; "processing {}", source.path.display());
        stylesheet.push(convert_file(&source, config, parser)?);
    }

    Ok(stylesheet)
}

/// Read, normalize and format one file.
fn convert_file(
    source: &SourceFile,
    config: &ConvertConfig,
    parser: &dyn MarkupParser,
) -> Result<String, ConvertError> {
    let bytes =
        fs::read(&source.path).map_err(|err| ConvertError::ReadFile(source.path.clone(), err))?;
    let content = normalize(&String::from_utf8_lossy(&bytes));
    let name = SelectorName::new(&config.prefix, &source.base_name);

    let dims = if config.write_dimensions {
        read_dimensions(&content, parser, source)
    } else {
        None
    };

    Ok(css_entry(&name, &content, dims.as_ref()))
}

fn read_dimensions(
    content: &str,
    parser: &dyn MarkupParser,
    source: &SourceFile,
) -> Option<Dimensions> {
    let dims = parser
        .parse_root(content)
        .as_ref()
        .and_then(extract_dimensions);

    if dims.is_none() {
        debug!("convert"; "no dimensions for {}", source.path.display());
    }
    dims
}
