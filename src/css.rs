//! CSS block generation.
//!
//! Each converted file becomes one rule with an inline data URI:
//!
//! ```text
//! $ic-arrow-width: 24;          ─┐ only with --write-dimensions
//! $ic-arrow-height: 24;         ─┘
//! .ic-arrow {
//!     background-image: url(data:image/svg+xml;base64,PHN2Zy4uLg==);
//! }
//! ```
//!
//! Names are used as-is: file names with spaces or a leading digit produce
//! selectors that are not valid CSS.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

use crate::svg::Dimensions;

/// Selector (and variable) name for one converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorName(String);

impl SelectorName {
    /// `prefix + base` when the prefix is non-empty, otherwise `base`.
    pub fn new(prefix: &str, base: &str) -> Self {
        if prefix.is_empty() {
            Self(base.to_owned())
        } else {
            Self(format!("{prefix}{base}"))
        }
    }
}

impl fmt::Display for SelectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode content as standard base64 without line wrapping.
#[inline]
pub fn encode_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

/// Generate a named CSS block from (normalized) file content.
pub fn css_block(name: &SelectorName, content: &str) -> String {
    format!(
        ".{name} {{\n    background-image: url(data:image/svg+xml;base64,{});\n}}\n",
        encode_content(content)
    )
}

/// Generate the `$name-width` / `$name-height` variable lines.
pub fn dimension_vars(name: &SelectorName, dims: &Dimensions) -> String {
    format!(
        "${name}-width: {};\n${name}-height: {};\n",
        dims.width, dims.height
    )
}

/// Variable lines (if any) followed by the block.
pub fn css_entry(name: &SelectorName, content: &str, dims: Option<&Dimensions>) -> String {
    let block = css_block(name, content);
    match dims {
        Some(dims) => dimension_vars(name, dims) + &block,
        None => block,
    }
}
