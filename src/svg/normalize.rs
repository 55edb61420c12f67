//! Content normalization.
//!
//! Turns raw SVG markup into a single line before it is base64 encoded.
//! The steps run in a fixed order: comments, then line breaks, then tabs.

use regex::Regex;
use std::sync::LazyLock;

/// XML comments, non-greedy, spanning lines.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Line breaks (`\n` and `\r`).
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r]").unwrap());

/// A tab pair or a single tab. Longer runs are matched pairwise, so three
/// tabs become two spaces.
static TAB_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t\t|\t").unwrap());

/// Normalize raw SVG text into a single-line string.
///
/// # Process
/// 1. Remove `<!-- ... -->` comments (multi-line comments as one unit)
/// 2. Remove all `\n` and `\r` characters
/// 3. Replace every `\t\t` or `\t` with one space
pub fn normalize(raw: &str) -> String {
    let without_comments = COMMENT.replace_all(raw, "");
    let single_line = LINE_BREAK.replace_all(&without_comments, "");
    TAB_RUN.replace_all(&single_line, " ").into_owned()
}
