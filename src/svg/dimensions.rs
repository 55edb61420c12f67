//! Width/height extraction from the SVG root element.

use super::markup::RootElement;

/// Raw width and height of an SVG document.
///
/// Values are kept verbatim, so unit suffixes like `px` or `em` survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub width: String,
    pub height: String,
}

impl Dimensions {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Value used for a missing attribute when only the other one is set.
const MISSING: &str = "0";

/// Extract dimensions from the root element.
///
/// # Rules
/// 1. The root must be an `svg` element (see [`RootElement::is_svg_root`])
/// 2. If `width` and `height` are both absent, empty or `0`, use the 3rd and 4th
///    `viewBox` tokens (`min-x min-y width height`)
/// 3. Otherwise return both attributes verbatim, `0` for a missing one
///
/// # Returns
/// `None` when the root is not an svg element, or when falling back to a
/// `viewBox` that is missing or has fewer than 4 tokens.
pub fn extract_dimensions(root: &RootElement) -> Option<Dimensions> {
    if !root.is_svg_root() {
        return None;
    }

    let width = present(root.attr("width"));
    let height = present(root.attr("height"));

    if width.is_none() && height.is_none() {
        return from_view_box(root.attr("viewBox")?);
    }

    Some(Dimensions::new(
        width.unwrap_or(MISSING),
        height.unwrap_or(MISSING),
    ))
}

/// Treat empty and zero attribute values like absent ones.
#[inline]
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != MISSING)
}

fn from_view_box(view_box: &str) -> Option<Dimensions> {
    let tokens: Vec<&str> = view_box.split_whitespace().collect();
    match tokens.as_slice() {
        [_, _, width, height, ..] => Some(Dimensions::new(*width, *height)),
        _ => None,
    }
}
