//! Root element lookup.
//!
//! Dimension extraction only needs the document's root element: its
//! namespace, its name and its attributes. [`MarkupParser`] is that single
//! capability, so the extractor can be tested with hand-built elements.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// The SVG namespace URI.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Root element of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    /// Resolved namespace URI, `None` when the element is unbound.
    pub namespace: Option<String>,
    /// Local name without prefix (e.g. `svg`).
    pub name: String,
    /// Attributes as `(qualified name, raw value)` in document order.
    pub attributes: Vec<(String, String)>,
}

#[cfg(test)]
impl RootElement {
    /// Create an element bound to the SVG namespace.
    pub fn svg() -> Self {
        Self {
            namespace: Some(SVG_NAMESPACE.to_owned()),
            name: "svg".to_owned(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute (builder style).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

impl RootElement {
    /// Look up an attribute by qualified name. The first occurrence wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if this is an `svg` element in the SVG namespace.
    ///
    /// An unbound `svg` element (no `xmlns`) counts too; only a foreign
    /// namespace disqualifies it.
    pub fn is_svg_root(&self) -> bool {
        self.name == "svg" && matches!(self.namespace.as_deref(), None | Some(SVG_NAMESPACE))
    }
}

/// Given raw text, return the root element.
pub trait MarkupParser {
    /// Returns `None` when there is no root element or the markup is malformed
    /// before the root start tag ends.
    fn parse_root(&self, text: &str) -> Option<RootElement>;
}

/// [`MarkupParser`] backed by quick-xml's namespace-aware reader.
///
/// Reading stops at the first start tag, so content after the root's opening
/// tag is never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRootParser;

impl MarkupParser for XmlRootParser {
    fn parse_root(&self, text: &str) -> Option<RootElement> {
        let mut reader = NsReader::from_str(text);

        loop {
            match reader.read_resolved_event() {
                Ok((ns, Event::Start(e) | Event::Empty(e))) => {
                    let namespace = match ns {
                        ResolveResult::Bound(Namespace(uri)) => {
                            Some(String::from_utf8_lossy(uri).into_owned())
                        }
                        _ => None,
                    };
                    return Some(root_from_start(namespace, &e));
                }
                Ok((_, Event::Eof)) | Err(_) => return None,
                // Declaration, doctype, comments, processing instructions, text
                Ok(_) => {}
            }
        }
    }
}

fn root_from_start(namespace: Option<String>, e: &BytesStart<'_>) -> RootElement {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let attributes = e
        .attributes()
        .flatten()
        .map(|attr| {
            (
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                String::from_utf8_lossy(&attr.value).into_owned(),
            )
        })
        .collect();

    RootElement {
        namespace,
        name,
        attributes,
    }
}
