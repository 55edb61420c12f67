//! SVG text handling.
//!
//! # Modules
//!
//! - [`normalize`]: Comment, line break and tab cleanup before encoding
//! - [`markup`]: Root element lookup behind the [`MarkupParser`] trait
//! - [`dimensions`]: Width/height extraction from the root element
//!
//! # Architecture
//!
//! ```text
//! raw SVG text
//!         │
//!         ▼
//!    ┌───────────┐
//!    │ normalize │ ──► single-line content (encoded by css::css_block)
//!    └─────┬─────┘
//!          │ (--write-dimensions)
//!          ▼
//!    ┌────────┐      ┌────────────┐
//!    │ markup │ ───► │ dimensions │ ──► Option<Dimensions>
//!    └────────┘      └────────────┘
//! ```

pub mod dimensions;
pub mod markup;
pub mod normalize;

pub use dimensions::{Dimensions, extract_dimensions};
pub use markup::{MarkupParser, XmlRootParser};
pub use normalize::normalize;
