//! Facet-derived types for the SVG elements pathtags emits.
//!
//! Only the document root and `<line>` are modelled; serialization goes
//! through `facet-xml`.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::{Line, SVG_NS, Svg, SvgNode};
//!
//! let svg = Svg {
//!     xmlns: Some(SVG_NS.to_string()),
//!     view_box: Some("0 0 10 10".to_string()),
//!     children: vec![SvgNode::Line(Line {
//!         x1: Some(0.0),
//!         y1: Some(0.0),
//!         x2: Some(10.0),
//!         y2: Some(10.0),
//!         stroke: Some("black".to_string()),
//!         stroke_width: None,
//!     })],
//!     ..Default::default()
//! };
//! assert_eq!(svg.children.len(), 1);
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node pathtags produces
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "line")]
    Line(Line),
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

// Re-export facet_xml for convenience
pub use facet_xml;
