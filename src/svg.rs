//! Markup generation for resolved primitives
//!
//! Two forms are produced: bare `<line>` tags, one per segment, and a full
//! `<svg>` document built with the facet-svg DOM.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{SVG_NS, Svg, SvgNode, facet_xml};

use crate::primitive::{Primitive, Render, bounds_of};

/// Styling applied to emitted line elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgOptions {
    /// Value of the `stroke` attribute
    pub stroke: String,
    /// Value of the `stroke-width` attribute, omitted when `None`
    pub stroke_width: Option<u32>,
    /// Space added around the geometry in the `viewBox`
    pub margin: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: None,
            margin: 0,
        }
    }
}

/// One `<line .../>` tag per line segment, newline separated.
pub fn render_tags(primitives: &[Primitive]) -> String {
    primitives
        .iter()
        .filter(|p| p.is_visible())
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the document tree for `primitives`.
///
/// The viewBox spans every segment end point plus the margin. Without any
/// segment there is nothing to frame and it is left out.
pub fn build_document(primitives: &[Primitive], options: &SvgOptions) -> Svg {
    let children: Vec<SvgNode> = primitives
        .iter()
        .filter_map(|p| p.to_svg_node(options))
        .collect();

    let view_box = match bounds_of(primitives) {
        Some(bounds) => {
            let margin = options.margin as i64;
            Some(format!(
                "{} {} {} {}",
                bounds.min.x as i64 - margin,
                bounds.min.y as i64 - margin,
                bounds.width() + 2 * margin,
                bounds.height() + 2 * margin,
            ))
        }
        None => {
            crate::log::warn!(
                primitives = primitives.len(),
                "path has no line segments, emitting an empty document"
            );
            None
        }
    };

    crate::log::debug!(?view_box, lines = children.len(), "built svg document");

    Svg {
        xmlns: Some(SVG_NS.to_string()),
        width: None,
        height: None,
        view_box,
        children,
    }
}

/// Serialize `primitives` as a standalone SVG document.
pub fn render_document(
    primitives: &[Primitive],
    options: &SvgOptions,
) -> Result<String, miette::Report> {
    let svg = build_document(primitives, options);

    // Coordinates are integral; print them without a fractional part.
    fn format_coordinate(
        value: f64,
        writer: &mut dyn std::io::Write,
    ) -> Result<(), std::io::Error> {
        write!(writer, "{}", value as i64)
    }

    let options_ser = SerializeOptions {
        float_formatter: Some(format_coordinate),
        ..Default::default()
    };
    facet_xml::to_string_with_options(&svg, &options_ser)
        .map_err(|e| miette::miette!("XML serialization error: {}", e))
}
