//! Convert compact SVG path data into resolved drawing primitives.
//!
//! ```
//! let tags = pathtags::path_to_tags("M111 222 L 333 444 l555 -666").unwrap();
//! assert_eq!(
//!     tags,
//!     "<line x1=\"111\" y1=\"222\" x2=\"333\" y2=\"444\"/>\n\
//!      <line x1=\"333\" y1=\"444\" x2=\"888\" y2=\"-222\"/>"
//! );
//! ```
//!
//! The pipeline is [`parse`] (text to [`Command`]s), then [`resolve`]
//! (commands to absolute [`Primitive`]s), then one of the emitters in [`svg`].

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod log;
pub mod parse;
pub mod primitive;
pub mod resolve;
pub mod svg;

pub use ast::{Command, CommandKind, NUM_ARGS, Path};
pub use errors::{ParseError, ResolveError, SourceContext};
pub use parse::{parse, parse_named};
pub use primitive::{Bounds, CursorMove, LineSegment, Primitive, Render, bounds_of};
pub use resolve::{Resolution, resolve, resolve_from};
pub use svg::{SvgOptions, build_document, render_document, render_tags};

/// Parse and resolve path text in one step.
pub fn convert(source: &str) -> Result<Resolution, miette::Report> {
    let path = parse(source)?;
    Ok(resolve(path.commands())?)
}

/// Render path text as newline-separated `<line>` tags.
///
/// Returns the tags on success, or an error with diagnostics.
pub fn path_to_tags(source: &str) -> Result<String, miette::Report> {
    let resolution = convert(source)?;
    Ok(render_tags(&resolution.primitives))
}

/// Render path text as a standalone SVG document.
pub fn path_to_svg(source: &str, options: &SvgOptions) -> Result<String, miette::Report> {
    let resolution = convert(source)?;
    render_document(&resolution.primitives, options)
}
