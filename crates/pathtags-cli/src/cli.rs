// command-line interface for pathtags

use clap::{Parser, ValueEnum};
use pathtags::SvgOptions;

/// What to print for each converted path
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One `<line>` tag per segment
    Tags,
    /// A standalone SVG document
    Svg,
    /// The parsed command list
    Commands,
    /// The resolved primitives, cursor moves included
    Primitives,
}

#[derive(Parser, Debug)]
#[command(
    name = "pathtags",
    version,
    about = "Convert SVG path data (M, m, L, l) into line tags"
)]
pub struct Args {
    /// Path strings to convert. Read one path per line from stdin when omitted.
    pub paths: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tags)]
    pub format: Format,

    /// Stroke colour for SVG output
    #[arg(long, default_value = "black", value_name = "color")]
    pub stroke: String,

    /// Stroke width for SVG output
    #[arg(long, value_name = "width")]
    pub stroke_width: Option<u32>,

    /// Space around the drawing in the SVG viewBox
    #[arg(long, default_value_t = 0, value_name = "units")]
    pub margin: u32,

    /// Log every parsed and resolved command (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
            margin: self.margin,
        }
    }
}
