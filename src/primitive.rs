//! Resolved drawing primitives
//!
//! Each primitive is the result of replaying one command against the cursor.
//! Coordinates here are always absolute.

use std::fmt;

use enum_dispatch::enum_dispatch;
use facet_svg::{Line, SvgNode};
use glam::IVec2;

use crate::svg::SvgOptions;

/// Common behavior for all resolved primitives
#[enum_dispatch]
pub trait Render {
    /// Cursor position once this primitive has been drawn
    fn end(&self) -> IVec2;

    /// Whether the primitive produces visible output
    fn is_visible(&self) -> bool;

    /// Grow `bounds` to cover the visible geometry
    fn expand_bounds(&self, bounds: &mut Option<Bounds>);

    /// Markup element for this primitive, `None` when nothing is drawn
    fn to_svg_node(&self, options: &SvgOptions) -> Option<SvgNode>;

    /// Short human-readable description, e.g. `line (0, 0) -> (3, 4)`
    fn describe(&self) -> String;
}

/// Cursor relocation. Draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorMove {
    pub to: IVec2,
}

impl CursorMove {
    pub fn new(to: IVec2) -> Self {
        Self { to }
    }
}

impl Render for CursorMove {
    fn end(&self) -> IVec2 {
        self.to
    }

    fn is_visible(&self) -> bool {
        false
    }

    fn expand_bounds(&self, _bounds: &mut Option<Bounds>) {}

    fn to_svg_node(&self, _options: &SvgOptions) -> Option<SvgNode> {
        None
    }

    fn describe(&self) -> String {
        format!("move ({}, {})", self.to.x, self.to.y)
    }
}

/// A visible segment between two absolute points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub origin: IVec2,
    pub destination: IVec2,
}

impl LineSegment {
    pub fn new(origin: IVec2, destination: IVec2) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl Render for LineSegment {
    fn end(&self) -> IVec2 {
        self.destination
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn expand_bounds(&self, bounds: &mut Option<Bounds>) {
        for point in [self.origin, self.destination] {
            match bounds {
                Some(b) => b.include(point),
                None => *bounds = Some(Bounds::at(point)),
            }
        }
    }

    fn to_svg_node(&self, options: &SvgOptions) -> Option<SvgNode> {
        Some(SvgNode::Line(Line {
            x1: Some(self.origin.x as f64),
            y1: Some(self.origin.y as f64),
            x2: Some(self.destination.x as f64),
            y2: Some(self.destination.y as f64),
            stroke: Some(options.stroke.clone()),
            stroke_width: options.stroke_width.map(|w| w.to_string()),
        }))
    }

    fn describe(&self) -> String {
        format!(
            "line ({}, {}) -> ({}, {})",
            self.origin.x, self.origin.y, self.destination.x, self.destination.y
        )
    }
}

/// A resolved primitive, one per command
#[enum_dispatch(Render)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    CursorMove,
    LineSegment,
}

impl Primitive {
    pub fn as_line(&self) -> Option<&LineSegment> {
        match self {
            Primitive::LineSegment(line) => Some(line),
            Primitive::CursorMove(_) => None,
        }
    }
}

// Tag form: a `<line>` element for segments, nothing for cursor moves.

impl fmt::Display for CursorMove {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.origin.x, self.origin.y, self.destination.x, self.destination.y
        )
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::CursorMove(m) => fmt::Display::fmt(m, f),
            Primitive::LineSegment(l) => fmt::Display::fmt(l, f),
        }
    }
}

/// Axis-aligned bounding box over integer points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl Bounds {
    /// Zero-sized box at `point`
    pub fn at(point: IVec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn include(&mut self, point: IVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    // Widened so a box spanning the whole i32 range still fits.
    pub fn width(&self) -> i64 {
        self.max.x as i64 - self.min.x as i64
    }

    pub fn height(&self) -> i64 {
        self.max.y as i64 - self.min.y as i64
    }
}

/// Bounding box of every visible primitive, `None` if nothing is drawn
pub fn bounds_of(primitives: &[Primitive]) -> Option<Bounds> {
    let mut bounds = None;
    for primitive in primitives {
        primitive.expand_bounds(&mut bounds);
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    #[test]
    fn line_renders_four_attributes() {
        let line = LineSegment::new(ivec2(111, 222), ivec2(333, 444));
        insta::assert_snapshot!(line.to_string(), @r#"<line x1="111" y1="222" x2="333" y2="444"/>"#);
    }

    #[test]
    fn cursor_move_renders_nothing() {
        let primitive = Primitive::from(CursorMove::new(ivec2(5, 6)));
        assert_eq!(primitive.to_string(), "");
        assert!(!primitive.is_visible());
        assert_eq!(primitive.end(), ivec2(5, 6));
        assert!(primitive.to_svg_node(&SvgOptions::default()).is_none());
    }

    #[test]
    fn dispatch_reaches_segments() {
        let primitive = Primitive::from(LineSegment::new(ivec2(0, 0), ivec2(3, -4)));
        assert!(primitive.is_visible());
        assert_eq!(primitive.end(), ivec2(3, -4));
        assert_eq!(primitive.describe(), "line (0, 0) -> (3, -4)");
        assert!(primitive.as_line().is_some());
    }

    #[test]
    fn segment_node_carries_stroke() {
        let options = SvgOptions {
            stroke: "red".to_string(),
            stroke_width: Some(2),
            ..SvgOptions::default()
        };
        let node = LineSegment::new(ivec2(1, 2), ivec2(3, 4))
            .to_svg_node(&options)
            .unwrap();
        let SvgNode::Line(line) = node;
        assert_eq!(
            (line.x1, line.y1, line.x2, line.y2),
            (Some(1.0), Some(2.0), Some(3.0), Some(4.0))
        );
        assert_eq!(line.stroke.as_deref(), Some("red"));
        assert_eq!(line.stroke_width.as_deref(), Some("2"));
    }

    #[test]
    fn bounds_ignore_cursor_moves() {
        let primitives = [
            Primitive::from(CursorMove::new(ivec2(-100, -100))),
            Primitive::from(LineSegment::new(ivec2(10, 20), ivec2(-5, 40))),
            Primitive::from(LineSegment::new(ivec2(-5, 40), ivec2(0, 0))),
        ];
        let bounds = bounds_of(&primitives).unwrap();
        assert_eq!(bounds.min, ivec2(-5, 0));
        assert_eq!(bounds.max, ivec2(10, 40));
        assert_eq!((bounds.width(), bounds.height()), (15, 40));
    }

    #[test]
    fn no_bounds_without_lines() {
        assert_eq!(bounds_of(&[]), None);
        assert_eq!(bounds_of(&[Primitive::from(CursorMove::new(ivec2(1, 1)))]), None);
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let mut bounds = Bounds::at(ivec2(i32::MIN, i32::MIN));
        bounds.include(ivec2(i32::MAX, i32::MAX));
        assert_eq!(bounds.width(), u32::MAX as i64);
    }
}
