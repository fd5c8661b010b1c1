//! Per-frame screen geometry derived from the selection.

use crate::config::SelectionConfig;
use crate::mapper::CoordinateMapper;
use crate::range::Range;
use kurbo::{BezPath, Point, Rect, Size};

/// Selection edges as fractions of the widget width.
///
/// Recomputed every frame; never the source of truth for the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionGeometry {
    /// Fraction of the start edge (not clamped to `[0, 1]`).
    pub start: f64,
    /// Fraction of the end edge (not clamped to `[0, 1]`).
    pub end: f64,
    /// Whether the selection is empty and nothing should be drawn.
    pub empty: bool,
}

impl Default for SelectionGeometry {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl SelectionGeometry {
    /// Geometry of an empty selection.
    pub const EMPTY: Self = Self {
        start: 0.0,
        end: 0.0,
        empty: true,
    };

    /// Project `selection` against the mapper's reference range.
    pub fn project(selection: &Range, mapper: &CoordinateMapper) -> Self {
        if selection.is_empty() {
            return Self::EMPTY;
        }
        Self {
            start: mapper.value_to_fraction(selection.min()),
            end: mapper.value_to_fraction(selection.max()),
            empty: false,
        }
    }

    /// Start edge in pixels for a widget of `width`.
    pub fn start_px(&self, width: f64) -> f64 {
        self.start * width
    }

    /// End edge in pixels for a widget of `width`.
    pub fn end_px(&self, width: f64) -> f64 {
        self.end * width
    }

    /// Filled body between the edges, full widget height.
    pub fn body_rect(&self, size: Size) -> Rect {
        Rect::new(self.start_px(size.width), 0.0, self.end_px(size.width), size.height)
    }

    /// Two vertical boundary lines, one per edge.
    pub fn border_path(&self, size: Size) -> BezPath {
        let start = self.start_px(size.width);
        let end = self.end_px(size.width);
        let mut path = BezPath::new();
        path.move_to(Point::new(start, 0.0));
        path.line_to(Point::new(start, size.height));
        path.move_to(Point::new(end, size.height));
        path.line_to(Point::new(end, 0.0));
        path
    }
}

/// Which edge a handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Start edge; the glyph extends to the left.
    Min,
    /// End edge; the glyph extends to the right.
    Max,
}

impl HandleSide {
    fn outward(self) -> f64 {
        match self {
            HandleSide::Min => -1.0,
            HandleSide::Max => 1.0,
        }
    }
}

/// Handle glyph at edge `x` for a widget of `height`.
///
/// The flat side lies on the edge, centered vertically over `handle_height`. The
/// outer side sits `handle_width` away, over the same band the hit-test uses,
/// with both outer corners rounded by quadratic curves.
pub fn handle_path(x: f64, height: f64, side: HandleSide, config: &SelectionConfig) -> BezPath {
    let w = config.handle_width;
    let up = (height - config.handle_height) * 0.5;
    let down = (height + config.handle_height) * 0.5;
    let outer = x + w * side.outward();

    let mut path = BezPath::new();
    path.move_to(Point::new(x, up));
    path.line_to(Point::new(x, down));
    path.quad_to(Point::new(outer, down), Point::new(outer, down - w));
    path.line_to(Point::new(outer, up + w));
    path.quad_to(Point::new(outer, up), Point::new(x, up));
    path.close_path();
    path
}
