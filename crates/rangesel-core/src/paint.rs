//! Drawing surface abstraction and the widget palette.

use kurbo::{BezPath, Rect};
use peniko::Color;

/// Minimal 2D surface the widget paints onto.
///
/// Implementations can target Vello, a software rasterizer, or a recorder.
pub trait Painter {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a closed path with the non-zero rule.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke a path with the given line width.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color);
}

/// Colors and line width used when drawing a selection.
#[derive(Debug, Clone, Copy)]
pub struct SelectionStyle {
    /// Translucent body fill.
    pub fill: Color,
    /// Boundary line color.
    pub border: Color,
    /// Handle glyph color.
    pub handle: Color,
    /// Boundary line width.
    pub border_width: f64,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba8(0xCD, 0xE4, 0xF8, 0x80),
            border: Color::from_rgba8(0x91, 0xC4, 0xEF, 0xFF),
            handle: Color::from_rgba8(0x69, 0x68, 0x68, 0xFF),
            border_width: 1.0,
        }
    }
}

/// A recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillPath { path: BezPath, color: Color },
    StrokePath { path: BezPath, width: f64, color: Color },
}

/// Painter that records commands instead of rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            width,
            color,
        });
    }
}
