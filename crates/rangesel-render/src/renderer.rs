//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use rangesel_core::{SelectionComponent, SelectionStyle};

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The component to render. The host calls `update_state` on it first.
    pub component: &'a SelectionComponent,
    /// Size of the component's region in physical pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Selection palette.
    pub style: SelectionStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(component: &'a SelectionComponent, viewport_size: Size) -> Self {
        Self {
            component,
            viewport_size,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            style: SelectionStyle::default(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection palette.
    pub fn with_style(mut self, style: SelectionStyle) -> Self {
        self.style = style;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext<'_>);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext<'_>) -> Color {
        ctx.background_color
    }
}
