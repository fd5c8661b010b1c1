//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::{Color, Fill};
use rangesel_core::Painter;
use vello::Scene;

/// [`Painter`] that appends to a Vello scene in component pixels.
pub struct ScenePainter<'a> {
    scene: &'a mut Scene,
}

impl<'a> ScenePainter<'a> {
    /// Paint into `scene`.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

impl Painter for ScenePainter<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        self.scene.stroke(&Stroke::new(width), Affine::IDENTITY, color, None, path);
    }
}

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a renderer with an empty scene.
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// The scene built by the last [`Renderer::build_scene`] call.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) {
        self.scene.reset();
        let mut painter = ScenePainter::new(&mut self.scene);
        ctx.component.draw(&mut painter, ctx.viewport_size, &ctx.style);
        log::trace!("Built selection scene for {:?}", ctx.component.geometry());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use rangesel_core::{shared, Range, SelectionComponent, SelectionStyle};

    fn component(selection: Range) -> SelectionComponent {
        let mut component = SelectionComponent::new(shared(selection), shared(Range::new(0.0, 1000.0)));
        component.set_size(Size::new(1000.0, 100.0));
        component.update_state();
        component
    }

    #[test]
    fn test_build_scene_with_selection() {
        let component = component(Range::new(100.0, 300.0));
        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&RenderContext::new(&component, component.size()));
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_empty_selection() {
        let component = component(Range::empty());
        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&RenderContext::new(&component, component.size()));
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_resets_previous_frame() {
        let mut renderer = VelloRenderer::new();
        let selected = component(Range::new(100.0, 300.0));
        renderer.build_scene(&RenderContext::new(&selected, selected.size()));
        assert!(!renderer.scene().encoding().is_empty());

        let cleared = component(Range::empty());
        renderer.build_scene(&RenderContext::new(&cleared, cleared.size()));
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_background_color_from_context() {
        let component = component(Range::empty());
        let renderer = VelloRenderer::new();
        let ctx = RenderContext::new(&component, component.size()).with_background(Color::BLACK);
        assert_eq!(renderer.background_color(&ctx).to_rgba8(), Color::BLACK.to_rgba8());
    }

    #[test]
    fn test_style_from_context() {
        let component = component(Range::new(100.0, 300.0));
        let style = SelectionStyle {
            handle: Color::BLACK,
            ..SelectionStyle::default()
        };
        let ctx = RenderContext::new(&component, component.size()).with_style(style);
        assert_eq!(ctx.style.handle.to_rgba8(), Color::BLACK.to_rgba8());

        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }
}
