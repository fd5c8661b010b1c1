//! Window, surface and frame loop.
//!
//! The component works in physical pixels, the units winit reports cursor
//! positions and surface sizes in. Handle dimensions from the config are
//! logical and get multiplied by the window's scale factor.

use crate::config::{AppConfig, AppError};
use kurbo::{Point, Size};
use peniko::Color;
use rangesel_core::{
    shared, KeyEvent, MouseButton, PointerEvent, SelectionChanged, SelectionComponent, SelectionStyle,
    SharedRange, ESCAPE,
};
use rangesel_render::{RenderContext, Renderer, VelloRenderer};
use std::rc::Rc;
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Runtime state that exists once the window and surface are up.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    vello_renderer: vello::Renderer,
    selection_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,
    component: SelectionComponent,
    /// Last cursor position in physical pixels.
    cursor: Point,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    background: Color,
    style: SelectionStyle,
    selection: SharedRange,
    reference: SharedRange,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// First fatal error raised inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create an application from a validated configuration.
    pub fn with_config(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let background = config.background_color()?;
        let style = config.style()?;
        let reference = shared(config.reference());
        Ok(Self {
            config,
            background,
            style,
            selection: shared(rangesel_core::Range::empty()),
            reference,
            state: None,
            render_cx: None,
            error: None,
        })
    }

    /// Shared handle to the selection edited by the widget.
    pub fn selection(&self) -> &SharedRange {
        &self.selection
    }

    /// Run the application until the window closes.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = Self::with_config(config)?;
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn build_component(&self, size: Size, scale_factor: f64) -> SelectionComponent {
        let mut component = SelectionComponent::with_config(
            Rc::clone(&self.selection),
            Rc::clone(&self.reference),
            self.config.selection.scaled(scale_factor),
        );
        component.set_size(size);

        let selection = Rc::clone(&self.selection);
        component.add_listener(move |_: &SelectionChanged| {
            let range = *selection.borrow();
            if range.is_empty() {
                log::info!("Selection cleared");
            } else {
                log::info!("Selection: [{:.3}, {:.3}]", range.min(), range.max());
            }
        });
        component
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(vello::util::RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| AppError::Renderer(e.to_string()))?;
        // Vello renders to Rgba8Unorm, the surface may want another format
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let component =
            self.build_component(Size::new(width as f64, height as f64), window.scale_factor());

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            selection_renderer: VelloRenderer::new(),
            texture_blitter,
            component,
            cursor: Point::ZERO,
        });

        log::info!("rangesel initialized - {}x{}", width, height);
        log::info!("Drag to select, drag edges to resize, drag inside to move, Escape to clear");
        window.request_redraw();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn render(&mut self) -> Result<(), AppError> {
        let Some(state) = &mut self.state else {
            return Ok(());
        };
        let Some(render_cx) = self.render_cx.as_ref() else {
            return Ok(());
        };

        let width = state.surface.config.width;
        let height = state.surface.config.height;
        let size = Size::new(width as f64, height as f64);

        state.component.update_state();
        let ctx = RenderContext::new(&state.component, size)
            .with_background(self.background)
            .with_style(self.style);
        state.selection_renderer.build_scene(&ctx);
        let base_color = state.selection_renderer.background_color(&ctx);

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return Ok(());
            }
        };

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a storage-bindable Rgba8Unorm target.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        state
            .vello_renderer
            .render_to_texture(
                device,
                queue,
                state.selection_renderer.scene(),
                &render_texture_view,
                &params,
            )
            .map_err(|e| AppError::Renderer(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("blit encoder"),
        });
        state
            .texture_blitter
            .copy(device, &mut encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(encoder.finish()));

        surface_texture.present();
        state.window.request_redraw();
        Ok(())
    }
}

/// Map a winit button to a widget button.
fn translate_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Logical key name understood by the widget.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Escape) => Some(ESCAPE),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = self.render() {
                self.fail(event_loop, e);
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                state
                    .component
                    .set_size(Size::new(size.width as f64, size.height as f64));
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Scale factor changed to {}", scale_factor);
                state
                    .component
                    .set_config(self.config.selection.scaled(scale_factor));
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.cursor = Point::new(position.x, position.y);
                state.component.handle_pointer_event(&PointerEvent::Move {
                    position: state.cursor,
                });
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(button) = translate_button(button) else {
                    return;
                };
                let position = state.cursor;
                let event = match btn_state {
                    ElementState::Pressed => PointerEvent::Down { position, button },
                    ElementState::Released => PointerEvent::Up { position, button },
                };
                state.component.handle_pointer_event(&event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = key_name(&event.logical_key) else {
                    return;
                };
                let key_event = match event.state {
                    ElementState::Pressed => KeyEvent::Pressed(key.to_string()),
                    ElementState::Released => KeyEvent::Released(key.to_string()),
                };
                if state.component.handle_key_event(&key_event).is_consumed() {
                    log::debug!("Key {} consumed by selection", key);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_button() {
        assert_eq!(
            translate_button(winit::event::MouseButton::Left),
            Some(MouseButton::Left)
        );
        assert_eq!(
            translate_button(winit::event::MouseButton::Middle),
            Some(MouseButton::Middle)
        );
        assert_eq!(translate_button(winit::event::MouseButton::Back), None);
    }

    #[test]
    fn test_key_name() {
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)), Some(ESCAPE));
        assert_eq!(key_name(&Key::Character("a".into())), Some("a"));
        assert_eq!(key_name(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn test_with_config_starts_empty() {
        let app = App::with_config(AppConfig::default()).unwrap();
        assert!(app.selection().borrow().is_empty());
        assert_eq!(*app.reference.borrow(), rangesel_core::Range::new(0.0, 1000.0));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = AppConfig {
            reference_min: 1.0,
            reference_max: 0.0,
            ..AppConfig::default()
        };
        assert!(App::with_config(config).is_err());
    }

    #[test]
    fn test_built_component_logs_and_tracks_selection() {
        let app = App::with_config(AppConfig::default()).unwrap();
        let mut component = app.build_component(Size::new(1000.0, 100.0), 1.0);

        component.pointer_pressed(100.0);
        component.pointer_dragged(300.0);
        component.pointer_released();

        let selection = *app.selection().borrow();
        assert!((selection.min() - 100.0).abs() < 1e-9);
        assert!((selection.max() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_built_component_scales_handles() {
        let app = App::with_config(AppConfig::default()).unwrap();
        let component = app.build_component(Size::new(1000.0, 100.0), 2.0);
        assert!((component.config().handle_width - 10.0).abs() < f64::EPSILON);
        assert!((component.config().handle_height - 80.0).abs() < f64::EPSILON);
    }
}
