//! Core application state and lifecycle.

use kurbo::Point;
use numtrace_core::canvas::{CanvasConfig, DrawingCanvas};
use numtrace_core::input::PointerEvent;
use numtrace_core::path::PathStyle;
use numtrace_core::shell::HostShell;
use numtrace_core::template::{TEMPLATE_COLOR, TemplateOverlay};
use numtrace_render::{RenderContext, Renderer, RendererError, VelloRenderer};
use peniko::Color;
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::haptics::PlatformHaptics;
use crate::pointer::PointerRouter;
use crate::ui::{UiAction, UiState, render_ui};

/// Environment variable naming a JSON `CanvasConfig` file (native only).
pub const CONFIG_ENV_VAR: &str = "NUMTRACE_CONFIG";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub surface_color: Color,
    pub template_color: Color,
    /// Stroke settings; the size is replaced by the layout.
    pub canvas: CanvasConfig,
    pub path_style: PathStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "NumTrace".to_string(),
            width: 1024,
            height: 768,
            background_color: Color::from_rgba8(245, 245, 245, 255),
            surface_color: Color::from_rgba8(250, 250, 250, 255),
            template_color: TEMPLATE_COLOR,
            canvas: CanvasConfig {
                stroke_color: "#2196F3".to_string(),
                ..CanvasConfig::default()
            },
            path_style: PathStyle::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the canvas section overridden from [`CONFIG_ENV_VAR`] if set.
    pub fn load() -> Self {
        let mut config = Self::default();

        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            match std::fs::read_to_string(&path) {
                Ok(json) => match CanvasConfig::from_json(&json) {
                    Ok(canvas) => {
                        log::info!("Loaded canvas config from {}", path);
                        config.canvas = canvas;
                    }
                    Err(e) => log::warn!("Ignoring {}: {}", path, e),
                },
                Err(e) => log::warn!("Failed to read {}: {}", path, e),
            }
        }

        config
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    scene_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion (needed for WebGPU/WASM)
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    shell: HostShell,
    canvas: DrawingCanvas,
    config: AppConfig,

    pointer: PointerRouter,
}

impl AppState {
    /// Recompute the layout and move the canvas to its new frame.
    fn apply_layout(&mut self) {
        let size = self.window.inner_size();
        let logical = size.to_logical::<f64>(self.window.scale_factor());
        self.shell.set_viewport(logical.width, logical.height);

        let layout = self.shell.layout();
        let frame = layout.canvas_frame();
        self.canvas.set_frame(frame.origin(), frame.size());
        self.canvas.resize(frame.size(), layout.stroke_width);
        self.ui_state.layout = layout;

        log::debug!(
            "Layout {:?}: canvas {:.0} at ({:.0}, {:.0})",
            layout.mode,
            layout.canvas_side,
            frame.x0,
            frame.y0
        );
    }

    fn to_logical(&self, position: PhysicalPosition<f64>) -> Point {
        let logical = position.to_logical::<f64>(self.window.scale_factor());
        Point::new(logical.x, logical.y)
    }

    /// Feed a routed pointer event to the canvas and redraw if the drawing changed.
    fn dispatch(&mut self, event: Option<PointerEvent>) {
        if event.is_some_and(|event| self.canvas.handle_pointer_event(event)) {
            self.window.request_redraw();
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SelectDigit(digit) => self.shell.select_digit(digit, &mut self.canvas),
            UiAction::Clear => self.shell.clear(&mut self.canvas),
        }
        self.ui_state.selected = self.shell.selected();
        self.window.request_redraw();
    }

    /// Run egui, build the scene and present one frame.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) {
        self.ui_state.layout = self.shell.layout();
        self.ui_state.selected = self.shell.selected();

        // Run egui and get any action
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let mut action = None;
        let ui_state = &self.ui_state;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, ui_state);
        });
        if let Some(action) = action {
            self.apply_action(action);
        }

        self.egui_state.handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self.egui_ctx.tessellate(egui_output.shapes, egui_output.pixels_per_point);

        // Build Vello scene
        let layout = self.shell.layout();
        let template = TemplateOverlay {
            color: self.config.template_color,
            ..TemplateOverlay::default()
        };
        let render_ctx = RenderContext::new(&self.canvas, self.shell.selected())
            .with_frame(layout.canvas_frame())
            .with_scale_factor(self.window.scale_factor())
            .with_background(self.config.background_color)
            .with_surface(self.config.surface_color)
            .with_template(template);
        let base_color = self.scene_renderer.background_color(&render_ctx);
        self.scene_renderer.build_scene(&render_ctx);
        let scene = self.scene_renderer.take_scene();

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("{}", RendererError::Surface(format!("{:?}", e)));
                return;
            }
        };

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a storage-bindable Rgba8Unorm target; the surface may be Bgra8Unorm.
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
        let render_texture_view = render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = self
            .vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
        {
            log::error!("{}", RendererError::RenderFailed(format!("{:?}", e)));
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        // Blit the RGBA intermediate texture to the surface texture
        {
            let mut blit_encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("blit encoder"),
            });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("egui encoder"),
            });

            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        if self.egui_ctx.has_requested_repaint() {
            self.window.request_redraw();
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create a new application with configuration from the environment.
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application.
    pub async fn run() {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("Failed to create event loop: {}", e);
                return;
            }
        };
        let app = App::new();

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            if let Err(e) = event_loop.run_app(&mut app) {
                log::error!("Event loop error: {}", e);
            }
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) -> Result<(), RendererError> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("render context missing".to_string()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?;

        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let canvas = DrawingCanvas::new(self.config.canvas.clone())
            .or_else(|e| {
                log::warn!("Invalid canvas config ({}), using defaults", e);
                DrawingCanvas::new(AppConfig::default().canvas)
            })
            .map_err(|e| RendererError::InitFailed(e.to_string()))?
            .with_path_style(self.config.path_style);

        log::info!(
            "NumTrace initialized - {}x{}, {} strokes",
            surface.config.width,
            surface.config.height,
            canvas.path_style().name()
        );

        let mut state = AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            scene_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            shell: HostShell::new(Box::new(PlatformHaptics)),
            canvas,
            config: self.config.clone(),
            pointer: PointerRouter::new(),
        };
        state.apply_layout();
        self.state = Some(state);
        self.pending_window = None;

        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        // On WASM, attach a canvas to the DOM and fill the viewport
        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::error!("No document to attach the canvas to");
                event_loop.exit();
                return;
            };

            if let Some(loading) = document.get_element_by_id("loading") {
                loading.remove();
            }

            let canvas = document
                .get_element_by_id("numtrace-canvas")
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
                .or_else(|| {
                    let app_div = document.get_element_by_id("app")?;
                    let canvas = document.create_element("canvas").ok()?;
                    canvas.set_id("numtrace-canvas");
                    app_div.append_child(&canvas).ok()?;
                    canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
                });
            let Some(canvas) = canvas else {
                log::error!("Failed to create canvas element");
                event_loop.exit();
                return;
            };

            let style = canvas.style();
            let _ = style.set_property("width", "100%");
            let _ = style.set_property("height", "100%");
            let _ = style.set_property("display", "block");
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("top", "0");
            let _ = style.set_property("left", "0");
            // Touches belong to the canvas, not page scrolling
            let _ = style.set_property("touch-action", "none");

            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(Some(canvas))
        };

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Window created, surface size: {}x{}", width, height);

        // On native, block on async surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let render_cx = self.render_cx.get_or_insert_with(vello::util::RenderContext::new);

            let surface = match pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            )) {
                Ok(surface) => surface,
                Err(e) => {
                    log::error!("Failed to create surface: {:?}", e);
                    event_loop.exit();
                    return;
                }
            };

            // SAFETY: the surface borrows the window, which AppState keeps alive alongside it.
            let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
            if let Err(e) = self.finish_init(window, surface) {
                log::error!("{}", e);
                event_loop.exit();
            }
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                if !self.init_in_progress.get() {
                    self.init_in_progress.set(true);

                    let size = window.inner_size();
                    let width = size.width.max(1);
                    let height = size.height.max(1);

                    let self_ptr = self as *mut Self;
                    let window_clone = window.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        log::info!("Creating surface asynchronously...");
                        let mut render_cx = vello::util::RenderContext::new();

                        match render_cx
                            .create_surface(window_clone.clone(), width, height, PresentMode::AutoVsync)
                            .await
                        {
                            Ok(surface) => {
                                let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };

                                // SAFETY: WASM is single-threaded and the event loop keeps the App alive.
                                let app = unsafe { &mut *self_ptr };
                                app.render_cx = Some(render_cx);
                                if let Err(e) = app.finish_init(window_clone, surface) {
                                    log::error!("{}", e);
                                    app.init_in_progress.set(false);
                                }
                            }
                            Err(e) => {
                                log::error!("Failed to create surface: {:?}", e);
                                let app = unsafe { &mut *self_ptr };
                                app.init_in_progress.set(false);
                            }
                        }
                    });
                }

                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        // Only new contacts are filtered; a stroke in progress keeps its events.
        let egui_wants_input = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.apply_layout();
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                state.apply_layout();
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Some(render_cx) = self.render_cx.as_ref() {
                    state.redraw(render_cx);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let position = state.to_logical(position);
                let event = state.pointer.cursor_moved(position);
                state.dispatch(event);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let event = match button_state {
                    ElementState::Pressed => state.pointer.mouse_pressed(egui_wants_input),
                    ElementState::Released => state.pointer.mouse_released(),
                };
                state.dispatch(event);
            }

            WindowEvent::CursorLeft { .. } => {
                let event = state.pointer.cursor_left();
                state.dispatch(event);
            }

            WindowEvent::Touch(touch) => {
                let position = state.to_logical(touch.location);
                let event = state.pointer.touch(touch.id, touch.phase, position, egui_wants_input);
                state.dispatch(event);
            }

            WindowEvent::Focused(false) => {
                let event = state.pointer.focus_lost();
                state.dispatch(event);
            }

            _ => {}
        }
    }
}
