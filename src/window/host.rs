//! Winit-based window/render host
//!
//! Owns the borderless window and the event loop. Each frame it clears the
//! framebuffer, runs the registered frame hooks through the GUI context,
//! presents, and sleeps briefly to bound idle CPU usage. Mouse-down events
//! are forwarded to the chrome handler independently of the GUI.

use crate::renderer::GuiRenderer;
use crate::utils::config::WindowConfig;
use crate::utils::error::{IntoShellError, Result};
use crate::window::chrome::{ChromeHandler, WinitWindowControl};
use crate::window::convert_mouse_button;
use std::sync::Arc;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

/// Per-frame drawing callback, invoked once per rendered frame in
/// registration order.
pub type FrameHook = Box<dyn FnMut(&egui::Context)>;

/// Sleep inserted after each presented frame to cap CPU usage when
/// presentation itself does not throttle.
const FRAME_SLEEP: Duration = Duration::from_millis(8);

/// Window/render host: construct, register frame hooks, then [`RenderHost::run`].
pub struct RenderHost {
    config: WindowConfig,
    hooks: Vec<FrameHook>,
}

impl RenderHost {
    /// Create a new host for a window described by `config`
    pub fn new(config: WindowConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            hooks: Vec::new(),
        })
    }

    /// Register a per-frame drawing callback
    pub fn on_frame<F>(&mut self, hook: F)
    where
        F: FnMut(&egui::Context) + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Run the event loop, blocking until the window is closed
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new().window_err("Failed to create event loop")?;

        let mut app = HostApp {
            config: self.config,
            hooks: self.hooks,
            window: None,
            renderer: None,
            chrome: None,
            cursor: (0.0, 0.0),
        };

        event_loop.run_app(&mut app).window_err("Event loop error")?;

        log::info!("Window closed, shutting down");
        Ok(())
    }
}

/// Event-loop state, driven by winit through [`ApplicationHandler`].
struct HostApp {
    config: WindowConfig,
    hooks: Vec<FrameHook>,
    window: Option<Arc<WinitWindow>>,
    renderer: Option<GuiRenderer>,
    chrome: Option<ChromeHandler>,

    /// Last known cursor position in window-local physical pixels
    cursor: (f64, f64),
}

impl HostApp {
    fn create_window(&self, event_loop: &ActiveEventLoop) -> std::result::Result<Arc<WinitWindow>, winit::error::OsError> {
        let attributes = WinitWindow::default_attributes()
            .with_title(&self.config.title)
            .with_decorations(false)
            .with_resizable(false)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        event_loop.create_window(attributes).map(Arc::new)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        match renderer.render(window, &mut self.hooks) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                renderer.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Frame skipped: {e}"),
        }

        std::thread::sleep(FRAME_SLEEP);
    }
}

impl ApplicationHandler for HostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(GuiRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        center_window(&window);
        renderer.print_render_info(&window);

        self.chrome = Some(ChromeHandler::new(window.inner_size().width));
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The GUI sees every event; the chrome is tested independently below,
        // so a press on the GUI window's title strip also moves the window.
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            renderer.handle_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                if let Some(chrome) = &mut self.chrome {
                    chrome.set_width(size.width);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let (Some(chrome), Some(window)) = (&self.chrome, &self.window) else {
                    return;
                };
                if let Some(button) = convert_mouse_button(button) {
                    let control = WinitWindowControl::new(window.clone());
                    chrome.on_mouse_down(button, self.cursor.0, self.cursor.1, &control);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Center the window on its current monitor
fn center_window(window: &WinitWindow) {
    let Some(monitor) = window.current_monitor().or_else(|| window.primary_monitor()) else {
        return;
    };

    let monitor_size = monitor.size();
    let monitor_pos = monitor.position();
    let outer = window.outer_size();

    let x = monitor_pos.x + (monitor_size.width.saturating_sub(outer.width) / 2) as i32;
    let y = monitor_pos.y + (monitor_size.height.saturating_sub(outer.height) / 2) as i32;
    window.set_outer_position(PhysicalPosition::new(x, y));
}
