//! GUI renderer for paneless
//!
//! wgpu surface setup plus the egui immediate-mode backend. Each frame the
//! surface is cleared to the background color, the registered frame hooks
//! run against the egui context, and the tessellated GUI is drawn on top.

use crate::utils::error::{IntoShellError, Result};
use crate::window::host::FrameHook;
use std::sync::Arc;
use winit::window::Window as WinitWindow;

/// Fixed framebuffer clear color
const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.45,
    g: 0.55,
    b: 0.60,
    a: 1.0,
};

// Keep in sync with the egui version pinned in Cargo.toml.
const EGUI_VERSION: &str = "0.33";

/// wgpu + egui renderer bound to a single window
pub struct GuiRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    adapter_info: wgpu::AdapterInfo,

    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl GuiRenderer {
    /// Create a renderer for the given window
    pub async fn new(window: Arc<WinitWindow>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .renderer_err("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .renderer_err("No suitable graphics adapter")?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Using adapter '{}' via {}",
            adapter_info.name,
            adapter_info.backend.to_str()
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .renderer_err("Failed to create device")?;

        let surface_config = create_surface_config(&surface, &adapter, size.width, size.height);
        surface.configure(&device, &surface_config);

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
            &device,
            surface_config.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            adapter_info,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    /// Reconfigure the surface after a framebuffer resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Forward a window event to the GUI backend.
    ///
    /// Returns whether the GUI consumed the event. The host ignores the
    /// result for chrome purposes: the hot zones fire regardless of what
    /// the GUI did with the press.
    pub fn handle_event(&mut self, window: &WinitWindow, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    /// Render one frame: clear, run the frame hooks, draw the GUI, present
    pub fn render(
        &mut self,
        window: &WinitWindow,
        hooks: &mut [FrameHook],
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            for hook in hooks.iter_mut() {
                hook(ctx);
            }
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            // egui-wgpu wants a 'static pass; forget_lifetime is sound here
            // because the pass is dropped before the encoder is finished.
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Gui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(BACKGROUND),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    /// Print the one-time render diagnostics block to stdout.
    ///
    /// Informational only; field labels are a fixed surface for log scraping.
    pub fn print_render_info(&self, window: &WinitWindow) {
        let info = &self.adapter_info;
        let resolution = window
            .current_monitor()
            .map(|m| {
                let size = m.size();
                format!("[{},{}]", size.width, size.height)
            })
            .unwrap_or_else(|| "[unknown]".to_string());

        println!("--------------------Render Information--------------------");
        println!("Screen Resolution       {}", resolution);
        println!("Render API              {}", info.backend.to_str());
        println!("Render API Version      {}", info.driver_info);
        println!("Video Render Device     {}", info.name);
        println!("Video Vendor            {}", vendor_name(info.vendor));
        println!("Video Driver            {}", info.driver);
        println!("Gui Version             egui {}", EGUI_VERSION);
        println!("----------------------------------------------------------");
    }
}

fn create_surface_config(
    surface: &wgpu::Surface,
    adapter: &wgpu::Adapter,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    let surface_caps = surface.get_capabilities(adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(surface_caps.formats[0]);

    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: surface_caps.present_modes[0],
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

/// Map a PCI vendor id to a display name
fn vendor_name(id: u32) -> String {
    match id {
        0x10DE => "NVIDIA".to_string(),
        0x1002 => "AMD".to_string(),
        0x8086 => "Intel".to_string(),
        0x13B5 => "ARM".to_string(),
        0x5143 => "Qualcomm".to_string(),
        0x106B => "Apple".to_string(),
        other => format!("0x{:04X}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_name_known_ids() {
        assert_eq!(vendor_name(0x10DE), "NVIDIA");
        assert_eq!(vendor_name(0x1002), "AMD");
        assert_eq!(vendor_name(0x8086), "Intel");
    }

    #[test]
    fn test_vendor_name_unknown_id_is_hex() {
        assert_eq!(vendor_name(0xBEEF), "0xBEEF");
        assert_eq!(vendor_name(0x1), "0x0001");
    }

    #[test]
    fn test_background_matches_demo_palette() {
        assert_eq!(BACKGROUND.r, 0.45);
        assert_eq!(BACKGROUND.g, 0.55);
        assert_eq!(BACKGROUND.b, 0.60);
        assert_eq!(BACKGROUND.a, 1.0);
    }
}
