use anyhow::Result;
use env_logger::Env;
use log::info;

mod renderer;
mod utils;
mod window;

use utils::WindowConfig;
use window::RenderHost;

const WINDOW_TITLE: &str = "Demo Window";
const WINDOW_WIDTH: u32 = 750;
const WINDOW_HEIGHT: u32 = 500;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("Starting paneless v{}", env!("CARGO_PKG_VERSION"));

    let config = WindowConfig {
        title: WINDOW_TITLE.to_string(),
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    };

    let mut host = RenderHost::new(config)?;
    host.on_frame(draw_demo_window);
    host.run()?;

    Ok(())
}

/// The single demo window, pinned to the full window surface every frame
fn draw_demo_window(ctx: &egui::Context) {
    egui::Window::new(WINDOW_TITLE)
        .collapsible(false)
        .resizable(false)
        .fixed_pos(egui::pos2(0.0, 0.0))
        .fixed_size(egui::vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32))
        .show(ctx, |ui| {
            ui.label("Hello World");
            let _ = ui.button("This is Button");
        });
}
