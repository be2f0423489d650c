use anyhow::Result;
use eframe::egui;
use log::info;

mod model;
mod physics;
mod render;
mod ui;

use ui::WaveExplorerApp;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting Wave Explorer - Electromagnetic Wavelength Calculator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([820.0, 560.0])
            .with_title("Wave Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Wave Explorer",
        options,
        Box::new(|cc| {
            configure_style(&cc.egui_ctx);
            Ok(Box::new(WaveExplorerApp::new(cc)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}

fn configure_style(ctx: &egui::Context) {
    let mut style = egui::Style::default();

    // Dark slate palette matching the canvas background
    style.visuals.dark_mode = true;
    style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
    style.visuals.panel_fill = egui::Color32::from_rgb(10, 16, 30);

    ctx.set_style(style);
}
