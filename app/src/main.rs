mod app;
mod ui;

use app::{ViewerApp, ViewerConfig};
use binplot::demo_figure;
use eframe::egui;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let figure = demo_figure()?;
    let config = ViewerConfig::default();
    log::info!("showing demo figure with {} series", figure.series().len());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(figure, config)))),
    )?;
    Ok(())
}
