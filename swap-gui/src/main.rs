use eframe::egui;
use mockswap_core::SwapConfig;

mod app;
mod events;
mod service;
mod state;
mod ui_components;
mod view;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("❌ Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };
    let _guard = rt.enter();

    let config = SwapConfig::load().unwrap_or_else(|e| {
        log::warn!("⚠ Config unusable ({}), using built-in defaults", e);
        SwapConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "MockSwap",
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
    );

    drop(_guard);
    rt.shutdown_timeout(std::time::Duration::from_secs(2));

    result
}
