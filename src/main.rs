//! Numify: turn long numbers into short, human readable ones.
//!
//! Thin binary entry point. All logic lives in the `numify-core`
//! and `numify-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Numify starting");

    let icon = numify_gui::icon::generate_icon(64);

    // Build application state before opening the window so the first
    // frame is ready as soon as it appears.
    let state = numify_gui::NumifyState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(numify_gui::state::Page::Currency.window_title())
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([420.0, 420.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "Numify",
        options,
        Box::new(|cc| Ok(Box::new(numify_gui::NumifyApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
