//! HealthBar demo -- animated horizontal gauge showcase.
//!
//! Thin binary entry point. Layout and animation live in `healthbar-core`,
//! the egui host and demo window in `healthbar-gui`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("HealthBar demo starting");

    let icon = healthbar_gui::icon::generate_icon(64);

    // Parse and configure the sample bars before the window exists.
    let state = healthbar_gui::HealthBarState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("HealthBar -- Widget Demo")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "HealthBarDemo",
        options,
        Box::new(|cc| {
            Ok(Box::new(healthbar_gui::HealthBarApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
