/// Top action bar -- value presets, animation toggle, theme toggle, and branding.
use crate::state::{AppState, PRESETS};
use crate::theme::ThemeMode;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("▮ HealthBar")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let mut animated = state.animated;
        if ui
            .checkbox(&mut animated, "Animate")
            .on_hover_text("Turning animation off snaps every bar to its target")
            .changed()
        {
            state.set_animated(animated);
        }

        ui.separator();

        for (name, fraction) in PRESETS {
            if ui
                .button(*name)
                .on_hover_text(format!("Move every bar to {:.0}% of its range", fraction * 100.0))
                .clicked()
            {
                state.set_fraction(*fraction);
            }
        }

        let mut fraction = state.fraction;
        let slider = egui::Slider::new(&mut fraction, 0.0..=1.0)
            .show_value(false)
            .text("position");
        if ui.add(slider).changed() {
            state.set_fraction(fraction);
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About HealthBar").clicked() {
                state.show_about = true;
            }

            let (theme_label, theme_tip) = match state.theme_mode {
                ThemeMode::Dark => ("☀", "Switch to light mode"),
                ThemeMode::Light => ("🌙", "Switch to dark mode"),
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.theme_mode.toggle();
            }

            ui.separator();

            let editor_tip = if state.show_config_panel {
                "Hide configuration editor"
            } else {
                "Show configuration editor"
            };
            if ui.button("✏ Config").on_hover_text(editor_tip).clicked() {
                state.show_config_panel = !state.show_config_panel;
            }
        });
    });
}
