/// Bottom status bar -- bar count, animation activity and editor errors.
use crate::state::AppState;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_error = ui.visuals().error_fg_color;

    ui.horizontal(|ui| {
        let animating = state.animating_count();
        if animating > 0 {
            ui.spinner();
            ui.label(
                egui::RichText::new(format!("Animating {} of {}", animating, state.bars.len()))
                    .size(12.0)
                    .color(color_accent),
            );
        } else {
            ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
        }

        ui.separator();

        ui.label(
            egui::RichText::new(format!("{} bars", state.bars.len()))
                .size(12.0)
                .color(color_normal),
        );

        if let Some(demo) = state.selected.and_then(|i| state.bars.get(i)) {
            ui.separator();
            let summary = format!(
                "{}: {} in [{}, {}]",
                demo.title,
                demo.bar.value(),
                demo.bar.min_value(),
                demo.bar.max_value()
            );
            ui.label(egui::RichText::new(summary).size(12.0).color(color_normal));
        }

        if let Some(ref error) = state.last_error {
            ui.separator();
            ui.label(
                egui::RichText::new(truncate(error, 80))
                    .size(12.0)
                    .color(color_error),
            );
        }
    });
}

/// Truncate `text` to `max_chars` characters, ending with "..." when cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}
