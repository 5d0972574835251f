/// Side panel -- JSON attribute editor for the selected bar.
use crate::state::AppState;
use egui::Ui;

/// Draw the editor, its Apply/Add/Format buttons and the last parse error.
pub fn config_panel(ui: &mut Ui, state: &mut AppState) {
    let title = state
        .selected
        .and_then(|i| state.bars.get(i))
        .map_or("No bar selected", |d| d.title.as_str())
        .to_string();
    ui.heading(title);
    ui.label(
        egui::RichText::new("Options are applied on top of the bar's current settings.")
            .size(11.0)
            .color(ui.visuals().weak_text_color()),
    );
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let can_apply = state.selected.is_some();
        if ui
            .add_enabled(can_apply, egui::Button::new("✔ Apply"))
            .on_hover_text("Apply to the selected bar")
            .clicked()
        {
            // Failures are recorded in `last_error` and shown below.
            let _ = state.apply_editor();
        }
        if ui
            .button("➕ Add")
            .on_hover_text("Add a new bar from this configuration")
            .clicked()
        {
            let title = format!("Custom {}", state.bars.len() + 1);
            let text = state.config_text.clone();
            match state.add_from_json(&title, &text) {
                Ok(index) => state.select(index),
                Err(e) => {
                    tracing::warn!("Could not add bar -- {}", e);
                    state.last_error = Some(e.to_string());
                }
            }
        }
        if ui
            .button("{ } Format")
            .on_hover_text("Reformat the editor text, dropping unknown keys")
            .clicked()
        {
            let _ = state.format_editor();
        }
    });

    if let Some(ref error) = state.last_error {
        ui.label(
            egui::RichText::new(error)
                .size(12.0)
                .color(ui.visuals().error_fg_color),
        );
    }

    ui.add_space(4.0);
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut state.config_text)
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(24),
        );
    });
}
