/// Central panel -- every demo bar stacked vertically with its title.
use crate::state::AppState;
use crate::widgets::health_bar::health_bar;
use egui::Ui;

/// Draw all bars. Clicking a title selects that bar for editing.
pub fn bars_panel(ui: &mut Ui, state: &mut AppState) {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, demo) in state.bars.iter_mut().enumerate() {
                let selected = state.selected == Some(index);
                ui.horizontal(|ui| {
                    let title = egui::RichText::new(&demo.title).size(14.0).strong();
                    if ui.selectable_label(selected, title).clicked() {
                        clicked = Some(index);
                    }
                    if let Some(label) = demo.bar.label() {
                        ui.label(
                            egui::RichText::new(label)
                                .size(12.0)
                                .color(ui.visuals().weak_text_color()),
                        );
                    }
                });

                health_bar(ui, &mut demo.bar);
                ui.add_space(12.0);
                ui.separator();
            }

            if state.bars.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No bars -- paste a configuration and press \"Add\".");
                });
            }
        });

    if let Some(index) = clicked {
        state.select(index);
    }
}
