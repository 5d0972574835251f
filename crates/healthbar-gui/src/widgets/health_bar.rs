/// Health bar widget -- hosts a core [`HealthBar`] inside an egui layout.
///
/// One call per frame: advances the animation by the frame delta, measures
/// against the available width, allocates the space, and paints.
use super::canvas::PainterCanvas;
use healthbar_core::layout::Constraint;
use healthbar_core::HealthBar;
use egui::{Pos2, Response, Sense, Ui, Vec2};
use std::time::Duration;

/// Draw `bar` filling the available width at its measured height.
pub fn health_bar(ui: &mut Ui, bar: &mut HealthBar) -> Response {
    if bar.is_animating() {
        let dt = ui.input(|i| i.stable_dt);
        bar.tick(Duration::try_from_secs_f32(dt.max(0.0)).unwrap_or_default());
    }

    // Inside horizontally unbounded layouts fall back to the content width.
    let available = ui.available_width();
    let width = if available.is_finite() {
        Constraint::Exact(available)
    } else {
        Constraint::Unspecified
    };
    let size = {
        let metrics = PainterCanvas::new(ui.painter(), Pos2::ZERO);
        bar.measure(&metrics, width, Constraint::Unspecified)
    };

    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(size.width, size.height), Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let mut canvas = PainterCanvas::new(&painter, rect.min);
        bar.draw(&mut canvas, size);
    }

    // Layout already happened this frame; anything still pending is
    // consumed here and only decides whether another frame is needed.
    let pending = bar.take_invalidation();
    if bar.is_animating() || pending.needs_repaint() {
        ui.ctx().request_repaint();
    }

    match bar.label() {
        Some(label) => {
            let value = bar.elements().value.text();
            let hover = format!("{} ({})", label, value);
            response.on_hover_text(hover)
        }
        None => response,
    }
}
