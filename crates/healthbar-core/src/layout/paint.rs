/// Replay resolved geometry onto a canvas.
use super::{BarGeometry, Canvas};
use crate::elements::BarElements;

/// Draw one bar. Boxes are painted in resolution order so later elements
/// (indicator, value, label) sit on top of the track.
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, elements: &BarElements, geometry: &BarGeometry) {
    if let Some(min) = &geometry.min_text {
        canvas.draw_text(&min.text, min.x(), min.baseline, elements.min.style());
    }
    if let Some(max) = &geometry.max_text {
        canvas.draw_text(&max.text, max.x(), max.baseline, elements.max.style());
    }

    let stroke = &elements.stroke;
    if stroke.width() > 0.0 {
        canvas.stroke_rect(geometry.stroke, stroke.width(), stroke.color());
    }

    if !geometry.fill.is_empty() {
        let fill = &elements.fill;
        if fill.is_solid() {
            canvas.fill_rect(geometry.fill, fill.start_color());
        } else {
            canvas.fill_rect_gradient(geometry.fill, fill.start_color(), fill.end_color());
        }
    }

    let indicator = &elements.indicator;
    if indicator.width() > 0.0 {
        canvas.stroke_rect(geometry.indicator, indicator.width(), indicator.color());
    }

    if let Some(value) = &geometry.value_text {
        canvas.draw_text(&value.text, value.x(), value.baseline, elements.value.field().style());
    }
    if let Some(label) = &geometry.label_text {
        canvas.draw_text(&label.text, label.x(), label.baseline, elements.label.style());
    }
}
