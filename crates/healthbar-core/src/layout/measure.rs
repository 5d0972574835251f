/// Desired-size computation.
use super::{text_height, text_width, Constraint, TextMetrics, MIN_BAR_HEIGHT, TEXT_GAP};
use crate::elements::{BarElements, ValueField};
use crate::model::{Padding, Size};

/// Size the bar would like to have, ignoring host constraints.
///
/// Width covers the padding, the two outline strokes plus one stroke of
/// breathing room, and the min/max text with their gaps. It is then raised
/// to fit the widest category label and the value text, either of which can
/// be drawn anywhere along the track.
///
/// Height stacks the padding, the strokes, [`MIN_BAR_HEIGHT`], the value
/// and label lines and the indicator overflow, raised to fit the min/max
/// text.
pub fn content_size<M: TextMetrics + ?Sized>(
    metrics: &M,
    elements: &BarElements,
    padding: Padding,
) -> Size {
    let pad = padding.effective();
    let stroke = elements.stroke.width();

    let track_width = pad.left
        + pad.right
        + stroke * 3.0
        + side_text_width(metrics, &elements.min)
        + side_text_width(metrics, &elements.max);

    let label_style = elements.label.style();
    let widest_label = elements
        .label
        .categories()
        .iter()
        .map(|c| text_width(metrics, c, label_style))
        .fold(0.0_f32, f32::max);
    let value_field = elements.value.field();
    let value_width = text_width(metrics, &value_field.text(), value_field.style());

    let width = track_width.max(widest_label.max(value_width));

    let indicator = &elements.indicator;
    let stacked_height = pad.top
        + pad.bottom
        + stroke * 3.0
        + MIN_BAR_HEIGHT
        + text_height(metrics, value_field.style())
        + text_height(metrics, label_style)
        + indicator.top_overflow()
        + indicator.bottom_overflow();
    let side_height = text_height(metrics, elements.min.style())
        .max(text_height(metrics, elements.max.style()));

    Size::new(width, stacked_height.max(side_height))
}

/// Resolve the final size under the host's per-axis constraints.
pub fn measure<M: TextMetrics + ?Sized>(
    metrics: &M,
    elements: &BarElements,
    padding: Padding,
    width: Constraint,
    height: Constraint,
) -> Size {
    // Exact on both axes needs no text measurement at all.
    if let (Constraint::Exact(w), Constraint::Exact(h)) = (width, height) {
        return Size::new(w, h);
    }
    let desired = content_size(metrics, elements, padding);
    Size::new(width.resolve(desired.width), height.resolve(desired.height))
}

/// Width of a min/max label including its gap, zero when hidden.
fn side_text_width<M: TextMetrics + ?Sized>(metrics: &M, field: &ValueField) -> f32 {
    if !field.style().visible() {
        return 0.0;
    }
    text_width(metrics, &field.text(), field.style()) + TEXT_GAP
}
