/// Draw-time geometry resolution.
///
/// Boxes are resolved in a fixed order because each one leans on the ones
/// before it: the min/max text boxes set the horizontal extent of the
/// track, the track sets the fill, the fill positions the indicator, and
/// the indicator anchors the value and label text.
use super::{
    text_height, text_width, FontMetrics, TextMetrics, LABEL_TEXT_OFFSET, TEXT_GAP,
    VALUE_TEXT_OFFSET,
};
use crate::elements::value::clamp_to_range;
use crate::elements::{BarElements, TextStyle};
use crate::model::{Padding, Rect, Size};

/// A piece of text with its resolved position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    /// Layout box: layout width by `ascent..descent` around the baseline.
    pub bounds: Rect,
    pub baseline: f32,
}

impl PlacedText {
    fn new(text: String, left: f32, width: f32, baseline: f32, metrics: FontMetrics) -> Self {
        Self {
            text,
            bounds: Rect::from_ltrb(
                left,
                baseline + metrics.ascent,
                left + width,
                baseline + metrics.descent,
            ),
            baseline,
        }
    }

    pub fn x(&self) -> f32 {
        self.bounds.left
    }
}

/// Every box of one paint. Hidden text elements are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub min_text: Option<PlacedText>,
    pub max_text: Option<PlacedText>,
    /// Centre line of the outline stroke.
    pub stroke: Rect,
    pub fill: Rect,
    pub indicator: Rect,
    pub value_text: Option<PlacedText>,
    pub label_text: Option<PlacedText>,
    /// Category for the displayed value, resolved even when the label is
    /// hidden.
    pub category: Option<String>,
}

/// Resolve the geometry of a bar drawn into a `size` view.
pub fn resolve_geometry<M: TextMetrics + ?Sized>(
    metrics: &M,
    elements: &BarElements,
    padding: Padding,
    size: Size,
) -> BarGeometry {
    let pad = padding.effective();
    let stroke_width = elements.stroke.width();
    let half_stroke = stroke_width / 2.0;
    let indicator = &elements.indicator;
    let value_style = elements.value.field().style();
    let label_style = elements.label.style();
    let value_height = text_height(metrics, value_style);
    let label_height = text_height(metrics, label_style);

    // The track's vertical span depends only on padding and text heights;
    // the min/max text is centred on it.
    let stroke_top = pad.top + indicator.top_overflow() + value_height + half_stroke;
    let stroke_bottom =
        size.height - pad.bottom - indicator.bottom_overflow() - label_height - half_stroke;
    let track_center = (stroke_top + stroke_bottom) / 2.0;

    // ── 1. Min value ──
    let min_text = side_text(metrics, &elements.min.text(), elements.min.style(), track_center)
        .map(|(text, width, baseline, fm)| PlacedText::new(text, pad.left, width, baseline, fm));

    // ── 2. Max value ──
    let max_right = size.width - pad.right;
    let max_text = side_text(metrics, &elements.max.text(), elements.max.style(), track_center)
        .map(|(text, width, baseline, fm)| {
            PlacedText::new(text, max_right - width, width, baseline, fm)
        });

    // ── 3. Stroke ──
    let stroke_left = match &min_text {
        Some(t) => t.bounds.right + half_stroke + TEXT_GAP,
        None => pad.left + half_stroke,
    };
    let stroke_right = match &max_text {
        Some(t) => t.bounds.left - half_stroke - TEXT_GAP,
        None => max_right - half_stroke,
    };
    let stroke = Rect::from_ltrb(stroke_left, stroke_top, stroke_right, stroke_bottom);

    // ── 4. Fill ──
    let fill = stroke.inset(stroke_width);

    // ── 5. Indicator ──
    let min = elements.min_value();
    let max = elements.max_value();
    let displayed = elements.value.displayed();
    let indicator_left = fill.left + value_fraction(displayed, min, max) * fill.width();
    let indicator_rect = Rect::from_ltrb(
        indicator_left,
        stroke.top - indicator.top_overflow() - half_stroke,
        indicator_left + indicator.width(),
        stroke.bottom + indicator.bottom_overflow() + half_stroke,
    );
    let anchor = indicator_rect.center_x();

    // ── 6. Value text ──
    let value_text = value_style.visible().then(|| {
        let text = elements.value.text();
        let width = text_width(metrics, &text, value_style);
        let left = place_along_track(anchor, width, &stroke);
        let baseline = indicator_rect.top - VALUE_TEXT_OFFSET;
        PlacedText::new(text, left, width, baseline, metrics.font_metrics(value_style))
    });

    // ── 7. Label ──
    let category = elements
        .label
        .category_for(displayed, min, max)
        .map(str::to_string);
    let label_text = category
        .as_ref()
        .filter(|_| label_style.visible())
        .map(|text| {
            let width = text_width(metrics, text, label_style);
            let left = place_along_track(anchor, width, &stroke);
            let baseline = indicator_rect.bottom + label_height - LABEL_TEXT_OFFSET;
            PlacedText::new(
                text.clone(),
                left,
                width,
                baseline,
                metrics.font_metrics(label_style),
            )
        });

    BarGeometry {
        min_text,
        max_text,
        stroke,
        fill,
        indicator: indicator_rect,
        value_text,
        label_text,
        category,
    }
}

/// Where `value` sits between `min` and `max`, as a fraction of the fill.
///
/// The value is clamped into the range first. A zero-width or non-finite
/// range pins the indicator to the left edge.
pub fn value_fraction(value: f64, min: f64, max: f64) -> f32 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let fraction = (clamp_to_range(value, min, max) - min) / span;
    if fraction.is_finite() {
        fraction as f32
    } else {
        0.0
    }
}

/// Measure a min/max label and find its baseline so its visual centre sits
/// on `center_y`. `None` when hidden.
fn side_text<M: TextMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    style: &TextStyle,
    center_y: f32,
) -> Option<(String, f32, f32, FontMetrics)> {
    if !style.visible() {
        return None;
    }
    let fm = metrics.font_metrics(style);
    let width = text_width(metrics, text, style);
    Some((text.to_string(), width, center_y - fm.center_offset(), fm))
}

/// Left edge for text of `width` centred on `anchor`, shifted inwards so it
/// stays between the track's left and right edges where it fits.
fn place_along_track(anchor: f32, width: f32, track: &Rect) -> f32 {
    let mut left = (anchor - width / 2.0).max(track.left);
    if left + width > track.right {
        left -= left + width - track.right;
    }
    left
}
