/// End-to-end widget tests.
///
/// These tests drive the public `HealthBar` API the way a host toolkit does:
/// configure through setters or an attribute bag, measure, draw onto a
/// canvas, and tick the animation between frames. The canvas records every
/// call so the tests can check what actually reached the painter, not just
/// the intermediate geometry.
use healthbar_core::animation::Easing;
use healthbar_core::elements::TextStyle;
use healthbar_core::layout::{Canvas, Constraint, FontMetrics, TextMetrics};
use healthbar_core::model::{Color, Padding, Rect, Size};
use healthbar_core::{HealthBar, HealthBarConfig, Invalidation, TextTarget, ValueTarget};
use std::time::Duration;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
enum DrawOp {
    StrokeRect { rect: Rect, width: f32, color: Color },
    FillRect { rect: Rect, color: Color },
    Gradient { rect: Rect, start: Color, end: Color },
    Text { text: String, x: f32, baseline: f32 },
}

/// Canvas with fixed glyph metrics: every glyph advances 8 and inks 6, so a
/// string lays out at 7 per glyph; lines are 16 tall (ascent -12, descent 4).
#[derive(Default)]
struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TextMetrics for RecordingCanvas {
    fn advance_width(&self, text: &str, _style: &TextStyle) -> f32 {
        text.chars().count() as f32 * 8.0
    }

    fn bounds_width(&self, text: &str, _style: &TextStyle) -> f32 {
        text.chars().count() as f32 * 6.0
    }

    fn font_metrics(&self, _style: &TextStyle) -> FontMetrics {
        FontMetrics {
            ascent: -12.0,
            descent: 4.0,
        }
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.ops.push(DrawOp::StrokeRect { rect, width, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn fill_rect_gradient(&mut self, rect: Rect, start: Color, end: Color) {
        self.ops.push(DrawOp::Gradient { rect, start, end });
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, _style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            baseline,
        });
    }
}

/// Measure with the host's width fixed and the height left to the widget,
/// then draw at that size.
fn frame(bar: &mut HealthBar, width: f32) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::default();
    let size = bar.measure(&canvas, Constraint::Exact(width), Constraint::Unspecified);
    bar.draw(&mut canvas, size);
    canvas
}

fn indicator_left(bar: &HealthBar) -> f32 {
    bar.geometry().expect("bar has been drawn").indicator.left
}

fn fill_rect(bar: &HealthBar) -> Rect {
    bar.geometry().expect("bar has been drawn").fill
}

const SAMPLE: &str = r#"{
    "showMinValue": true,
    "minValue": -20,
    "minSuffix": " pts",
    "minDecimalFormat": "0.0",
    "showMaxValue": true,
    "maxValue": 34,
    "maxSuffix": " pts",
    "maxDecimalFormat": "0.0",
    "strokeWidth": 1,
    "indicatorWidth": 0.5,
    "indicatorTopOverflow": 15,
    "indicatorBottomOverflow": 15,
    "showValue": true,
    "valueSuffix": " pts",
    "valueDecimalFormat": "0.0",
    "animated": true,
    "animationDuration": 4000,
    "value": 16.1,
    "showLabel": true,
    "labels": ["Poor", "Below Average", "Average", "Above Average", "Good", "Excellent"],
    "labelsRange": "-10,0,10,15,28,34"
}"#;

// ── Measure and draw ─────────────────────────────────────────────────────────

/// A default bar measures to the fixed width and a height that fits the
/// track, the value line and the label line.
#[test]
fn default_bar_measures_and_draws() {
    let mut bar = HealthBar::new();
    let canvas = RecordingCanvas::default();
    let size = bar.measure(&canvas, Constraint::Exact(300.0), Constraint::Unspecified);
    assert_eq!(size, Size::new(300.0, 135.0));

    let canvas = frame(&mut bar, 300.0);
    assert_eq!(canvas.texts(), vec!["0", "Poor"]);
    assert_eq!(bar.label(), Some("Poor"));

    let geometry = bar.geometry().unwrap();
    let view = Rect::from_ltrb(0.0, 0.0, size.width, size.height);
    assert!(view.contains_rect(&geometry.stroke));
    assert!(view.contains_rect(&geometry.indicator));
}

/// The draw pass paints the outline, then the gradient fill inset by one
/// stroke width, then the indicator.
#[test]
fn track_is_painted_outline_fill_indicator() {
    let mut bar = HealthBar::new();
    let canvas = frame(&mut bar, 300.0);
    let shapes: Vec<&DrawOp> = canvas
        .ops
        .iter()
        .filter(|op| !matches!(op, DrawOp::Text { .. }))
        .collect();
    assert_eq!(shapes.len(), 3);

    let DrawOp::StrokeRect { rect: outline, width, .. } = shapes[0] else {
        panic!("expected outline first, got {:?}", shapes[0]);
    };
    assert_eq!(*width, 1.0);
    let DrawOp::Gradient { rect: fill, start, end } = shapes[1] else {
        panic!("expected gradient fill second, got {:?}", shapes[1]);
    };
    assert_eq!(*fill, outline.inset(1.0));
    assert_eq!((*start, *end), (Color(0xffff_c200), Color(0xff7b_fbaf)));
    assert!(matches!(shapes[2], DrawOp::StrokeRect { width, .. } if *width == 0.5));
}

// ── Label resolution ─────────────────────────────────────────────────────────

/// Equal-width buckets over [-20, 34]: the range ends pick the first and
/// last category.
#[test]
fn equal_width_labels_at_range_ends() {
    let mut bar = HealthBar::new();
    bar.set_labels(vec!["Bad".into(), "Good".into(), "Better".into(), "Best".into()]);
    bar.set_min_value(-20.0);
    bar.set_max_value(34.0);

    bar.set_value(34.0);
    frame(&mut bar, 300.0);
    assert_eq!(bar.label(), Some("Best"));

    bar.set_value(-20.0);
    frame(&mut bar, 300.0);
    assert_eq!(bar.label(), Some("Bad"));
}

/// With a breakpoint table the first breakpoint at or above the value wins.
#[test]
fn breakpoint_labels() {
    let mut bar = HealthBar::new();
    bar.set_min_value(-20.0);
    bar.set_max_value(34.0);
    bar.set_labels_range_delimited("-10,0,10,15,28,34", ",");
    bar.set_value(16.0);
    let canvas = frame(&mut bar, 300.0);
    assert_eq!(bar.label(), Some("Good"));
    assert!(canvas.texts().contains(&"Good"));
}

/// An inverted range reads the categories from the other end without
/// reordering the configured list.
#[test]
fn inverted_range_labels() {
    let mut bar = HealthBar::new();
    bar.set_min_value(100.0);
    bar.set_max_value(0.0);
    bar.set_value(100.0);
    frame(&mut bar, 300.0);
    assert_eq!(bar.label(), Some("Excellent"));
    assert_eq!(indicator_left(&bar), fill_rect(&bar).left);

    bar.set_value(0.0);
    frame(&mut bar, 300.0);
    assert_eq!(bar.label(), Some("Poor"));
    assert_eq!(bar.labels()[0], "Poor");
}

// ── Value handling ───────────────────────────────────────────────────────────

/// Out-of-range values snap to the minimum and the indicator sits at the
/// left edge of the fill.
#[test]
fn out_of_range_value_snaps_to_min() {
    let mut bar = HealthBar::new();
    bar.set_min_value(10.0);
    bar.set_value(250.0);
    frame(&mut bar, 300.0);
    assert_eq!(bar.value(), 10.0);
    assert_eq!(indicator_left(&bar), fill_rect(&bar).left);
}

/// With animation on, an overshoot from near the top runs the indicator
/// back down and settles on the minimum at the fill's left edge.
#[test]
fn animated_overshoot_settles_on_min() {
    let mut bar = HealthBar::new();
    bar.set_animated(true);
    bar.set_animation_duration(1000);
    bar.set_value(80.0);
    let mut frames = 0;
    while bar.is_animating() && frames < 1000 {
        bar.tick(Duration::from_millis(16));
        frames += 1;
    }
    assert_eq!(bar.displayed_value(), 80.0);

    bar.set_value(250.0);
    assert_eq!(bar.value(), bar.min_value());
    assert!(bar.is_animating());

    let mut frames = 0;
    while bar.is_animating() && frames < 1000 {
        bar.tick(Duration::from_millis(16));
        frame(&mut bar, 300.0);
        frames += 1;
    }
    assert!(!bar.is_animating());
    assert_eq!(bar.displayed_value(), bar.min_value());
    frame(&mut bar, 300.0);
    assert_eq!(indicator_left(&bar), fill_rect(&bar).left);
}

/// Setting the same value twice without animation is a fixed point.
#[test]
fn repeated_set_value_is_idempotent() {
    let mut bar = HealthBar::new();
    bar.set_value(42.0);
    bar.set_value(42.0);
    assert_eq!(bar.displayed_value(), 42.0);
    let canvas = frame(&mut bar, 300.0);
    assert!(canvas.texts().contains(&"42"));
}

/// Degenerate configuration must draw without panicking.
#[test]
fn degenerate_configuration_draws() {
    let mut bar = HealthBar::new();
    bar.set_min_value(0.0);
    bar.set_max_value(0.0);
    bar.set_labels(vec!["Only".into()]);
    bar.set_labels_range(Some(Vec::new()));
    bar.set_padding(Padding::uniform(0.0));
    bar.set_animated(true);
    bar.set_value(0.0);
    assert!(!bar.is_animating());

    frame(&mut bar, 300.0);
    assert_eq!(bar.label(), Some("Only"));
    assert_eq!(indicator_left(&bar), fill_rect(&bar).left);

    bar.set_labels(Vec::new());
    let canvas = frame(&mut bar, 10.0);
    assert_eq!(bar.label(), None);
    assert_eq!(canvas.texts(), vec!["0"]);
}

// ── Animation ────────────────────────────────────────────────────────────────

/// With animation on, the indicator walks monotonically from the old value
/// to the new one over the scaled duration, one repaint per tick.
#[test]
fn animated_value_moves_indicator_each_frame() {
    let mut bar = HealthBar::new();
    bar.set_animated(true);
    bar.set_animation_duration(1000);
    bar.set_value(50.0);
    frame(&mut bar, 300.0);
    let start = indicator_left(&bar);
    assert_eq!(start, fill_rect(&bar).left);

    let mut last = start;
    let mut frames = 0;
    while bar.is_animating() {
        assert_eq!(bar.tick(Duration::from_millis(50)), Invalidation::NeedsRepaint);
        frame(&mut bar, 300.0);
        let left = indicator_left(&bar);
        assert!(left >= last);
        last = left;
        frames += 1;
        assert!(frames <= 10, "half-range move should finish in 500 ms");
    }
    assert_eq!(frames, 10);
    assert_eq!(bar.displayed_value(), 50.0);
    let fill = fill_rect(&bar);
    assert_eq!(last, fill.left + fill.width() / 2.0);
}

/// Turning animation off mid-run lands the indicator on the target, and
/// later values jump straight there.
#[test]
fn disabling_animation_mid_run_snaps_to_target() {
    let mut bar = HealthBar::new();
    bar.set_animated(true);
    bar.set_easing(Easing::Linear);
    bar.set_animation_duration(1000);
    bar.set_value(100.0);
    bar.tick(Duration::from_millis(500));
    assert!((bar.displayed_value() - 50.0).abs() < 1e-9);

    bar.set_animated(false);
    assert_eq!(bar.displayed_value(), 100.0);
    bar.set_value(20.0);
    assert_eq!(bar.displayed_value(), 20.0);
    assert_eq!(bar.tick(Duration::from_millis(16)), Invalidation::NoOp);
}

// ── Configuration ────────────────────────────────────────────────────────────

/// The sample attribute bag produces the sample bar: min/max text with
/// suffixes, an animated move to 16.1 and the breakpoint label "Good".
#[test]
fn sample_config_end_to_end() {
    let config = HealthBarConfig::from_json(SAMPLE).unwrap();
    let mut bar = HealthBar::new();
    assert_eq!(bar.apply_config(&config), Invalidation::NeedsRelayout);
    assert!(bar.is_animating());

    while bar.is_animating() {
        bar.tick(Duration::from_millis(16));
    }
    let canvas = frame(&mut bar, 400.0);
    assert_eq!(
        canvas.texts(),
        vec!["-20.0 pts", "34.0 pts", "16.1 pts", "Good"]
    );

    let geometry = bar.geometry().unwrap();
    let min_text = geometry.min_text.as_ref().unwrap();
    assert!(min_text.bounds.right < geometry.stroke.left);
    assert_eq!(geometry.indicator.top, geometry.stroke.top - 15.5);
}

/// Colour changes only repaint; size changes relayout. The pending tag
/// coalesces a batch and resets once taken.
#[test]
fn invalidation_tags_through_public_api() {
    let mut bar = HealthBar::new();
    bar.set_text_color(TextTarget::Value, 0xff21_2121);
    bar.set_end_color(0xff00_00ff);
    assert_eq!(bar.take_invalidation(), Invalidation::NeedsRepaint);

    bar.set_suffix(ValueTarget::Value, Some(" hp"));
    bar.set_indicator_color(0xff00_0000);
    assert_eq!(bar.take_invalidation(), Invalidation::NeedsRelayout);

    bar.set_suffix(ValueTarget::Value, None);
    assert_eq!(bar.take_invalidation(), Invalidation::NoOp);
}
