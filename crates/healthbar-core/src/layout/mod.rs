/// Layout engine -- measurement, geometry resolution and painting.
///
/// The engine never talks to a GUI toolkit directly. Text measurement goes
/// through [`TextMetrics`] and drawing through [`Canvas`]; the host adapter
/// implements both over its own painter.
///
/// # Passes
///
/// - [`measure`] turns host constraints plus the element configuration into
///   a desired size.
/// - [`resolve_geometry`] computes every box for one paint, in dependency
///   order: min text, max text, stroke, fill, indicator, value text, label.
/// - [`paint`] replays a resolved [`BarGeometry`] onto a [`Canvas`].
pub mod geometry;
pub mod measure;
pub mod paint;

pub use geometry::{resolve_geometry, BarGeometry, PlacedText};
pub use measure::{content_size, measure};
pub use paint::paint;

use crate::elements::TextStyle;
use crate::model::{Color, Rect};

/// Smallest height of the fill between the outline strokes.
pub const MIN_BAR_HEIGHT: f32 = 70.0;

/// Horizontal gap between the min/max text and the track.
pub const TEXT_GAP: f32 = 10.0;

/// Distance from the indicator top to the value text baseline.
pub const VALUE_TEXT_OFFSET: f32 = 10.0;

/// The label baseline sits this far above `indicator bottom + label height`.
pub const LABEL_TEXT_OFFSET: f32 = 5.0;

// ── Host boundary ──────────────────────────────────────────────

/// Sizing rule for one axis, as handed down by the host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The host has fixed the size; it wins over the desired size.
    Exact(f32),
    /// Use the desired size, but no more than this.
    AtMost(f32),
    /// Use the desired size.
    Unspecified,
}

impl Constraint {
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            Constraint::Exact(size) => size,
            Constraint::AtMost(limit) => desired.min(limit),
            Constraint::Unspecified => desired,
        }
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub fn height(&self) -> f32 {
        self.descent - self.ascent
    }

    /// Offset from the baseline to the visual centre of a line.
    pub fn center_offset(&self) -> f32 {
        (self.ascent + self.descent) / 2.0
    }
}

/// Glyph measurement supplied by the host.
pub trait TextMetrics {
    /// Horizontal advance of `text` laid out on one line.
    fn advance_width(&self, text: &str, style: &TextStyle) -> f32;

    /// Width of the inked bounding box of `text`.
    fn bounds_width(&self, text: &str, style: &TextStyle) -> f32;

    fn font_metrics(&self, style: &TextStyle) -> FontMetrics;
}

/// Immediate-mode drawing surface supplied by the host.
pub trait Canvas: TextMetrics {
    /// Outline `rect` with a line of `width` centred on its edges.
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill `rect` with a horizontal gradient from `start` (left) to `end`
    /// (right).
    fn fill_rect_gradient(&mut self, rect: Rect, start: Color, end: Color);

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle);
}

// ── Text measurement ───────────────────────────────────────────

/// Width of `text` as used for layout: the mean of the advance and the
/// inked bounds, which evens out glyph overhang. Zero when hidden or empty.
pub fn text_width<M: TextMetrics + ?Sized>(metrics: &M, text: &str, style: &TextStyle) -> f32 {
    if !style.visible() || text.is_empty() {
        return 0.0;
    }
    (metrics.advance_width(text, style) + metrics.bounds_width(text, style)) / 2.0
}

/// Line height of `style` (`descent - ascent`). Zero when hidden.
pub fn text_height<M: TextMetrics + ?Sized>(metrics: &M, style: &TextStyle) -> f32 {
    if !style.visible() {
        return 0.0;
    }
    metrics.font_metrics(style).height()
}
