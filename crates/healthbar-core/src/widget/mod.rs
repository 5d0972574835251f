/// The widget shell.
///
/// [`HealthBar`] owns every element, exposes the configuration API and
/// forwards the host's measure/draw callbacks into the layout engine.
/// Setters never call back into the host: each returns an [`Invalidation`]
/// tag and also folds it into a pending tag the host drains once per event
/// with [`HealthBar::take_invalidation`].
pub mod invalidation;

pub use invalidation::Invalidation;

use crate::animation::Easing;
use crate::elements::{BarElements, TextStyle, ValueField};
use crate::layout::{self, BarGeometry, Canvas, Constraint, TextMetrics};
use crate::model::{Font, NumberFormat, Padding, Size};
use crate::resources::{color_or_literal, NoResources, ResourceId, ResourceResolver};
use std::fmt;
use std::time::Duration;

/// A text element of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTarget {
    MinValue,
    MaxValue,
    Value,
    Label,
}

/// A numeric text element of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTarget {
    MinValue,
    MaxValue,
    Value,
}

impl From<ValueTarget> for TextTarget {
    fn from(target: ValueTarget) -> Self {
        match target {
            ValueTarget::MinValue => TextTarget::MinValue,
            ValueTarget::MaxValue => TextTarget::MaxValue,
            ValueTarget::Value => TextTarget::Value,
        }
    }
}

/// A horizontal health bar.
pub struct HealthBar {
    pub(crate) elements: BarElements,
    padding: Padding,
    resources: Box<dyn ResourceResolver>,
    pending: Invalidation,
    geometry: Option<BarGeometry>,
}

impl HealthBar {
    pub fn new() -> Self {
        Self::with_resources(Box::new(NoResources))
    }

    pub fn with_resources(resources: Box<dyn ResourceResolver>) -> Self {
        Self {
            elements: BarElements::new(),
            padding: Padding::default(),
            resources,
            pending: Invalidation::NoOp,
            geometry: None,
        }
    }

    pub fn elements(&self) -> &BarElements {
        &self.elements
    }

    pub(crate) fn resources(&self) -> &dyn ResourceResolver {
        self.resources.as_ref()
    }

    /// Fold `tag` into the pending invalidation and hand it back.
    pub(crate) fn record(&mut self, tag: Invalidation) -> Invalidation {
        self.pending |= tag;
        tag
    }

    /// Everything the setters asked for since the last call, coalesced.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_invalidation(&self) -> Invalidation {
        self.pending
    }

    // ── Padding ────────────────────────────────────────────────

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Edges that are not strictly positive are laid out with
    /// [`EXTRA_PADDING`](crate::model::geometry::EXTRA_PADDING).
    pub fn set_padding(&mut self, padding: Padding) -> Invalidation {
        let changed = self.padding != padding;
        self.padding = padding;
        self.record(Invalidation::when(changed, Invalidation::NeedsRelayout))
    }

    // ── Text attributes ────────────────────────────────────────

    pub fn text_style(&self, target: TextTarget) -> &TextStyle {
        match target {
            TextTarget::MinValue => self.elements.min.style(),
            TextTarget::MaxValue => self.elements.max.style(),
            TextTarget::Value => self.elements.value.field().style(),
            TextTarget::Label => self.elements.label.style(),
        }
    }

    pub(crate) fn text_style_mut(&mut self, target: TextTarget) -> &mut TextStyle {
        match target {
            TextTarget::MinValue => self.elements.min.style_mut(),
            TextTarget::MaxValue => self.elements.max.style_mut(),
            TextTarget::Value => self.elements.value.field_mut().style_mut(),
            TextTarget::Label => self.elements.label.style_mut(),
        }
    }

    pub fn is_visible(&self, target: TextTarget) -> bool {
        self.text_style(target).visible()
    }

    pub fn set_visible(&mut self, target: TextTarget, visible: bool) -> Invalidation {
        let tag = self.text_style_mut(target).set_visible(visible);
        self.record(tag)
    }

    /// `color` is a colour resource id, or a literal `0xAARRGGBB` value when
    /// no such resource exists.
    pub fn set_text_color(&mut self, target: TextTarget, color: u32) -> Invalidation {
        let color = color_or_literal(self.resources(), color);
        let tag = self.text_style_mut(target).set_color(color);
        self.record(tag)
    }

    pub fn set_text_size(&mut self, target: TextTarget, size: f32) -> Invalidation {
        let tag = self.text_style_mut(target).set_size(size);
        self.record(tag)
    }

    /// Resolve font resource `id` and apply it. An unknown id leaves the
    /// current font in place.
    pub fn set_font(&mut self, target: TextTarget, id: ResourceId) -> Invalidation {
        match self.resources.resolve_font(id) {
            Some(font) => self.set_font_family(target, font),
            None => {
                tracing::warn!("Font resource {} not found -- {:?} font unchanged", id, target);
                Invalidation::NoOp
            }
        }
    }

    pub fn set_font_family(&mut self, target: TextTarget, font: Font) -> Invalidation {
        let tag = self.text_style_mut(target).set_font(font);
        self.record(tag)
    }

    // ── Value formatting ───────────────────────────────────────

    pub fn value_field(&self, target: ValueTarget) -> &ValueField {
        match target {
            ValueTarget::MinValue => &self.elements.min,
            ValueTarget::MaxValue => &self.elements.max,
            ValueTarget::Value => self.elements.value.field(),
        }
    }

    pub(crate) fn value_field_mut(&mut self, target: ValueTarget) -> &mut ValueField {
        match target {
            ValueTarget::MinValue => &mut self.elements.min,
            ValueTarget::MaxValue => &mut self.elements.max,
            ValueTarget::Value => self.elements.value.field_mut(),
        }
    }

    /// `None` is ignored.
    pub fn set_suffix(&mut self, target: ValueTarget, suffix: Option<&str>) -> Invalidation {
        let tag = self.value_field_mut(target).set_suffix(suffix);
        self.record(tag)
    }

    /// `None` is ignored.
    pub fn set_decimal_format(
        &mut self,
        target: ValueTarget,
        format: Option<NumberFormat>,
    ) -> Invalidation {
        let tag = self.value_field_mut(target).set_format(format);
        self.record(tag)
    }

    /// Compile `pattern` and apply it. An invalid pattern is logged and the
    /// previous format kept.
    pub fn set_decimal_pattern(&mut self, target: ValueTarget, pattern: &str) -> Invalidation {
        let tag = self.value_field_mut(target).set_format_pattern(pattern);
        self.record(tag)
    }

    // ── Range and value ────────────────────────────────────────

    pub fn min_value(&self) -> f64 {
        self.elements.min_value()
    }

    pub fn max_value(&self) -> f64 {
        self.elements.max_value()
    }

    /// The value last set, after clamping.
    pub fn value(&self) -> f64 {
        self.elements.value.current()
    }

    /// The value the indicator is currently drawn at.
    pub fn displayed_value(&self) -> f64 {
        self.elements.value.displayed()
    }

    /// Changing the range re-applies the current value, so a value that
    /// falls outside the new range snaps to the new minimum.
    pub fn set_min_value(&mut self, min: f64) -> Invalidation {
        let tag = self.elements.min.set_value(min);
        self.record(tag);
        self.reapply_value() | tag
    }

    /// See [`HealthBar::set_min_value`].
    pub fn set_max_value(&mut self, max: f64) -> Invalidation {
        let tag = self.elements.max.set_value(max);
        self.record(tag);
        self.reapply_value() | tag
    }

    /// Move the indicator to `value`.
    ///
    /// Values outside `[min, max]` snap to `min`. With animation enabled the
    /// indicator travels there over a share of the animation duration
    /// proportional to the distance; call [`HealthBar::tick`] every frame.
    pub fn set_value(&mut self, value: f64) -> Invalidation {
        let (min, max) = (self.min_value(), self.max_value());
        let tag = self.elements.value.set_value(value, min, max);
        self.record(tag)
    }

    fn reapply_value(&mut self) -> Invalidation {
        self.set_value(self.value())
    }

    // ── Animation ──────────────────────────────────────────────

    pub fn is_animated(&self) -> bool {
        self.elements.value.animated()
    }

    pub fn is_animating(&self) -> bool {
        self.elements.value.is_animating()
    }

    pub fn animation_duration(&self) -> Duration {
        self.elements.value.animation_duration()
    }

    pub fn easing(&self) -> Easing {
        self.elements.value.easing()
    }

    pub fn set_animated(&mut self, animated: bool) -> Invalidation {
        let tag = self.elements.value.set_animated(animated);
        self.record(tag)
    }

    /// Time a full-range move takes, in milliseconds. Negative is zero.
    pub fn set_animation_duration(&mut self, millis: i64) -> Invalidation {
        let tag = self.elements.value.set_animation_duration_ms(millis);
        self.record(tag)
    }

    pub fn set_easing(&mut self, easing: Easing) -> Invalidation {
        let tag = self.elements.value.set_easing(easing);
        self.record(tag)
    }

    /// Advance the value animation by `dt` of wall-clock time.
    pub fn tick(&mut self, dt: Duration) -> Invalidation {
        let tag = self.elements.value.tick(dt);
        self.record(tag)
    }

    // ── Track ──────────────────────────────────────────────────

    pub fn set_stroke_width(&mut self, width: f32) -> Invalidation {
        let tag = self.elements.stroke.set_width(width);
        self.record(tag)
    }

    /// Resource id or literal, see [`HealthBar::set_text_color`].
    pub fn set_stroke_color(&mut self, color: u32) -> Invalidation {
        let color = color_or_literal(self.resources(), color);
        let tag = self.elements.stroke.set_color(color);
        self.record(tag)
    }

    pub fn set_start_color(&mut self, color: u32) -> Invalidation {
        let color = color_or_literal(self.resources(), color);
        let tag = self.elements.fill.set_start_color(color);
        self.record(tag)
    }

    pub fn set_end_color(&mut self, color: u32) -> Invalidation {
        let color = color_or_literal(self.resources(), color);
        let tag = self.elements.fill.set_end_color(color);
        self.record(tag)
    }

    // ── Indicator ──────────────────────────────────────────────

    pub fn set_indicator_width(&mut self, width: f32) -> Invalidation {
        let tag = self.elements.indicator.set_width(width);
        self.record(tag)
    }

    pub fn set_indicator_color(&mut self, color: u32) -> Invalidation {
        let color = color_or_literal(self.resources(), color);
        let tag = self.elements.indicator.set_color(color);
        self.record(tag)
    }

    pub fn set_indicator_top_overflow(&mut self, overflow: f32) -> Invalidation {
        let tag = self.elements.indicator.set_top_overflow(overflow);
        self.record(tag)
    }

    pub fn set_indicator_bottom_overflow(&mut self, overflow: f32) -> Invalidation {
        let tag = self.elements.indicator.set_bottom_overflow(overflow);
        self.record(tag)
    }

    // ── Labels ─────────────────────────────────────────────────

    pub fn labels(&self) -> &[String] {
        self.elements.label.categories()
    }

    pub fn labels_range(&self) -> Option<&[f64]> {
        self.elements.label.breakpoints()
    }

    /// Category chosen by the most recent draw.
    pub fn label(&self) -> Option<&str> {
        self.elements.label.resolved()
    }

    pub fn set_labels(&mut self, labels: Vec<String>) -> Invalidation {
        let tag = self.elements.label.set_categories(labels);
        self.record(tag)
    }

    pub fn set_labels_delimited(&mut self, labels: &str, separator: &str) -> Invalidation {
        let tag = self.elements.label.set_categories_delimited(labels, separator);
        self.record(tag)
    }

    /// Upper bounds, one per category. `None` returns to equal-width
    /// buckets.
    pub fn set_labels_range(&mut self, range: Option<Vec<f64>>) -> Invalidation {
        let tag = self.elements.label.set_breakpoints(range);
        self.record(tag)
    }

    pub fn set_labels_range_delimited(&mut self, range: &str, separator: &str) -> Invalidation {
        let tag = self.elements.label.set_breakpoints_delimited(range, separator);
        self.record(tag)
    }

    // ── Host callbacks ─────────────────────────────────────────

    /// Size under the host's per-axis constraints.
    pub fn measure<M: TextMetrics + ?Sized>(
        &self,
        metrics: &M,
        width: Constraint,
        height: Constraint,
    ) -> Size {
        layout::measure(metrics, &self.elements, self.padding, width, height)
    }

    /// Resolve this frame's geometry, paint it, and keep it for hit testing
    /// and inspection.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, size: Size) -> &BarGeometry {
        let geometry = layout::resolve_geometry(&*canvas, &self.elements, self.padding, size);
        layout::paint(canvas, &self.elements, &geometry);
        self.elements.label.set_resolved(geometry.category.clone());
        self.geometry.insert(geometry)
    }

    /// Geometry of the most recent draw.
    pub fn geometry(&self) -> Option<&BarGeometry> {
        self.geometry.as_ref()
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HealthBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthBar")
            .field("elements", &self.elements)
            .field("padding", &self.padding)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
