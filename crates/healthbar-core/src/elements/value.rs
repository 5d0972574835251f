/// Labelled numeric fields: the min/max boundary labels and the current value.
///
/// All three share one [`ValueField`] type; they differ only in their
/// defaults. The current value additionally owns the animation state in
/// [`CurrentValue`].
use super::text::TextStyle;
use crate::animation::{scaled_duration, Easing, ValueAnimator, DEFAULT_ANIMATION_DURATION};
use crate::model::NumberFormat;
use crate::widget::Invalidation;
use std::time::Duration;

/// Construction defaults for a [`ValueField`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDefaults {
    pub visible: bool,
    pub value: f64,
}

impl ValueDefaults {
    /// Left boundary label: hidden, `0`.
    pub const MIN: ValueDefaults = ValueDefaults {
        visible: false,
        value: 0.0,
    };

    /// Right boundary label: hidden, `100`.
    pub const MAX: ValueDefaults = ValueDefaults {
        visible: false,
        value: 100.0,
    };

    /// Current-value label above the indicator: shown, `0`.
    pub const CURRENT: ValueDefaults = ValueDefaults {
        visible: true,
        value: 0.0,
    };
}

/// A number drawn as text with a suffix and a number format.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueField {
    pub(crate) style: TextStyle,
    pub(crate) value: f64,
    pub(crate) suffix: String,
    pub(crate) format: NumberFormat,
}

impl ValueField {
    pub fn new(defaults: ValueDefaults) -> Self {
        Self {
            style: TextStyle::new(defaults.visible),
            value: defaults.value,
            suffix: String::new(),
            format: NumberFormat::default(),
        }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        &mut self.style
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// The field's own value as display text.
    pub fn text(&self) -> String {
        self.text_for(self.value)
    }

    /// `value` formatted with this field's number format and suffix.
    pub fn text_for(&self, value: f64) -> String {
        let mut text = self.format.format(value);
        text.push_str(&self.suffix);
        text
    }

    pub fn set_value(&mut self, value: f64) -> Invalidation {
        let changed = self.value != value;
        self.value = value;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    /// `None` leaves the suffix untouched.
    pub fn set_suffix(&mut self, suffix: Option<&str>) -> Invalidation {
        let Some(suffix) = suffix else {
            return Invalidation::NoOp;
        };
        let changed = self.suffix != suffix;
        self.suffix = suffix.to_string();
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    /// `None` leaves the format untouched.
    pub fn set_format(&mut self, format: Option<NumberFormat>) -> Invalidation {
        let Some(format) = format else {
            return Invalidation::NoOp;
        };
        let changed = self.format != format;
        self.format = format;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    /// Compile and apply `pattern`. An invalid pattern is logged and the
    /// previous format is kept.
    pub fn set_format_pattern(&mut self, pattern: &str) -> Invalidation {
        match NumberFormat::parse(pattern) {
            Ok(format) => self.set_format(Some(format)),
            Err(e) => {
                tracing::warn!(
                    "Rejected number pattern {:?}: {} -- keeping {:?}",
                    pattern,
                    e,
                    self.format.pattern()
                );
                Invalidation::NoOp
            }
        }
    }
}

/// `true` when `value` lies in the closed range spanned by `a` and `b`,
/// whichever order they come in.
pub fn is_between(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Clamp `value` into the closed range spanned by `a` and `b`.
///
/// NaN maps to the lower end so indicator placement always lands on the
/// track.
pub fn clamp_to_range(value: f64, a: f64, b: f64) -> f64 {
    let lo = a.min(b);
    let hi = a.max(b);
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

/// The value shown by the indicator, with its animation controller.
///
/// `current` is what the last `set_value` settled on; `displayed` is the
/// possibly mid-animation value the indicator and labels are drawn at.
#[derive(Debug, Clone)]
pub struct CurrentValue {
    pub(crate) field: ValueField,
    displayed: f64,
    animated: bool,
    animation_duration: Duration,
    animator: ValueAnimator,
}

impl CurrentValue {
    pub fn new() -> Self {
        let field = ValueField::new(ValueDefaults::CURRENT);
        Self {
            displayed: field.value,
            field,
            animated: false,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            animator: ValueAnimator::default(),
        }
    }

    pub fn field(&self) -> &ValueField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ValueField {
        &mut self.field
    }

    pub fn current(&self) -> f64 {
        self.field.value
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Display text for the displayed (animated) value.
    pub fn text(&self) -> String {
        self.field.text_for(self.displayed)
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    pub fn easing(&self) -> Easing {
        self.animator.easing()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Disabling animation finishes any in-flight run at its target.
    pub fn set_animated(&mut self, animated: bool) -> Invalidation {
        self.animated = animated;
        if !animated && self.animator.cancel() {
            self.displayed = self.field.value;
            return Invalidation::NeedsRepaint;
        }
        Invalidation::NoOp
    }

    /// Negative durations are treated as zero.
    pub fn set_animation_duration_ms(&mut self, millis: i64) -> Invalidation {
        self.animation_duration = Duration::from_millis(millis.max(0) as u64);
        Invalidation::NoOp
    }

    pub fn set_easing(&mut self, easing: Easing) -> Invalidation {
        self.animator.set_easing(easing);
        Invalidation::NoOp
    }

    /// Move to `value`, clamped into `[min, max]`.
    ///
    /// A value outside the range snaps to `min`, not to the nearer bound.
    /// Any in-flight animation is cancelled first, even when the value does
    /// not change. With animation enabled the move takes a share of the
    /// configured duration proportional to its length.
    pub fn set_value(&mut self, value: f64, min: f64, max: f64) -> Invalidation {
        let previous = self.field.value;
        let target = if is_between(value, min, max) { value } else { min };
        let layout = self.field.set_value(target);

        self.animator.cancel();

        if self.animated {
            let duration = scaled_duration(self.animation_duration, previous, target, min, max);
            let frame = self.animator.start(previous, target, duration);
            self.displayed = frame.value;
        } else {
            self.displayed = target;
        }

        layout | Invalidation::NeedsRepaint
    }

    /// Advance the animation by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Invalidation {
        match self.animator.advance(dt) {
            Some(frame) => {
                self.displayed = frame.value;
                Invalidation::NeedsRepaint
            }
            None => Invalidation::NoOp,
        }
    }
}

impl Default for CurrentValue {
    fn default() -> Self {
        Self::new()
    }
}
