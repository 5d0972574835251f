/// Batch application of an attribute bag.
use super::{ColorValue, FontValue, HealthBarConfig, NumberList, StringList};
use crate::elements::label::DEFAULT_SEPARATOR;
use crate::model::{Color, Padding};
use crate::widget::{HealthBar, Invalidation, TextTarget, ValueTarget};

/// Text options for one element, borrowed out of the bag.
struct TextOptions<'a> {
    show: Option<bool>,
    color: Option<&'a ColorValue>,
    size: Option<f32>,
    font: Option<&'a FontValue>,
}

impl HealthBar {
    /// Apply every option present in `config`.
    ///
    /// Options are applied in a fixed order: label, value text style,
    /// min/max, animation flags, the value itself, value formatting,
    /// indicator, stroke and fill. The range is set before the value so the
    /// value is clamped against the configured range, and animation is
    /// configured before the value so the first move can animate.
    ///
    /// Invalid entries (bad colour strings, number patterns or range lists)
    /// are logged and skipped. Returns the coalesced invalidation.
    pub fn apply_config(&mut self, config: &HealthBarConfig) -> Invalidation {
        let mut tag = Invalidation::NoOp;
        let separator = config.labels_separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);

        if let Some(padding) = config.padding {
            tag |= self.set_padding(Padding::uniform(padding));
        }

        // ── Label ──
        tag |= self.apply_text(
            TextTarget::Label,
            TextOptions {
                show: config.show_label,
                color: config.label_text_color.as_ref(),
                size: config.label_text_size,
                font: config.label_font.as_ref(),
            },
        );
        match &config.labels {
            Some(StringList::Items(items)) => tag |= self.set_labels(items.clone()),
            Some(StringList::Delimited(text)) => tag |= self.set_labels_delimited(text, separator),
            None => {}
        }
        match &config.labels_range {
            Some(NumberList::Items(items)) => tag |= self.set_labels_range(Some(items.clone())),
            Some(NumberList::Delimited(text)) => {
                tag |= self.set_labels_range_delimited(text, separator)
            }
            None => {}
        }

        // ── Value text style ──
        tag |= self.apply_text(
            TextTarget::Value,
            TextOptions {
                show: config.show_value,
                color: config.value_text_color.as_ref(),
                size: config.value_text_size,
                font: config.value_font.as_ref(),
            },
        );

        // ── Min / max ──
        tag |= self.apply_text(
            TextTarget::MinValue,
            TextOptions {
                show: config.show_min_value,
                color: config.min_text_color.as_ref(),
                size: config.min_text_size,
                font: config.min_font.as_ref(),
            },
        );
        tag |= self.apply_number_text(
            ValueTarget::MinValue,
            config.min_suffix.as_deref(),
            config.min_decimal_format.as_deref(),
        );
        if let Some(min) = config.min_value {
            tag |= self.set_min_value(min);
        }

        tag |= self.apply_text(
            TextTarget::MaxValue,
            TextOptions {
                show: config.show_max_value,
                color: config.max_text_color.as_ref(),
                size: config.max_text_size,
                font: config.max_font.as_ref(),
            },
        );
        tag |= self.apply_number_text(
            ValueTarget::MaxValue,
            config.max_suffix.as_deref(),
            config.max_decimal_format.as_deref(),
        );
        if let Some(max) = config.max_value {
            tag |= self.set_max_value(max);
        }

        // ── Animation, then the value ──
        if let Some(animated) = config.animated {
            tag |= self.set_animated(animated);
        }
        if let Some(duration) = config.animation_duration {
            tag |= self.set_animation_duration(duration);
        }
        if let Some(easing) = config.animation_easing {
            tag |= self.set_easing(easing);
        }
        if let Some(value) = config.value {
            tag |= self.set_value(value);
        }
        tag |= self.apply_number_text(
            ValueTarget::Value,
            config.value_suffix.as_deref(),
            config.value_decimal_format.as_deref(),
        );

        // ── Indicator ──
        if let Some(width) = config.indicator_width {
            tag |= self.set_indicator_width(width);
        }
        if let Some(color) = self.config_color(config.indicator_color.as_ref(), "indicatorColor") {
            let changed = self.elements.indicator.set_color(color);
            tag |= self.record(changed);
        }
        if let Some(overflow) = config.indicator_top_overflow {
            tag |= self.set_indicator_top_overflow(overflow);
        }
        if let Some(overflow) = config.indicator_bottom_overflow {
            tag |= self.set_indicator_bottom_overflow(overflow);
        }

        // ── Stroke and fill ──
        if let Some(width) = config.stroke_width {
            tag |= self.set_stroke_width(width);
        }
        if let Some(color) = self.config_color(config.stroke_color.as_ref(), "strokeColor") {
            let changed = self.elements.stroke.set_color(color);
            tag |= self.record(changed);
        }
        if let Some(color) = self.config_color(config.start_color.as_ref(), "startColor") {
            let changed = self.elements.fill.set_start_color(color);
            tag |= self.record(changed);
        }
        if let Some(color) = self.config_color(config.end_color.as_ref(), "endColor") {
            let changed = self.elements.fill.set_end_color(color);
            tag |= self.record(changed);
        }

        tracing::debug!("Applied configuration -- {:?}", tag);
        tag
    }

    fn apply_text(&mut self, target: TextTarget, options: TextOptions<'_>) -> Invalidation {
        let mut tag = Invalidation::NoOp;
        if let Some(show) = options.show {
            tag |= self.set_visible(target, show);
        }
        if let Some(color) = self.config_color(options.color, "text colour") {
            let changed = self.text_style_mut(target).set_color(color);
            tag |= self.record(changed);
        }
        if let Some(size) = options.size {
            tag |= self.set_text_size(target, size);
        }
        match options.font {
            Some(FontValue::Resource(id)) => tag |= self.set_font(target, *id),
            Some(FontValue::Family(font)) => tag |= self.set_font_family(target, font.clone()),
            None => {}
        }
        tag
    }

    fn apply_number_text(
        &mut self,
        target: ValueTarget,
        suffix: Option<&str>,
        pattern: Option<&str>,
    ) -> Invalidation {
        let mut tag = self.set_suffix(target, suffix);
        if let Some(pattern) = pattern {
            tag |= self.set_decimal_pattern(target, pattern);
        }
        tag
    }

    /// Resolve a colour option, logging and dropping unparseable strings.
    fn config_color(&self, value: Option<&ColorValue>, option: &str) -> Option<Color> {
        match value?.resolve(self.resources()) {
            Ok(color) => Some(color),
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", option, e);
                None
            }
        }
    }
}
