/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes: the demo
/// bars, the configuration editor buffer and window toggles. Every health
/// bar is owned here; widgets borrow them once per frame.
use crate::theme::{ids, BrandResources, ThemeMode};
use healthbar_core::model::NumberFormat;
use healthbar_core::{HealthBar, HealthBarConfig, HealthBarError, Invalidation, TextTarget, ValueTarget};

/// Declarative sample: the activity screen bar written as an attribute bag.
pub const SAMPLE_MARKUP: &str = r##"{
  "showMinValue": true,
  "minValue": -20,
  "minSuffix": " pts",
  "minDecimalFormat": "0.0",
  "showMaxValue": true,
  "maxValue": 34,
  "maxSuffix": " pts",
  "maxDecimalFormat": "0.0",
  "valueSuffix": " pts",
  "valueDecimalFormat": "0.0",
  "indicatorTopOverflow": 15,
  "indicatorBottomOverflow": 15,
  "animated": true,
  "animationDuration": 4000,
  "value": 16.1,
  "labelFont": "Proportional",
  "labelTextSize": 18,
  "labels": "Poor,Below Average,Average,Above Average,Good,Excellent",
  "labelsRange": "-10,0,10,15,28,34",
  "strokeColor": "#009688",
  "startColor": "#00796B",
  "endColor": "#FF4081"
}"##;

/// Declarative sample with explicit breakpoints, a linear easing and a
/// named font family.
pub const SAMPLE_PAIN_SCALE: &str = r##"{
  "minValue": 0,
  "maxValue": 10,
  "value": 3,
  "valueDecimalFormat": "0",
  "animated": true,
  "animationDuration": 1500,
  "animationEasing": "linear",
  "labelFont": { "Named": "display" },
  "labels": ["None", "Mild", "Moderate", "Severe"],
  "labelsRange": [1, 4, 7, 10],
  "startColor": "#A5D6A7",
  "endColor": "#EF5350",
  "indicatorColor": "#37474F",
  "indicatorWidth": 3,
  "padding": 4
}"##;

/// Quick-set positions as a fraction of each bar's range. Positions outside
/// `0..=1` are out of range and snap the indicator to the minimum.
pub const PRESETS: &[(&str, f64)] = &[
    ("Under", -0.25),
    ("Min", 0.0),
    ("¼", 0.25),
    ("½", 0.5),
    ("¾", 0.75),
    ("Max", 1.0),
    ("Over", 1.25),
];

/// One bar shown in the demo window.
pub struct DemoBar {
    pub title: String,
    pub bar: HealthBar,
    /// Attribute bag the bar was last configured from (`{}` for bars
    /// configured in code). Shown in the editor when selected.
    pub source: String,
}

impl DemoBar {
    fn new(title: &str, bar: HealthBar, source: &str) -> Self {
        Self {
            title: title.to_string(),
            bar,
            source: source.to_string(),
        }
    }
}

/// Top-level application state.
pub struct AppState {
    // ── Bars ───────────────────────────────────────────
    pub bars: Vec<DemoBar>,
    pub selected: Option<usize>,
    /// Slider position as a fraction of each bar's range.
    pub fraction: f64,

    // ── Editor ─────────────────────────────────────────
    pub config_text: String,
    pub last_error: Option<String>,

    // ── UI state ───────────────────────────────────────
    pub animated: bool,
    pub show_config_panel: bool,
    pub show_about: bool,
    pub theme_mode: ThemeMode,
}

impl AppState {
    /// Build the sample bars.
    pub fn new() -> Self {
        let mut state = Self {
            bars: Vec::new(),
            selected: None,
            fraction: 0.5,
            config_text: String::new(),
            last_error: None,
            animated: true,
            show_config_panel: true,
            show_about: false,
            theme_mode: ThemeMode::Dark,
        };

        state.bars.push(DemoBar::new("Activity (code)", activity_bar(), "{}"));
        for (title, json) in [
            ("Activity (markup)", SAMPLE_MARKUP),
            ("Pain scale", SAMPLE_PAIN_SCALE),
        ] {
            if let Err(e) = state.add_from_json(title, json) {
                tracing::warn!("Sample '{}' failed to load: {}", title, e);
            }
        }
        state.bars.push(DemoBar::new(
            "Defaults",
            HealthBar::with_resources(Box::new(BrandResources)),
            "{}",
        ));

        state.select(0);
        tracing::info!("Demo ready -- {} bars", state.bars.len());
        state
    }

    /// Parse `json` and add a bar configured from it. Returns its index.
    pub fn add_from_json(&mut self, title: &str, json: &str) -> Result<usize, HealthBarError> {
        let config = HealthBarConfig::from_json(json)?;
        let mut bar = HealthBar::with_resources(Box::new(BrandResources));
        bar.apply_config(&config);
        self.bars.push(DemoBar::new(title, bar, json));
        Ok(self.bars.len() - 1)
    }

    /// Make bar `index` the editor target and load its source text.
    pub fn select(&mut self, index: usize) {
        let Some(demo) = self.bars.get(index) else {
            return;
        };
        self.selected = Some(index);
        self.config_text = demo.source.clone();
        self.last_error = None;
    }

    /// Apply the editor buffer to the selected bar on top of its current
    /// configuration. Parse failures are kept in `last_error`.
    pub fn apply_editor(&mut self) -> Result<Invalidation, HealthBarError> {
        let Some(index) = self.selected else {
            return Ok(Invalidation::NoOp);
        };
        let config = match HealthBarConfig::from_json(&self.config_text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Editor config rejected -- {}", e);
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.last_error = None;
        let demo = &mut self.bars[index];
        let tag = demo.bar.apply_config(&config);
        demo.source = self.config_text.clone();
        tracing::info!("Applied editor config to '{}' -- {:?}", demo.title, tag);
        Ok(tag)
    }

    /// Rewrite the editor buffer as pretty-printed JSON with only the
    /// options it sets. The bar itself is not touched.
    pub fn format_editor(&mut self) -> Result<(), HealthBarError> {
        let formatted = HealthBarConfig::from_json(&self.config_text).and_then(|c| c.to_json());
        match formatted {
            Ok(text) => {
                self.config_text = text;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Editor config could not be formatted -- {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Move every bar to `fraction` of its own range.
    pub fn set_fraction(&mut self, fraction: f64) {
        self.fraction = fraction;
        for demo in &mut self.bars {
            let (min, max) = (demo.bar.min_value(), demo.bar.max_value());
            demo.bar.set_value(min + (max - min) * fraction);
        }
    }

    /// Turn animation on or off for every bar. Switching it off snaps
    /// running animations to their targets.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        for demo in &mut self.bars {
            demo.bar.set_animated(animated);
        }
    }

    /// Number of bars with an animation in flight.
    pub fn animating_count(&self) -> usize {
        self.bars.iter().filter(|d| d.bar.is_animating()).count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The activity screen bar configured through setters and brand resources.
fn activity_bar() -> HealthBar {
    let mut bar = HealthBar::with_resources(Box::new(BrandResources));
    let one_decimal = NumberFormat::parse("0.0").ok();

    bar.set_visible(TextTarget::MinValue, true);
    bar.set_min_value(-20.0);
    bar.set_suffix(ValueTarget::MinValue, Some(" pts"));
    bar.set_decimal_format(ValueTarget::MinValue, one_decimal.clone());

    bar.set_max_value(34.0);
    bar.set_visible(TextTarget::MaxValue, true);
    bar.set_suffix(ValueTarget::MaxValue, Some(" pts"));
    bar.set_decimal_format(ValueTarget::MaxValue, one_decimal.clone());

    bar.set_indicator_top_overflow(15.0);
    bar.set_indicator_bottom_overflow(15.0);

    bar.set_suffix(ValueTarget::Value, Some(" pts"));
    bar.set_decimal_format(ValueTarget::Value, one_decimal);
    bar.set_animated(true);
    bar.set_animation_duration(4000);
    bar.set_value(16.1);

    bar.set_stroke_color(ids::COLOR_PRIMARY);
    bar.set_start_color(ids::COLOR_PRIMARY_DARK);
    bar.set_end_color(ids::COLOR_ACCENT);
    bar.set_text_color(TextTarget::Label, ids::COLOR_ACCENT);

    bar.set_font(TextTarget::Label, ids::FONT_BODY);
    bar.set_labels_delimited("Poor,Below Average,Average,Above Average,Good,Excellent", ",");
    bar.set_labels_range(Some(vec![-10.0, 0.0, 10.0, 15.0, 28.0, 34.0]));

    bar.take_invalidation();
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_parse() {
        assert!(HealthBarConfig::from_json(SAMPLE_MARKUP).is_ok());
        assert!(HealthBarConfig::from_json(SAMPLE_PAIN_SCALE).is_ok());
    }

    #[test]
    fn test_code_and_markup_samples_agree() {
        let state = AppState::new();
        let code = &state.bars[0].bar;
        let markup = &state.bars[1].bar;
        assert_eq!(code.min_value(), markup.min_value());
        assert_eq!(code.max_value(), markup.max_value());
        assert_eq!(code.value(), markup.value());
        assert_eq!(code.labels(), markup.labels());
        assert_eq!(code.labels_range(), markup.labels_range());
        assert_eq!(
            code.value_field(ValueTarget::Value).text(),
            markup.value_field(ValueTarget::Value).text()
        );
        assert_eq!(code.elements().stroke.color(), markup.elements().stroke.color());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = AppState::new();
        state.select(99);
        assert_eq!(state.selected, Some(0));
    }
}
