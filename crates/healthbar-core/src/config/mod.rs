/// Declarative attribute bag.
///
/// [`HealthBarConfig`] is the typed form of a markup attribute table: every
/// option is independently optional and absent options leave the widget
/// untouched. Bags are usually loaded from JSON with camelCase keys:
///
/// ```json
/// { "showMinValue": true, "minValue": -20, "minSuffix": " pts",
///   "startColor": "#FFC200", "labels": "Poor,Good,Excellent" }
/// ```
///
/// Applying a bag to a widget is done by
/// [`HealthBar::apply_config`](crate::widget::HealthBar::apply_config).
mod apply;

use crate::animation::Easing;
use crate::error::HealthBarError;
use crate::model::{Color, Font};
use crate::resources::{color_or_literal, ResourceId, ResourceResolver};
use serde::{Deserialize, Serialize};

/// A colour option: an integer (resource id or `0xAARRGGBB` literal) or a
/// `#RRGGBB` / `#AARRGGBB` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Raw(u32),
    Literal(String),
}

impl ColorValue {
    pub fn resolve(&self, resolver: &dyn ResourceResolver) -> Result<Color, HealthBarError> {
        match self {
            ColorValue::Raw(raw) => Ok(color_or_literal(resolver, *raw)),
            ColorValue::Literal(text) => Color::parse(text),
        }
    }
}

/// A font option: a font resource id or a family given inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontValue {
    Resource(ResourceId),
    Family(Font),
}

/// Category names, as an array or one delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Items(Vec<String>),
    Delimited(String),
}

/// Category breakpoints, as an array or one delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberList {
    Items(Vec<f64>),
    Delimited(String),
}

/// Every configurable option of a health bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthBarConfig {
    /// Uniform padding on every edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,

    // ── Visibility ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_min_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_max_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_label: Option<bool>,

    // ── Text colour ──
    #[serde(alias = "minValueTextColor", skip_serializing_if = "Option::is_none")]
    pub min_text_color: Option<ColorValue>,
    #[serde(alias = "maxValueTextColor", skip_serializing_if = "Option::is_none")]
    pub max_text_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text_color: Option<ColorValue>,

    // ── Text size ──
    #[serde(alias = "minValueTextSize", skip_serializing_if = "Option::is_none")]
    pub min_text_size: Option<f32>,
    #[serde(alias = "maxValueTextSize", skip_serializing_if = "Option::is_none")]
    pub max_text_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text_size: Option<f32>,

    // ── Font ──
    #[serde(alias = "minValueFont", skip_serializing_if = "Option::is_none")]
    pub min_font: Option<FontValue>,
    #[serde(alias = "maxValueFont", skip_serializing_if = "Option::is_none")]
    pub max_font: Option<FontValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_font: Option<FontValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font: Option<FontValue>,

    // ── Number text ──
    #[serde(alias = "minValueSuffix", skip_serializing_if = "Option::is_none")]
    pub min_suffix: Option<String>,
    #[serde(alias = "maxValueSuffix", skip_serializing_if = "Option::is_none")]
    pub max_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_suffix: Option<String>,
    #[serde(alias = "minValueDecimalFormat", skip_serializing_if = "Option::is_none")]
    pub min_decimal_format: Option<String>,
    #[serde(alias = "maxValueDecimalFormat", skip_serializing_if = "Option::is_none")]
    pub max_decimal_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_decimal_format: Option<String>,

    // ── Range and value ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    // ── Animation ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    /// Milliseconds for a full-range move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<Easing>,

    // ── Track ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<ColorValue>,
    #[serde(alias = "colorFrom", skip_serializing_if = "Option::is_none")]
    pub start_color: Option<ColorValue>,
    #[serde(alias = "colorTo", skip_serializing_if = "Option::is_none")]
    pub end_color: Option<ColorValue>,

    // ── Indicator ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_top_overflow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_bottom_overflow: Option<f32>,

    // ── Labels ──
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<StringList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_range: Option<NumberList>,
    /// Separator for the delimited forms of `labels` / `labelsRange`.
    /// Defaults to `,`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_separator: Option<String>,
}

impl HealthBarConfig {
    /// Parse a bag from JSON text.
    pub fn from_json(text: &str) -> Result<Self, HealthBarError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty-printed JSON holding only the options that are set.
    pub fn to_json(&self) -> Result<String, HealthBarError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
