/// The configurable pieces of a health bar.
///
/// Each element owns its own attributes and reports, through an
/// [`Invalidation`](crate::widget::Invalidation) tag, what a change to them
/// costs. [`BarElements`] groups one of each so the layout engine can be
/// driven without the widget shell.
pub mod bar;
pub mod label;
pub mod text;
pub mod value;

pub use bar::{FillElement, IndicatorElement, StrokeElement};
pub use label::{resolve_category, LabelElement};
pub use text::TextStyle;
pub use value::{CurrentValue, ValueDefaults, ValueField};

/// Every element of one bar, in draw order.
#[derive(Debug, Clone)]
pub struct BarElements {
    pub min: ValueField,
    pub max: ValueField,
    pub value: CurrentValue,
    pub stroke: StrokeElement,
    pub fill: FillElement,
    pub indicator: IndicatorElement,
    pub label: LabelElement,
}

impl BarElements {
    pub fn new() -> Self {
        Self {
            min: ValueField::new(ValueDefaults::MIN),
            max: ValueField::new(ValueDefaults::MAX),
            value: CurrentValue::new(),
            stroke: StrokeElement::default(),
            fill: FillElement::default(),
            indicator: IndicatorElement::default(),
            label: LabelElement::new(),
        }
    }

    pub fn min_value(&self) -> f64 {
        self.min.value()
    }

    pub fn max_value(&self) -> f64 {
        self.max.value()
    }
}

impl Default for BarElements {
    fn default() -> Self {
        Self::new()
    }
}
