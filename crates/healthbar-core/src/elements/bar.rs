/// Track outline, gradient fill and position marker.
use super::text::non_negative;
use crate::model::Color;
use crate::widget::Invalidation;

pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;
pub const DEFAULT_STROKE_COLOR: Color = Color::from_argb(0xff00_9688);
pub const DEFAULT_START_COLOR: Color = Color::from_argb(0xffff_c200);
pub const DEFAULT_END_COLOR: Color = Color::from_argb(0xff7b_fbaf);
pub const DEFAULT_INDICATOR_WIDTH: f32 = 0.5;
pub const DEFAULT_INDICATOR_COLOR: Color = Color::from_argb(0xff00_9688);
pub const DEFAULT_INDICATOR_OVERFLOW: f32 = 5.0;

/// The track outline, drawn centred on its own width.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeElement {
    pub(crate) width: f32,
    pub(crate) color: Color,
}

impl StrokeElement {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_width(&mut self, width: f32) -> Invalidation {
        let width = non_negative(width);
        let changed = self.width != width;
        self.width = width;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    pub fn set_color(&mut self, color: Color) -> Invalidation {
        let changed = self.color != color;
        self.color = color;
        Invalidation::when(changed, Invalidation::NeedsRepaint)
    }
}

impl Default for StrokeElement {
    fn default() -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            color: DEFAULT_STROKE_COLOR,
        }
    }
}

/// Endpoints of the left-to-right gradient inside the track.
#[derive(Debug, Clone, PartialEq)]
pub struct FillElement {
    pub(crate) start_color: Color,
    pub(crate) end_color: Color,
}

impl FillElement {
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn end_color(&self) -> Color {
        self.end_color
    }

    /// A fill whose endpoints match paints as a flat colour.
    pub fn is_solid(&self) -> bool {
        self.start_color == self.end_color
    }

    pub fn set_start_color(&mut self, color: Color) -> Invalidation {
        let changed = self.start_color != color;
        self.start_color = color;
        Invalidation::when(changed, Invalidation::NeedsRepaint)
    }

    pub fn set_end_color(&mut self, color: Color) -> Invalidation {
        let changed = self.end_color != color;
        self.end_color = color;
        Invalidation::when(changed, Invalidation::NeedsRepaint)
    }
}

impl Default for FillElement {
    fn default() -> Self {
        Self {
            start_color: DEFAULT_START_COLOR,
            end_color: DEFAULT_END_COLOR,
        }
    }
}

/// Vertical marker at the displayed value.
///
/// `top_overflow` / `bottom_overflow` are how far the marker reaches above
/// and below the track outline.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorElement {
    pub(crate) width: f32,
    pub(crate) color: Color,
    pub(crate) top_overflow: f32,
    pub(crate) bottom_overflow: f32,
}

impl IndicatorElement {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn top_overflow(&self) -> f32 {
        self.top_overflow
    }

    pub fn bottom_overflow(&self) -> f32 {
        self.bottom_overflow
    }

    pub fn set_width(&mut self, width: f32) -> Invalidation {
        let width = non_negative(width);
        let changed = self.width != width;
        self.width = width;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    pub fn set_color(&mut self, color: Color) -> Invalidation {
        let changed = self.color != color;
        self.color = color;
        Invalidation::when(changed, Invalidation::NeedsRepaint)
    }

    pub fn set_top_overflow(&mut self, overflow: f32) -> Invalidation {
        let overflow = non_negative(overflow);
        let changed = self.top_overflow != overflow;
        self.top_overflow = overflow;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    pub fn set_bottom_overflow(&mut self, overflow: f32) -> Invalidation {
        let overflow = non_negative(overflow);
        let changed = self.bottom_overflow != overflow;
        self.bottom_overflow = overflow;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }
}

impl Default for IndicatorElement {
    fn default() -> Self {
        Self {
            width: DEFAULT_INDICATOR_WIDTH,
            color: DEFAULT_INDICATOR_COLOR,
            top_overflow: DEFAULT_INDICATOR_OVERFLOW,
            bottom_overflow: DEFAULT_INDICATOR_OVERFLOW,
        }
    }
}
