/// Attributes shared by every piece of drawn text.
use crate::model::{Color, Font};
use crate::widget::Invalidation;

/// Default colour for value and label text.
pub const DEFAULT_TEXT_COLOR: Color = Color::from_argb(0xff00_9688);

/// Default text size in logical units.
pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// Visibility, colour, size and font of one text element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub(crate) visible: bool,
    pub(crate) color: Color,
    pub(crate) size: f32,
    pub(crate) font: Font,
}

impl TextStyle {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            color: DEFAULT_TEXT_COLOR,
            size: DEFAULT_TEXT_SIZE,
            font: Font::default(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_visible(&mut self, visible: bool) -> Invalidation {
        let changed = self.visible != visible;
        self.visible = visible;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    pub fn set_color(&mut self, color: Color) -> Invalidation {
        let changed = self.color != color;
        self.color = color;
        Invalidation::when(changed, Invalidation::NeedsRepaint)
    }

    /// Negative and NaN sizes are stored as zero.
    pub fn set_size(&mut self, size: f32) -> Invalidation {
        let size = non_negative(size);
        let changed = self.size != size;
        self.size = size;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    pub fn set_font(&mut self, font: Font) -> Invalidation {
        let changed = self.font != font;
        self.font = font;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Clamp a length to `>= 0`, mapping NaN to zero.
pub(crate) fn non_negative(length: f32) -> f32 {
    if length > 0.0 {
        length
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_report_change_kind() {
        let mut style = TextStyle::default();
        assert_eq!(style.set_color(Color::BLACK), Invalidation::NeedsRepaint);
        assert_eq!(style.set_color(Color::BLACK), Invalidation::NoOp);
        assert_eq!(style.set_size(20.0), Invalidation::NeedsRelayout);
        assert_eq!(style.set_visible(false), Invalidation::NeedsRelayout);
        assert_eq!(style.set_font(Font::Proportional), Invalidation::NeedsRelayout);
        assert_eq!(style.set_font(Font::Proportional), Invalidation::NoOp);
    }

    #[test]
    fn test_size_never_negative() {
        let mut style = TextStyle::default();
        style.set_size(-4.0);
        assert_eq!(style.size(), 0.0);
        style.set_size(f32::NAN);
        assert_eq!(style.size(), 0.0);
    }
}
