/// Colour scheme and visual theme for the HealthBar demo.
///
/// Two layers live here: the window palette (dark and light) applied to
/// the egui context, and the brand resource table that health bars resolve
/// colour and font ids against.
use healthbar_core::model::{Color, Font};
use healthbar_core::resources::{ResourceId, ResourceResolver};
use egui::{Color32, Stroke, Visuals};

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }
}

/// Semantic colour palette for the demo window.
pub struct DemoTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub separator: Color32,
    pub selection: Color32,
}

impl DemoTheme {
    /// Dark theme -- the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1c, 0x22, 0x24),
            surface: Color32::from_rgb(0x26, 0x2e, 0x31),
            surface_hover: Color32::from_rgb(0x31, 0x3b, 0x3e),
            text_primary: Color32::from_rgb(0xe6, 0xec, 0xea),
            text_secondary: Color32::from_rgb(0xb4, 0xc0, 0xbd),
            accent: Color32::from_rgb(0x4d, 0xb6, 0xac),
            separator: Color32::from_rgb(0x37, 0x42, 0x45),
            selection: Color32::from_rgb(0x1f, 0x4a, 0x46),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf4, 0xf6, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe6, 0xee, 0xec),
            text_primary: Color32::from_rgb(0x1c, 0x22, 0x24),
            text_secondary: Color32::from_rgb(0x45, 0x52, 0x50),
            accent: Color32::from_rgb(0x00, 0x79, 0x6b),
            separator: Color32::from_rgb(0xd2, 0xda, 0xd8),
            selection: Color32::from_rgba_premultiplied(0x00, 0x79, 0x6b, 0x30),
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

// ── Brand resources ────────────────────────────────────────────

/// Resource ids understood by [`BrandResources`].
pub mod ids {
    use healthbar_core::resources::ResourceId;

    pub const COLOR_PRIMARY: ResourceId = 0x7f05_0001;
    pub const COLOR_PRIMARY_DARK: ResourceId = 0x7f05_0002;
    pub const COLOR_ACCENT: ResourceId = 0x7f05_0003;
    pub const COLOR_WARNING: ResourceId = 0x7f05_0004;

    pub const FONT_BODY: ResourceId = 0x7f08_0001;
    pub const FONT_MONO: ResourceId = 0x7f08_0002;
}

/// Fixed brand palette and fonts handed to every health bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrandResources;

impl ResourceResolver for BrandResources {
    fn resolve_color(&self, id: ResourceId) -> Option<Color> {
        match id {
            ids::COLOR_PRIMARY => Some(Color::from_argb(0xff00_9688)),
            ids::COLOR_PRIMARY_DARK => Some(Color::from_argb(0xff00_796b)),
            ids::COLOR_ACCENT => Some(Color::from_argb(0xffff_4081)),
            ids::COLOR_WARNING => Some(Color::from_argb(0xffff_c200)),
            _ => None,
        }
    }

    fn resolve_font(&self, id: ResourceId) -> Option<Font> {
        match id {
            ids::FONT_BODY => Some(Font::Proportional),
            ids::FONT_MONO => Some(Font::Monospace),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        let mut mode = ThemeMode::Dark;
        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn test_brand_ids_resolve() {
        assert_eq!(
            BrandResources.resolve_color(ids::COLOR_PRIMARY),
            Some(Color::from_argb(0xff00_9688))
        );
        assert_eq!(BrandResources.resolve_font(ids::FONT_BODY), Some(Font::Proportional));
        // Literal colours are not ids.
        assert_eq!(BrandResources.resolve_color(0xff00_0000), None);
        assert_eq!(BrandResources.resolve_font(ids::COLOR_PRIMARY), None);
    }
}
