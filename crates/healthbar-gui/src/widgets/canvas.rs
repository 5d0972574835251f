/// `egui::Painter` adapter for the core layout engine.
///
/// Implements [`TextMetrics`] and [`Canvas`] so the core can measure text
/// and paint a bar without knowing about egui. Core coordinates are
/// relative to the widget's top-left corner; `origin` maps them into screen
/// space.
use healthbar_core::elements::TextStyle;
use healthbar_core::layout::{Canvas, FontMetrics, TextMetrics};
use healthbar_core::model::{Color, Font, Rect};
use egui::{Color32, FontFamily, FontId, Painter, Pos2, Stroke};
use std::sync::Arc;

/// Share of the row height above the baseline. egui does not expose the
/// baseline of a laid-out row, so a line is split 80/20 around it.
const ASCENT_RATIO: f32 = 0.8;

/// Core canvas drawing through an egui painter.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            Pos2::new(self.origin.x + rect.left, self.origin.y + rect.top),
            Pos2::new(self.origin.x + rect.right, self.origin.y + rect.bottom),
        )
    }

    /// The egui font for `style`. Families that were never registered
    /// with the context fall back to the proportional family rather than
    /// panicking inside the font atlas.
    fn font_id(&self, style: &TextStyle) -> FontId {
        let family = match style.font() {
            Font::Monospace => FontFamily::Monospace,
            Font::Proportional => FontFamily::Proportional,
            Font::Named(name) => {
                let named = FontFamily::Name(name.as_str().into());
                let known = self.painter.ctx().fonts(|f| f.families().contains(&named));
                if known {
                    named
                } else {
                    FontFamily::Proportional
                }
            }
        };
        FontId::new(style.size(), family)
    }

    fn layout(&self, text: &str, style: &TextStyle) -> Option<Arc<egui::Galley>> {
        if text.is_empty() || style.size() <= 0.0 {
            return None;
        }
        Some(self.painter.layout_no_wrap(
            text.to_string(),
            self.font_id(style),
            to_color32(style.color()),
        ))
    }
}

impl TextMetrics for PainterCanvas<'_> {
    fn advance_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.layout(text, style).map_or(0.0, |g| g.size().x)
    }

    fn bounds_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.layout(text, style).map_or(0.0, |g| g.mesh_bounds.width())
    }

    fn font_metrics(&self, style: &TextStyle) -> FontMetrics {
        if style.size() <= 0.0 {
            return FontMetrics::default();
        }
        let font_id = self.font_id(style);
        let row_height = self.painter.ctx().fonts(|f| f.row_height(&font_id));
        FontMetrics {
            ascent: -row_height * ASCENT_RATIO,
            descent: row_height * (1.0 - ASCENT_RATIO),
        }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.painter.rect_stroke(
            self.to_screen(rect),
            0.0,
            Stroke::new(width, to_color32(color)),
            egui::StrokeKind::Middle,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, to_color32(color));
    }

    fn fill_rect_gradient(&mut self, rect: Rect, start: Color, end: Color) {
        let rect = self.to_screen(rect);
        let (start, end) = (to_color32(start), to_color32(end));
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), start);
        mesh.colored_vertex(rect.right_top(), end);
        mesh.colored_vertex(rect.right_bottom(), end);
        mesh.colored_vertex(rect.left_bottom(), start);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(egui::Shape::mesh(mesh));
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle) {
        let Some(galley) = self.layout(text, style) else {
            return;
        };
        let metrics = self.font_metrics(style);
        let top_left = Pos2::new(
            self.origin.x + x,
            self.origin.y + baseline + metrics.ascent,
        );
        self.painter.galley(top_left, galley, to_color32(style.color()));
    }
}

/// Packed ARGB to an egui colour.
pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba_array();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
