/// Resource resolution boundary.
///
/// Colour and font setters accept integer resource ids. The host injects a
/// [`ResourceResolver`] that turns ids into concrete values; when it cannot,
/// colours fall back to treating the id as a literal `0xAARRGGBB` value and
/// font changes are dropped with a warning.
use crate::model::{Color, Font};

/// Integer handle into the host's resource tables.
pub type ResourceId = u32;

/// Host capability that resolves resource ids.
pub trait ResourceResolver {
    /// Look up a colour resource. `None` when `id` names no colour.
    fn resolve_color(&self, id: ResourceId) -> Option<Color>;

    /// Look up a font resource. `None` when `id` names no font.
    fn resolve_font(&self, id: ResourceId) -> Option<Font>;
}

/// Resolver with empty resource tables: every colour is a literal and
/// every font id is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceResolver for NoResources {
    fn resolve_color(&self, _id: ResourceId) -> Option<Color> {
        None
    }

    fn resolve_font(&self, _id: ResourceId) -> Option<Font> {
        None
    }
}

/// Resolve `raw` as a colour resource, falling back to the literal value.
pub fn color_or_literal(resolver: &dyn ResourceResolver, raw: u32) -> Color {
    match resolver.resolve_color(raw) {
        Some(color) => color,
        None => {
            tracing::debug!("Colour resource {:#010x} not found -- using it as a literal", raw);
            Color::from_argb(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneColor;

    impl ResourceResolver for OneColor {
        fn resolve_color(&self, id: ResourceId) -> Option<Color> {
            (id == 7).then_some(Color::from_rgb(1, 2, 3))
        }

        fn resolve_font(&self, _id: ResourceId) -> Option<Font> {
            None
        }
    }

    #[test]
    fn test_resolved_colour_wins() {
        assert_eq!(color_or_literal(&OneColor, 7), Color::from_rgb(1, 2, 3));
    }

    #[test]
    fn test_unknown_colour_is_literal() {
        assert_eq!(color_or_literal(&OneColor, 0xff00_9688), Color(0xff00_9688));
        assert_eq!(color_or_literal(&NoResources, 0x1234_5678), Color(0x1234_5678));
    }
}
