/// Font handle carried by text elements.
///
/// The core never rasterises glyphs; a `Font` only names the family the
/// host's canvas should use when measuring and drawing a string.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Font {
    /// Fixed-width family. The default for every text element.
    #[default]
    Monospace,
    Proportional,
    /// A family registered with the host under this name.
    Named(String),
}

impl Font {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}
