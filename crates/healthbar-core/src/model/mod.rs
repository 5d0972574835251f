/// Value types shared by the elements, the layout engine and the host adapter.
pub mod color;
pub mod font;
pub mod format;
pub mod geometry;

pub use color::Color;
pub use font::Font;
pub use format::NumberFormat;
pub use geometry::{Padding, Rect, Size};
