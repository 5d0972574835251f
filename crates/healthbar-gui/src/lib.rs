/// HealthBar GUI -- egui host for the health bar widget plus a demo app.
///
/// Layout, labels and animation live in `healthbar-core`; this crate
/// supplies the egui canvas, the per-frame widget and the demo window.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{HealthBarApp, HealthBarState};
pub use widgets::canvas::PainterCanvas;
pub use widgets::health_bar::health_bar;
