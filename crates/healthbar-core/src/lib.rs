/// HealthBar Core -- layout, label resolution and animation for a horizontal
/// health bar widget.
///
/// This crate has no UI dependencies. A host toolkit plugs in through the
/// [`layout::TextMetrics`] and [`layout::Canvas`] traits and, optionally, a
/// [`resources::ResourceResolver`].
///
/// # Modules
///
/// - [`model`]: Colours, fonts, geometry and number formatting.
/// - [`elements`]: Text, value, track, indicator and label elements.
/// - [`animation`]: Host-driven value interpolation.
/// - [`layout`]: Measurement, geometry resolution and painting.
/// - [`widget`]: The [`HealthBar`] shell and its change tags.
/// - [`config`]: Declarative attribute bag loaded from JSON.
/// - [`resources`]: Colour/font resource lookup boundary.
pub mod animation;
pub mod config;
pub mod elements;
pub mod error;
pub mod layout;
pub mod model;
pub mod resources;
pub mod widget;

pub use config::HealthBarConfig;
pub use error::HealthBarError;
pub use widget::{HealthBar, Invalidation, TextTarget, ValueTarget};
