/// Window panels for the HealthBar demo.
pub mod bars_panel;
pub mod config_panel;
