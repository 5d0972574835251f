/// UI widgets for the HealthBar demo.

pub mod canvas;
pub mod health_bar;
pub mod status_bar;
pub mod toolbar;
