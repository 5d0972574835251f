/// Main `eframe::App` implementation for the HealthBar demo.
///
/// Composes the toolbar, status bar, configuration editor and the stack of
/// demo bars.
use crate::panels;
use crate::state::AppState;
use crate::theme::DemoTheme;
use crate::widgets;

/// Extra family name registered with egui so bars can select it through
/// `Font::Named`. It aliases the proportional font list.
pub const DISPLAY_FAMILY: &str = "display";

/// Pre-built application state.
///
/// Construct this before calling `eframe::run_native` so sample parsing and
/// its logging happen before the window opens.
pub struct HealthBarState {
    pub(crate) inner: AppState,
}

impl HealthBarState {
    /// Load the sample bars.
    pub fn build() -> Self {
        Self {
            inner: AppState::new(),
        }
    }
}

/// The HealthBar demo application.
pub struct HealthBarApp {
    state: AppState,
}

impl HealthBarApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: HealthBarState) -> Self {
        // ── Fonts ─────────────────────────────────────────────────────────
        let mut fonts = egui::FontDefinitions::default();
        let proportional = fonts
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();
        fonts
            .families
            .insert(egui::FontFamily::Name(DISPLAY_FAMILY.into()), proportional);
        cc.egui_ctx.set_fonts(fonts);
        tracing::info!("Registered font family '{}'", DISPLAY_FAMILY);

        DemoTheme::dark().apply(&cc.egui_ctx);

        Self { state: state.inner }
    }
}

impl eframe::App for HealthBarApp {
    /// Override the GPU clear colour to match the active theme background.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        DemoTheme::for_mode(self.state.theme_mode).apply(ctx);

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About HealthBar")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("▮ HealthBar")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A horizontal gauge with min/max captions,\n\
                             a gradient track, an animated indicator\n\
                             and range-based category labels.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Right config editor ───────────────────────────────────────────
        if self.state.show_config_panel {
            egui::SidePanel::right("config_panel")
                .default_width(320.0)
                .min_width(240.0)
                .max_width(600.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::config_panel::config_panel(ui, &mut self.state);
                });
        }

        // ── Central panel (bars) ──────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::bars_panel::bars_panel(ui, &mut self.state);
        });
    }
}
