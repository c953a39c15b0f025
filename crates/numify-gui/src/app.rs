/// Main `eframe::App` implementation for Numify.
///
/// This is the top-level UI layout that composes the toolbar, the active
/// page and the status bar.
use crate::panels;
use crate::state::{AppState, Page, Preferences};
use crate::widgets;
use std::time::Instant;

/// Fonts tried, in order, for the CJK compact suffixes (万, 億, 만, ...).
/// The bundled egui fonts have no CJK glyphs.
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so the first
/// frame renders straight away.
pub struct NumifyState {
    pub(crate) inner: AppState,
}

impl NumifyState {
    /// Fresh state with default selectors.
    pub fn build() -> Self {
        Self {
            inner: AppState::new(),
        }
    }
}

/// The Numify application.
pub struct NumifyApp {
    state: AppState,
    /// Page whose title is currently on the window.
    titled_page: Option<Page>,
}

impl NumifyApp {
    /// Create a new application instance from pre-built state.
    ///
    /// Stored preferences, when present, replace the defaults in `state`.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: NumifyState) -> Self {
        let state = match cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, eframe::APP_KEY))
        {
            Some(prefs) => AppState::from_preferences(&prefs),
            None => state.inner,
        };

        cc.egui_ctx.set_fonts(load_fonts());

        cc.egui_ctx.set_visuals(if state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        Self {
            state,
            titled_page: None,
        }
    }
}

/// Default fonts plus the first CJK font found on disk as a fallback.
fn load_fonts() -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();

    let found = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)));

    match found {
        Some((path, bytes)) => {
            fonts
                .font_data
                .insert("cjk".to_owned(), egui::FontData::from_owned(bytes).into());
            // Lowest priority: only used for glyphs the defaults lack.
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push("cjk".to_owned());
            }
            tracing::info!("Loaded CJK fallback font from {}", path);
        }
        None => {
            tracing::warn!("No CJK font found; some compact suffixes may not render");
        }
    }

    fonts
}

impl eframe::App for NumifyApp {
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
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Timers ────────────────────────────────────────────────────────
        let now = Instant::now();
        if let Some(wait) = self.state.tick(now) {
            ctx.request_repaint_after(wait);
        }

        if self.titled_page != Some(self.state.page) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.state.page.window_title().to_owned(),
            ));
            self.titled_page = Some(self.state.page);
        }

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
        egui::Window::new("About Numify")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();
                let strong = ui.visuals().strong_text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🔢 Numify")
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
                            "Turn long numbers into short, readable ones.\n\
                             Compact and currency formats for 16 countries,\n\
                             word-suffix abbreviations in 7 formats.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Developed by Swatto")
                            .size(13.0)
                            .strong()
                            .color(strong),
                    );
                    ui.add_space(4.0);
                    ui.hyperlink_to(
                        "github.com/Swatto86/Numify",
                        "https://github.com/Swatto86/Numify",
                    );
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

        // ── Central panel (active page) ───────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(560.0);
                match self.state.page {
                    Page::Currency => panels::currency_panel::currency_panel(ui, &mut self.state),
                    Page::Numify => panels::numify_panel::numify_panel(ui, &mut self.state),
                }
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.preferences());
    }
}
