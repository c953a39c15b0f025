/// Top bar with branding, page tabs, theme toggle and About.
use crate::state::{AppState, Page};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // Accent colour follows the active theme.
        ui.label(
            egui::RichText::new("🔢 Numify")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        for page in [Page::Currency, Page::Numify] {
            ui.selectable_value(&mut state.page, page, page.label());
        }

        ui.separator();

        // Clear the visible form.
        let has_input = !state.active_form().input().is_empty();
        if ui
            .add_enabled(has_input, egui::Button::new("✖ Clear"))
            .on_hover_text("Clear the input and output")
            .clicked()
        {
            match state.page {
                Page::Currency => state.currency.clear(),
                Page::Numify => state.numify.clear(),
            }
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About Numify").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}
