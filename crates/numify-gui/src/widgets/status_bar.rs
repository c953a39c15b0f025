/// Bottom status bar: pipeline state and the active locale.
use crate::state::{AppState, Page};
use numify_core::dialect::resolve_dialect;
use numify_core::locale::resolve_country;
use numify_core::Outcome;
use egui::Ui;
use std::time::Instant;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    let now = Instant::now();
    let form = state.active_form();

    ui.horizontal(|ui| {
        if state.is_pending(now) {
            ui.spinner();
            ui.label(egui::RichText::new("Formatting...").size(12.0).color(color_weak));
        } else {
            match form.outcome() {
                Outcome::Empty => {
                    ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
                }
                Outcome::Valid(_) => {
                    ui.label(
                        egui::RichText::new("\u{2713} Formatted")
                            .size(12.0)
                            .color(color_success),
                    );
                }
                Outcome::Invalid(err) => {
                    ui.label(
                        egui::RichText::new(format!("\u{26a0} {err}"))
                            .size(12.0)
                            .color(color_warning),
                    );
                }
            }
        }

        if state.copied_at.is_some() {
            ui.separator();
            ui.label(
                egui::RichText::new("Copied to clipboard")
                    .size(12.0)
                    .color(color_accent),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let detail = match state.page {
                Page::Currency => {
                    let cfg = resolve_country(form.selector());
                    format!("{} · {}", cfg.locale_id, cfg.currency_code)
                }
                Page::Numify => {
                    let dialect = resolve_dialect(form.selector());
                    format!("{} format", dialect.name)
                }
            };
            ui.label(egui::RichText::new(detail).size(11.0).color(color_weak));
        });
    });
}
