/// Selector drop-downs: country for the Currency page, format code for
/// the Numify page.
///
/// Both write through [`Form::set_selector`], which recomputes at once.
use numify_core::dialect::{resolve_dialect, DIALECTS};
use numify_core::form::Form;
use numify_core::locale::{resolve_country, COUNTRIES};
use egui::Ui;

/// Draw the country picker.
pub fn country_picker(ui: &mut Ui, form: &mut Form) {
    let current = resolve_country(form.selector());
    let mut selected = current.code;

    ui.label(egui::RichText::new("Country:").strong());
    egui::ComboBox::from_id_salt("country_picker")
        .width(ui.available_width())
        .selected_text(format!(
            "{}  {} ({})",
            current.currency_symbol, current.name, current.currency_code
        ))
        .show_ui(ui, |ui| {
            for country in COUNTRIES {
                ui.selectable_value(
                    &mut selected,
                    country.code,
                    format!("{}  {} ({})", country.currency_symbol, country.name, country.code),
                );
            }
        });

    if selected != form.selector() {
        form.set_selector(selected);
    }
}

/// Draw the format-code picker.
pub fn format_picker(ui: &mut Ui, form: &mut Form) {
    let current = resolve_dialect(form.selector());
    let mut selected = current.code;

    ui.label(egui::RichText::new("Select Format:").strong());
    egui::ComboBox::from_id_salt("format_picker")
        .width(ui.available_width())
        .selected_text(current.code.to_uppercase())
        .show_ui(ui, |ui| {
            for dialect in DIALECTS {
                ui.selectable_value(
                    &mut selected,
                    dialect.code,
                    format!("{} -- {}", dialect.code.to_uppercase(), dialect.name),
                );
            }
        });

    if selected != form.selector() {
        form.set_selector(selected);
    }
}
