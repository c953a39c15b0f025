/// Currency page: compact and currency renderings for a country.
use crate::state::AppState;
use crate::widgets;
use numify_core::FormattedOutput;
use egui::Ui;
use std::time::Instant;

/// Draw the Currency page.
pub fn currency_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("💱 Compact & Currency");
    ui.add_space(8.0);

    widgets::number_input::number_input(ui, &mut state.currency);
    ui.add_space(12.0);
    widgets::selector_picker::country_picker(ui, &mut state.currency);
    ui.add_space(16.0);

    let (compact, currency) = match state.currency.output() {
        Some(FormattedOutput::Compact { compact, currency }) => {
            (Some(compact.as_str()), Some(currency.as_str()))
        }
        _ => (None, None),
    };

    let placeholder = "Enter a number to see the result";
    let copied = [
        widgets::output_card::output_card(ui, "Compact", compact, placeholder),
        widgets::output_card::output_card(ui, "Currency", currency, placeholder),
    ]
    .into_iter()
    .flatten()
    .next()
    .map(str::to_owned);

    if let Some(text) = copied {
        ui.ctx().copy_text(text);
        state.mark_copied(Instant::now());
    }
}
