/// Numify page: word-suffix abbreviation in a chosen format.
use crate::state::AppState;
use crate::widgets;
use numify_core::FormattedOutput;
use egui::Ui;
use std::time::Instant;

/// Draw the Numify page.
pub fn numify_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📊 Number Formatter");
    ui.add_space(8.0);

    // Typing is debounced inside the form; see `AppState::tick`.
    widgets::number_input::number_input(ui, &mut state.numify);
    ui.add_space(12.0);
    widgets::selector_picker::format_picker(ui, &mut state.numify);
    ui.add_space(16.0);

    let abbreviated = match state.numify.output() {
        Some(FormattedOutput::Abbreviated { abbreviated }) => Some(abbreviated.as_str()),
        _ => None,
    };

    let copied = widgets::output_card::output_card(
        ui,
        "Formatted Output",
        abbreviated,
        "Enter a number to see the result",
    )
    .map(str::to_owned);

    if let Some(text) = copied {
        ui.ctx().copy_text(text);
        state.mark_copied(Instant::now());
    }
}
