/// UI widgets for Numify.

pub mod number_input;
pub mod output_card;
pub mod selector_picker;
pub mod status_bar;
pub mod toolbar;
