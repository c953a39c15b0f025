/// Page panels, one per form.

pub mod currency_panel;
pub mod numify_panel;
