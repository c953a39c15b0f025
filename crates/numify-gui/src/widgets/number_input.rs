/// Number entry field shared by both pages.
use numify_core::form::Form;
use egui::Ui;
use std::time::Instant;

/// Draw the input field and, below it, the current error message.
///
/// The field is capped at the page's keystroke limit and outlined in the
/// warning colour while the form holds an error.
pub fn number_input(ui: &mut Ui, form: &mut Form) {
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    let error = form.error_message();

    ui.label(egui::RichText::new("Enter a Number:").strong());

    let mut text = form.input().to_owned();
    let response = ui
        .scope(|ui| {
            if error.is_some() {
                let widgets = &mut ui.visuals_mut().widgets;
                widgets.inactive.bg_stroke = egui::Stroke::new(1.5, color_error);
                widgets.hovered.bg_stroke = egui::Stroke::new(1.5, color_error);
            }
            ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("Type a number...")
                    .char_limit(form.kind().input_char_limit())
                    .font(egui::TextStyle::Heading)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;

    if response.changed() {
        form.set_input(&text, Instant::now());
    }

    if let Some(message) = error {
        ui.label(egui::RichText::new(message).size(12.0).color(color_error));
    }
}
