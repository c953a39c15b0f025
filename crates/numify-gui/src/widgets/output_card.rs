/// Output card showing one formatted result that copies on click.
use egui::{Rect, Sense, Ui, Vec2};

/// Card height in points.
const CARD_HEIGHT: f32 = 64.0;

/// Draw a card titled `title` showing `value`, or `placeholder` when there
/// is nothing to show. Returns the value if the user clicked to copy it.
pub fn output_card<'a>(
    ui: &mut Ui,
    title: &str,
    value: Option<&'a str>,
    placeholder: &str,
) -> Option<&'a str> {
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), CARD_HEIGHT),
        if value.is_some() {
            Sense::click()
        } else {
            Sense::hover()
        },
    );
    let painter = ui.painter_at(rect);

    // Accent card when there is a result, muted otherwise.
    let bg = match (value.is_some(), response.hovered()) {
        (true, true) => egui::Color32::from_rgb(0x36, 0x50, 0x78),
        (true, false) => egui::Color32::from_rgb(0x28, 0x3a, 0x5c),
        (false, _) => ui.visuals().faint_bg_color,
    };
    painter.rect_filled(rect, 6.0, bg);
    painter.rect_stroke(
        rect,
        6.0,
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0x3a, 0x50, 0x72)),
        egui::StrokeKind::Outside,
    );

    let (title_color, body_color) = if value.is_some() {
        (egui::Color32::from_rgb(0xb8, 0xb8, 0xc4), egui::Color32::WHITE)
    } else {
        let weak = ui.visuals().weak_text_color();
        (weak, weak)
    };

    painter.text(
        egui::pos2(rect.left() + 12.0, rect.top() + 14.0),
        egui::Align2::LEFT_CENTER,
        title,
        egui::FontId::proportional(12.0),
        title_color,
    );

    let body_rect = Rect::from_min_max(
        egui::pos2(rect.left() + 12.0, rect.top() + 24.0),
        rect.right_bottom(),
    );
    match value {
        Some(text) => {
            painter.text(
                body_rect.left_center(),
                egui::Align2::LEFT_CENTER,
                text,
                egui::FontId::proportional(22.0),
                body_color,
            );
            painter.text(
                egui::pos2(rect.right() - 12.0, rect.top() + 14.0),
                egui::Align2::RIGHT_CENTER,
                "📋",
                egui::FontId::proportional(12.0),
                title_color,
            );
        }
        None => {
            painter.text(
                body_rect.left_center(),
                egui::Align2::LEFT_CENTER,
                placeholder,
                egui::FontId::proportional(14.0),
                body_color,
            );
        }
    }

    let response = if value.is_some() {
        response.on_hover_text("Click to copy")
    } else {
        response
    };
    let clicked = response.clicked();
    ui.add_space(6.0);
    value.filter(|_| clicked)
}
