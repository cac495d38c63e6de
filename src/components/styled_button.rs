use eframe::egui;

/// Flat text button: plum at rest, light blue while held down
pub struct StyledButton<'a> {
    pub label: &'a str,
    pub fill: egui::Color32,
    pub pressed_fill: egui::Color32,
}

impl<'a> StyledButton<'a> {
    pub fn new(label: &'a str, fill: egui::Color32, pressed_fill: egui::Color32) -> Self {
        Self {
            label,
            fill,
            pressed_fill,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(14.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_owned(), font_id, egui::Color32::BLACK);
        let padding = egui::vec2(15.0, 5.0);
        let button_size = galley.size() + 2.0 * padding;
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.is_pointer_button_down_on() {
                self.pressed_fill
            } else {
                self.fill
            };

            ui.painter().rect_filled(rect, 0.0, bg_color);
            ui.painter().galley(
                rect.center() - galley.size() / 2.0,
                galley,
                egui::Color32::BLACK,
            );
        }

        response
    }
}
