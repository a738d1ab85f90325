use egui::*;

use super::{BUTTON_HEIGHT, BUTTON_WIDTH};

const TEXT_COLOR: Color32 = Color32::WHITE;

/// Pill-shaped button. Callers read `clicked()` and `secondary_clicked()` off the response.
pub struct OvalButton<'a> {
    label: &'a str,
    fill: Color32,
}

impl<'a> OvalButton<'a> {
    pub fn new(label: &'a str, fill: Color32) -> Self {
        Self { label, fill }
    }
}

impl Widget for OvalButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(vec2(BUTTON_WIDTH, BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let shape = rect.shrink(2.0);
            let painter = ui.painter();

            painter.rect_filled(shape, Rounding::same(shape.height() / 2.0), self.fill);
            painter.text(
                shape.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(18.0),
                TEXT_COLOR,
            );
        }

        response
    }
}
