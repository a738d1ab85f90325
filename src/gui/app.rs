use std::time::Instant;

use super::*;

impl App for SwitcherApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> egui::Rgba {
        Rgba::from_black_alpha(1.0)
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.session.tick(self.desktop.as_mut(), Instant::now());

        let mut command = None;

        CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.status_line(ui);
                    command = self.mode_buttons(ui);
                });
            });

        if let Some(command) = command {
            self.session
                .handle(command, self.desktop.as_mut(), Instant::now());
        }

        if self.session.is_timing() {
            ctx.request_repaint();
        }
    }
}
