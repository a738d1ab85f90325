use eframe::{egui::*, *};
use strum::IntoEnumIterator;

pub mod app;
pub mod oval_button;

use crate::{
    config::Config,
    desktop::{self, Desktop},
    settings::Mode,
    switcher::{Command, Session},
};
use oval_button::OvalButton;

pub const BUTTON_WIDTH: f32 = 130.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_GAP: f32 = 30.0;

const BACKGROUND: Color32 = Color32::BLACK;
const INACTIVE_FILL: Color32 = Color32::from_rgb(0x2E, 0x2E, 0x2E);
const STATUS_COLOR: Color32 = Color32::YELLOW;

pub struct SwitcherApp {
    pub session: Session,
    pub desktop: Box<dyn Desktop>,
}

fn active_fill(mode: Mode) -> Color32 {
    match mode {
        Mode::Chip => Color32::from_rgb(0x4C, 0xAF, 0x50),
        Mode::Full => Color32::from_rgb(0x38, 0x8E, 0x3C),
    }
}

impl SwitcherApp {
    pub fn new(cc: &CreationContext, config: Config) -> Self {
        use crate::gui::FontFamily::*;
        use crate::gui::TextStyle::*;
        cc.egui_ctx.set_visuals(Visuals::dark());

        let mut style = (*cc.egui_ctx.style()).clone();

        style.text_styles = [
            (Heading, FontId::new(20.0, Proportional)),
            (Body, FontId::new(16.0, Proportional)),
            (TextStyle::Monospace, FontId::new(14.0, Proportional)),
            (Button, FontId::new(18.0, Proportional)),
            (Small, FontId::new(10.0, Proportional)),
        ]
        .into();

        cc.egui_ctx.set_style(style);

        Self {
            session: Session::load(config),
            desktop: desktop::native(),
        }
    }

    fn status_line(&self, ui: &mut Ui) {
        ui.add_space(10.0);
        ui.label(
            RichText::new(self.session.status())
                .color(STATUS_COLOR)
                .size(16.0)
                .strong(),
        );
        ui.add_space(15.0);
    }

    fn mode_buttons(&self, ui: &mut Ui) -> Option<Command> {
        let mut command = None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = vec2(BUTTON_GAP, 0.0);
            let spare = ui.available_width() - (2.0 * BUTTON_WIDTH + BUTTON_GAP);
            ui.add_space((spare / 2.0).max(0.0));

            ui.set_enabled(self.session.calibrating().is_none());

            for mode in Mode::iter() {
                let fill = if self.session.active() == Some(mode) {
                    active_fill(mode)
                } else {
                    INACTIVE_FILL
                };

                let response = ui.add(OvalButton::new(mode.label(), fill));

                if response.clicked() {
                    command = Some(Command::Switch(mode));
                } else if response.secondary_clicked() {
                    command = Some(Command::Calibrate(mode));
                }
            }
        });

        command
    }
}
