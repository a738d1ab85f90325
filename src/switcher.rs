//! Mode switching and calibration state for one overlay window.
//!
//! All mutable state lives in [`Session`]. The UI turns button input into
//! [`Command`]s and calls [`Session::handle`], then [`Session::tick`] once per
//! frame to advance the calibration countdown and status timeouts.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    desktop::{Activation, Desktop, DesktopError, WindowHandle},
    settings::{Mode, Position, Profile},
};

pub const IDLE_STATUS: &'static str = "Right-Click btns to calibrate";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Primary click: focus the launch monitor and click the mode's coordinate.
    Switch(Mode),
    /// Secondary click: capture the cursor position for the mode after a countdown.
    Calibrate(Mode),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Already in the requested mode, nothing was touched.
    Unchanged,
    TargetMissing,
    Switched { warning: Option<String> },
    Failed(DesktopError),
    /// Ignored because a calibration countdown is running.
    Busy,
}

#[derive(Clone, Copy, Debug)]
struct Countdown {
    mode: Mode,
    started: Instant,
}

pub struct Session {
    config: Config,
    profile: Profile,
    active: Option<Mode>,
    status: String,
    calibration: Option<Countdown>,
    status_reset_at: Option<Instant>,
}

impl Session {
    pub fn new(config: Config, profile: Profile) -> Self {
        Self {
            config,
            profile,
            active: None,
            status: IDLE_STATUS.into(),
            calibration: None,
            status_reset_at: None,
        }
    }

    /// Builds a session from the profile stored at `config.profile_path`.
    pub fn load(config: Config) -> Self {
        let profile = Profile::load_from(&config.profile_path);
        Self::new(config, profile)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn active(&self) -> Option<Mode> {
        self.active
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn calibrating(&self) -> Option<Mode> {
        self.calibration.map(|countdown| countdown.mode)
    }

    /// True while something on screen changes without user input.
    pub fn is_timing(&self) -> bool {
        self.calibration.is_some() || self.status_reset_at.is_some()
    }

    pub fn handle(&mut self, command: Command, desktop: &mut dyn Desktop, now: Instant) {
        match command {
            Command::Switch(mode) => {
                self.switch_mode(mode, desktop);
            }
            Command::Calibrate(mode) => {
                self.begin_calibration(mode, now);
            }
        }
    }

    pub fn switch_mode(&mut self, mode: Mode, desktop: &mut dyn Desktop) -> SwitchOutcome {
        if self.calibration.is_some() {
            debug!(?mode, "switch ignored during calibration");
            return SwitchOutcome::Busy;
        }

        if self.active == Some(mode) {
            debug!(?mode, "already active");
            return SwitchOutcome::Unchanged;
        }

        let Some(launch_monitor) = desktop.find_window(&self.config.launch_monitor_title) else {
            warn!(title = %self.config.launch_monitor_title, "launch monitor window not found");
            self.set_status(format!("ERR: {} Not Open", self.config.launch_monitor_title));
            return SwitchOutcome::TargetMissing;
        };
        let simulator = desktop.find_window(&self.config.simulator_title);

        self.bring_to_front(desktop, launch_monitor, &self.config.launch_monitor_title);
        desktop.pause(self.config.focus_pause);

        match self.profile.get(mode) {
            Some(position) => {
                if let Err(error) = desktop.left_click(position) {
                    error!(?mode, %error, "click failed");
                    self.set_status(format!("Error: {error}"));
                    return SwitchOutcome::Failed(error);
                }
                info!(?mode, x = position.x, y = position.y, "clicked mode button");
            }
            None => warn!(?mode, "no coordinate saved for mode, skipping click"),
        }

        let warning = match simulator {
            Some(simulator) => {
                self.bring_to_front(desktop, simulator, &self.config.simulator_title);
                None
            }
            None => {
                warn!(title = %self.config.simulator_title, "simulator window not found");
                Some(format!("Warning: {} Not Open", self.config.simulator_title))
            }
        };

        self.active = Some(mode);
        let status = warning.clone().unwrap_or_else(|| mode_status(mode));
        self.set_status(status);

        SwitchOutcome::Switched { warning }
    }

    fn bring_to_front(&self, desktop: &mut dyn Desktop, window: WindowHandle, title: &str) {
        if desktop.is_minimized(window) {
            if let Activation::Failed(reason) = desktop.restore(window) {
                warn!(title, %reason, "window activation error");
                return;
            }
            desktop.pause(self.config.focus_pause);
        }

        if let Activation::Failed(reason) = desktop.activate(window) {
            warn!(title, %reason, "window activation error");
        }
    }

    /// Returns false when a countdown is already running.
    pub fn begin_calibration(&mut self, mode: Mode, now: Instant) -> bool {
        if self.calibration.is_some() {
            return false;
        }

        info!(?mode, "calibration started");
        self.calibration = Some(Countdown { mode, started: now });
        self.status_reset_at = None;
        self.status = countdown_status(mode, whole_seconds(self.config.countdown));
        true
    }

    pub fn tick(&mut self, desktop: &mut dyn Desktop, now: Instant) {
        if let Some(countdown) = self.calibration {
            let elapsed = now.saturating_duration_since(countdown.started);

            if elapsed >= self.config.countdown {
                self.calibration = None;
                self.finish_calibration(countdown.mode, desktop, now);
            } else {
                let remaining = whole_seconds(self.config.countdown - elapsed);
                self.status = countdown_status(countdown.mode, remaining);
            }
            return;
        }

        if let Some(reset_at) = self.status_reset_at {
            if now >= reset_at {
                self.set_status(self.idle_status());
            }
        }
    }

    fn finish_calibration(&mut self, mode: Mode, desktop: &mut dyn Desktop, now: Instant) {
        let (x, y) = match desktop.cursor_position() {
            Ok(point) => point,
            Err(error) => {
                error!(?mode, %error, "calibration failed");
                self.set_status("Calibrate Error".into());
                return;
            }
        };

        let Some(position) = Position::checked(x, y) else {
            warn!(?mode, x, y, "cursor outside the accepted coordinate range");
            self.set_status("Calibrate Error".into());
            return;
        };

        self.profile.set(mode, position);

        if let Err(error) = self.profile.save_to(&self.config.profile_path) {
            error!(
                path = %self.config.profile_path.display(),
                %error,
                "could not save coordinates"
            );
            self.set_status("Error saving settings".into());
            return;
        }

        info!(?mode, x, y, "saved calibrated coordinate");
        self.set_status(format!("Saved {}: {},{}", mode.name(), x, y));
        self.status_reset_at = Some(now + self.config.status_reset_delay);
    }

    fn idle_status(&self) -> String {
        match self.active {
            Some(mode) => mode_status(mode),
            None => IDLE_STATUS.into(),
        }
    }

    fn set_status(&mut self, status: String) {
        self.status = status;
        self.status_reset_at = None;
    }
}

pub fn mode_status(mode: Mode) -> String {
    format!("MODE: {}", mode.label())
}

fn countdown_status(mode: Mode, seconds: u64) -> String {
    format!("Hover {} btn: {}s", mode.name().to_uppercase(), seconds)
}

/// Rounds up so a countdown shows 5..1 and never 0.
fn whole_seconds(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}
