use std::{path::PathBuf, time::Duration};

use crate::settings::SETTINGS_FILE_NAME;

pub const WINDOW_TITLE: &'static str = "Mevo Switcher";

#[derive(Clone, Debug)]
pub struct Config {
    /// Title substring of the launch-monitor window that receives the click.
    pub launch_monitor_title: String,
    /// Title substring of the simulator window that gets focus back afterwards.
    pub simulator_title: String,
    pub profile_path: PathBuf,
    pub countdown: Duration,
    /// Wait after restoring or activating a window so the OS settles focus.
    pub focus_pause: Duration,
    pub status_reset_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            launch_monitor_title: "FS Golf".into(),
            simulator_title: "GSPro".into(),
            profile_path: PathBuf::from(SETTINGS_FILE_NAME),
            countdown: Duration::from_secs(5),
            focus_pause: Duration::from_millis(200),
            status_reset_delay: Duration::from_secs(1),
        }
    }
}
