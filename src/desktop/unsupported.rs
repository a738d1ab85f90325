use std::{thread, time::Duration};

use tracing::debug;

use super::{Activation, Desktop, DesktopError, WindowHandle};
use crate::settings::Position;

/// Used on platforms without a window automation backend. No window is ever found,
/// so every switch stops at the launch-monitor lookup.
pub struct UnsupportedDesktop;

impl Desktop for UnsupportedDesktop {
    fn find_window(&mut self, title: &str) -> Option<WindowHandle> {
        debug!(title, "window lookup is not supported on this platform");
        None
    }

    fn is_minimized(&mut self, _window: WindowHandle) -> bool {
        false
    }

    fn restore(&mut self, _window: WindowHandle) -> Activation {
        Activation::Failed(DesktopError::Unsupported.to_string())
    }

    fn activate(&mut self, _window: WindowHandle) -> Activation {
        Activation::Failed(DesktopError::Unsupported.to_string())
    }

    fn left_click(&mut self, _at: Position) -> Result<(), DesktopError> {
        Err(DesktopError::Unsupported)
    }

    fn cursor_position(&mut self) -> Result<(i32, i32), DesktopError> {
        Err(DesktopError::Unsupported)
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
