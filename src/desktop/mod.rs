use std::{error::Error, fmt, time::Duration};

use crate::settings::Position;

#[cfg(windows)]
pub mod win32;

#[cfg(not(windows))]
pub mod unsupported;

/// Opaque top-level window id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Activated,
    Failed(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum DesktopError {
    Unsupported,
    CursorMove(Position),
    InputRejected { sent: u32, expected: u32 },
    CursorUnavailable,
}

impl fmt::Display for DesktopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesktopError::Unsupported => write!(f, "desktop automation is not supported here"),
            DesktopError::CursorMove(position) => {
                write!(f, "could not move cursor to {},{}", position.x, position.y)
            }
            DesktopError::InputRejected { sent, expected } => {
                write!(f, "input blocked ({sent} of {expected} events sent)")
            }
            DesktopError::CursorUnavailable => write!(f, "could not read cursor position"),
        }
    }
}

impl Error for DesktopError {}

/// Window manager and input calls used by the switcher.
pub trait Desktop {
    /// First visible top-level window whose title contains `title`.
    fn find_window(&mut self, title: &str) -> Option<WindowHandle>;

    fn is_minimized(&mut self, window: WindowHandle) -> bool;

    fn restore(&mut self, window: WindowHandle) -> Activation;

    fn activate(&mut self, window: WindowHandle) -> Activation;

    /// Moves the cursor to `at` and presses then releases the left button.
    fn left_click(&mut self, at: Position) -> Result<(), DesktopError>;

    fn cursor_position(&mut self) -> Result<(i32, i32), DesktopError>;

    fn pause(&mut self, duration: Duration);
}

/// The backend for the platform this binary was built for.
pub fn native() -> Box<dyn Desktop> {
    #[cfg(windows)]
    {
        Box::new(win32::Win32Desktop)
    }
    #[cfg(not(windows))]
    {
        Box::new(unsupported::UnsupportedDesktop)
    }
}
