use std::{
    mem::{size_of, zeroed},
    thread,
    time::Duration,
};

use tracing::{debug, trace};
use winapi::{
    shared::{
        minwindef::{BOOL, DWORD, LPARAM, TRUE},
        windef::{HWND, POINT},
    },
    um::winuser::*,
};

use super::{Activation, Desktop, DesktopError, WindowHandle};
use crate::settings::Position;

pub struct Win32Desktop;

unsafe extern "system" fn collect_window(hwnd: HWND, l_param: LPARAM) -> BOOL {
    let windows = &mut *(l_param as *mut Vec<HWND>);
    windows.push(hwnd);
    TRUE
}

fn top_level_windows() -> Vec<HWND> {
    let mut windows: Vec<HWND> = vec![];
    unsafe {
        EnumWindows(
            Some(collect_window),
            &mut windows as *mut Vec<HWND> as LPARAM,
        )
    };
    windows
}

fn window_title(hwnd: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u16; length as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32) };

    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

fn hwnd(window: WindowHandle) -> HWND {
    window.0 as HWND
}

fn mouse_input(flags: DWORD) -> INPUT {
    let mut input = INPUT {
        type_: INPUT_MOUSE,
        u: unsafe { zeroed() },
    };

    unsafe {
        *input.u.mi_mut() = MOUSEINPUT {
            dx: 0,
            dy: 0,
            mouseData: 0,
            dwFlags: flags,
            time: 0,
            dwExtraInfo: 0,
        };
    }

    input
}

impl Desktop for Win32Desktop {
    fn find_window(&mut self, title: &str) -> Option<WindowHandle> {
        top_level_windows()
            .into_iter()
            .filter(|&hwnd| unsafe { IsWindowVisible(hwnd) } != 0)
            .find(|&hwnd| {
                let window_title = window_title(hwnd);
                trace!(%window_title, "checking window");
                !window_title.is_empty() && window_title.contains(title)
            })
            .map(|hwnd| WindowHandle(hwnd as isize))
    }

    fn is_minimized(&mut self, window: WindowHandle) -> bool {
        unsafe { IsIconic(hwnd(window)) != 0 }
    }

    fn restore(&mut self, window: WindowHandle) -> Activation {
        unsafe { ShowWindow(hwnd(window), SW_RESTORE) };

        if self.is_minimized(window) {
            Activation::Failed("window is still minimized".into())
        } else {
            Activation::Activated
        }
    }

    fn activate(&mut self, window: WindowHandle) -> Activation {
        if unsafe { IsWindow(hwnd(window)) } == 0 {
            return Activation::Failed("window no longer exists".into());
        }

        if unsafe { SetForegroundWindow(hwnd(window)) } == 0 {
            Activation::Failed("SetForegroundWindow was refused".into())
        } else {
            Activation::Activated
        }
    }

    fn left_click(&mut self, at: Position) -> Result<(), DesktopError> {
        if unsafe { SetCursorPos(at.x, at.y) } == 0 {
            return Err(DesktopError::CursorMove(at));
        }

        let mut inputs = [
            mouse_input(MOUSEEVENTF_LEFTDOWN),
            mouse_input(MOUSEEVENTF_LEFTUP),
        ];

        let expected = inputs.len() as u32;
        let sent = unsafe {
            SendInput(
                expected,
                inputs.as_mut_ptr(),
                size_of::<INPUT>() as i32,
            )
        };

        if sent != expected {
            return Err(DesktopError::InputRejected { sent, expected });
        }

        debug!(x = at.x, y = at.y, "sent left click");
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<(i32, i32), DesktopError> {
        let mut point: POINT = unsafe { zeroed() };

        if unsafe { GetCursorPos(&mut point) } == 0 {
            return Err(DesktopError::CursorUnavailable);
        }

        Ok((point.x, point.y))
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
