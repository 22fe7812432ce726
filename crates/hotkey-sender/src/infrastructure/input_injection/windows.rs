//! Windows input injection via the SendInput API.
//!
//! Scan codes are looked up with `MapVirtualKeyW(MAPVK_VK_TO_VSC_EX)` on
//! every call so that a layout switch between two injections is honoured.
//! Events are submitted one `INPUT` per `SendInput` call; the return value
//! is the number of events the OS inserted into the input stream.

#![cfg(target_os = "windows")]

use hotkey_core::{InputEvent, KeyDirection, KeyEncoding, PhysicalKey, ScanCode};
use tracing::trace;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, KEYEVENTF_SCANCODE, MAPVK_VK_TO_VSC_EX, VIRTUAL_KEY,
};

use crate::application::inject_keys::InputInjector;

/// Windows implementation of [`InputInjector`] using SendInput.
pub struct WindowsInputInjector;

impl WindowsInputInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsInputInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputInjector for WindowsInputInjector {
    fn scan_code(&self, key: PhysicalKey) -> Option<ScanCode> {
        // SAFETY: MapVirtualKeyW has no pointer arguments and is always safe to call
        let raw = unsafe { MapVirtualKeyW(u32::from(key.vk()), MAPVK_VK_TO_VSC_EX) };
        let sc = ScanCode::from_vsc_ex(raw);
        trace!(%key, raw, "MapVirtualKeyW");
        sc
    }

    fn submit(&self, event: &InputEvent) -> u32 {
        let input = keyboard_input(event);
        // SAFETY: input is a valid KEYBDINPUT structure on the stack and the
        // size argument matches the element type of the slice
        unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn keyboard_input(event: &InputEvent) -> INPUT {
    let w_scan = event.scan_code().map_or(0, |sc| u16::from(sc.code()));
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(event.key().vk()),
                wScan: w_scan,
                dwFlags: keyboard_flags(event),
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

/// `dwFlags` for `event`.
///
/// Scan-code events carry `KEYEVENTF_SCANCODE` (the OS then ignores `wVk`);
/// the extended bit follows the scan code, or the key itself in virtual-key
/// form.
fn keyboard_flags(event: &InputEvent) -> KEYBD_EVENT_FLAGS {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    let extended = match event.encoding() {
        KeyEncoding::ScanCode(sc) => {
            flags |= KEYEVENTF_SCANCODE;
            sc.is_extended()
        }
        KeyEncoding::VirtualKey => event.key().is_extended(),
    };
    if extended {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    if event.direction() == KeyDirection::Up {
        flags |= KEYEVENTF_KEYUP;
    }
    flags
}
