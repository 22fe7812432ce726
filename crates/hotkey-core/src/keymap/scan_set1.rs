//! Reference scan codes (IBM PC/AT scan code set 1) for a US keyboard.
//!
//! # What is a scan code? (for beginners)
//!
//! A virtual-key code says *which logical key* was pressed; a scan code says
//! *which physical position* on the keyboard matrix produced it.  The OS
//! computes one from the other through the active keyboard layout
//! (`MapVirtualKeyW` on Windows), so the native backend always asks the OS.
//!
//! This table is the answer a standard US layout gives.  It backs the
//! recording backend, so dry runs and tests see the same scan codes a real
//! machine would report, without touching the OS.
//!
//! | Key          | Set-1 make code |
//! |--------------|-----------------|
//! | Escape       | 0x01            |
//! | Enter        | 0x1C            |
//! | Left Ctrl    | 0x1D            |
//! | Left Alt     | 0x38            |
//! | NumLock      | 0x45 (extended) |
//!
//! Codes are given in the form `MapVirtualKeyW(MAPVK_VK_TO_VSC_EX)` returns
//! them.  Bare set 1 sends NumLock as a plain 0x45 (the E1-prefixed sequence
//! belongs to Pause); Windows reports it with the E0 extended prefix, and
//! `SendInput` needs `KEYEVENTF_EXTENDEDKEY` for it, so the table marks it
//! extended.

use super::{PhysicalKey, ScanCode};

/// Returns the US-layout set-1 scan code for `key`.
///
/// Total over [`PhysicalKey`]: every catalog key has a scan code.
pub const fn scan_code(key: PhysicalKey) -> ScanCode {
    match key {
        PhysicalKey::Escape => ScanCode::new(0x01, false),
        PhysicalKey::Enter => ScanCode::new(0x1C, false),
        PhysicalKey::LeftControl => ScanCode::new(0x1D, false),
        PhysicalKey::LeftAlt => ScanCode::new(0x38, false),
        PhysicalKey::Space => ScanCode::new(0x39, false),

        // ── Function keys ─────────────────────────────────────────────────────
        PhysicalKey::F1 => ScanCode::new(0x3B, false),
        PhysicalKey::F2 => ScanCode::new(0x3C, false),
        PhysicalKey::F3 => ScanCode::new(0x3D, false),
        PhysicalKey::F10 => ScanCode::new(0x44, false),
        PhysicalKey::F12 => ScanCode::new(0x58, false),

        // ── Numeric keypad ────────────────────────────────────────────────────
        PhysicalKey::NumLock => ScanCode::new(0x45, true),
        PhysicalKey::Numpad7 => ScanCode::new(0x47, false),
        PhysicalKey::Numpad8 => ScanCode::new(0x48, false),
        PhysicalKey::Numpad4 => ScanCode::new(0x4B, false),
        PhysicalKey::Numpad5 => ScanCode::new(0x4C, false),
        PhysicalKey::Numpad1 => ScanCode::new(0x4F, false),
        PhysicalKey::Numpad2 => ScanCode::new(0x50, false),
    }
}
