//! Physical key identifiers and scan codes.
//!
//! The injection engine speaks two key vocabularies:
//!
//! - [`PhysicalKey`] – the OS virtual-key code of a key in the catalog.  It is
//!   layout independent and is what the catalog stores.
//! - [`ScanCode`] – the hardware-position code the OS derives from a virtual
//!   key under the current keyboard layout.  Every event the engine submits is
//!   encoded with it, because full-screen and game-style input handlers only
//!   honour scan-code input.
//!
//! The [`scan_set1`] table holds the reference scan codes of a standard US
//! keyboard.  The native backend never uses it (it asks the OS on every call);
//! the recording backend and the tests do.

pub mod scan_set1;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Windows virtual-key code of a key the catalog can drive.
///
/// The discriminant of each variant is its `VK_*` value from `winuser.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum PhysicalKey {
    // Numeric keypad (VK_NUMPAD0=0x60 … VK_NUMPAD9=0x69)
    Numpad1 = 0x61,
    Numpad2 = 0x62,
    Numpad4 = 0x64,
    Numpad5 = 0x65,
    Numpad7 = 0x67,
    Numpad8 = 0x68,
    NumLock = 0x90,

    // Control keys
    Space = 0x20,
    Enter = 0x0D,
    Escape = 0x1B,

    // Function keys (VK_F1=0x70 … VK_F12=0x7B)
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F10 = 0x79,
    F12 = 0x7B,

    // Left-hand modifiers
    LeftControl = 0xA2,
    LeftAlt = 0xA4,
}

impl PhysicalKey {
    /// Every key the catalog knows, in virtual-key order.
    pub const ALL: [PhysicalKey; 17] = [
        PhysicalKey::Enter,
        PhysicalKey::Escape,
        PhysicalKey::Space,
        PhysicalKey::Numpad1,
        PhysicalKey::Numpad2,
        PhysicalKey::Numpad4,
        PhysicalKey::Numpad5,
        PhysicalKey::Numpad7,
        PhysicalKey::Numpad8,
        PhysicalKey::F1,
        PhysicalKey::F2,
        PhysicalKey::F3,
        PhysicalKey::F10,
        PhysicalKey::F12,
        PhysicalKey::NumLock,
        PhysicalKey::LeftControl,
        PhysicalKey::LeftAlt,
    ];

    /// Returns the raw virtual-key code.
    pub const fn vk(self) -> u16 {
        self as u16
    }

    /// Looks a key up by its virtual-key code.
    ///
    /// Returns `None` for codes outside the catalog's key set.
    pub fn from_vk(vk: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.vk() == vk)
    }

    /// Whether the key must be injected with the extended-key flag.
    ///
    /// NumLock shares scan code 0x45 with Pause; only the extended bit tells
    /// them apart once the event reaches the keyboard driver.
    pub const fn is_extended(self) -> bool {
        matches!(self, PhysicalKey::NumLock)
    }

    /// Whether the key is a modifier whose held state outlives one event.
    pub const fn is_modifier(self) -> bool {
        matches!(self, PhysicalKey::LeftControl | PhysicalKey::LeftAlt)
    }

    /// The `winuser.h` constant name, e.g. `VK_RETURN`.
    pub const fn vk_name(self) -> &'static str {
        match self {
            PhysicalKey::Numpad1 => "VK_NUMPAD1",
            PhysicalKey::Numpad2 => "VK_NUMPAD2",
            PhysicalKey::Numpad4 => "VK_NUMPAD4",
            PhysicalKey::Numpad5 => "VK_NUMPAD5",
            PhysicalKey::Numpad7 => "VK_NUMPAD7",
            PhysicalKey::Numpad8 => "VK_NUMPAD8",
            PhysicalKey::NumLock => "VK_NUMLOCK",
            PhysicalKey::Space => "VK_SPACE",
            PhysicalKey::Enter => "VK_RETURN",
            PhysicalKey::Escape => "VK_ESCAPE",
            PhysicalKey::F1 => "VK_F1",
            PhysicalKey::F2 => "VK_F2",
            PhysicalKey::F3 => "VK_F3",
            PhysicalKey::F10 => "VK_F10",
            PhysicalKey::F12 => "VK_F12",
            PhysicalKey::LeftControl => "VK_LCONTROL",
            PhysicalKey::LeftAlt => "VK_LMENU",
        }
    }
}

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.vk_name(), self.vk())
    }
}

/// Hardware-position code of a key, as produced by the OS layout translation.
///
/// `code` is the scan-code-set-1 make code; `extended` records whether the
/// key sits behind the `0xE0` / `0xE1` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanCode {
    code: u8,
    extended: bool,
}

impl ScanCode {
    pub const fn new(code: u8, extended: bool) -> Self {
        Self { code, extended }
    }

    /// Decodes the value returned by `MapVirtualKeyW(vk, MAPVK_VK_TO_VSC_EX)`.
    ///
    /// The low byte is the make code and the next byte, when present, is the
    /// `0xE0`/`0xE1` prefix.  A zero make code means the layout has no scan
    /// code for the key, which yields `None`.
    pub fn from_vsc_ex(raw: u32) -> Option<Self> {
        let code = (raw & 0xFF) as u8;
        if code == 0 {
            return None;
        }
        let prefix = (raw >> 8) & 0xFF;
        Some(Self {
            code,
            extended: prefix == 0xE0 || prefix == 0xE1,
        })
    }

    pub const fn code(self) -> u8 {
        self.code
    }

    pub const fn is_extended(self) -> bool {
        self.extended
    }

    /// Returns a copy with the extended bit forced on when `extended` is set.
    pub const fn with_extended(self, extended: bool) -> Self {
        Self {
            code: self.code,
            extended: self.extended || extended,
        }
    }
}

impl fmt::Display for ScanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extended {
            write!(f, "E0 {:02X}", self.code)
        } else {
            write!(f, "{:02X}", self.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_keys_have_distinct_vk_codes() {
        let codes: HashSet<u16> = PhysicalKey::ALL.iter().map(|k| k.vk()).collect();
        assert_eq!(codes.len(), PhysicalKey::ALL.len());
    }

    #[test]
    fn test_from_vk_finds_every_catalog_key() {
        for key in PhysicalKey::ALL {
            assert_eq!(PhysicalKey::from_vk(key.vk()), Some(key), "{key}");
        }
    }

    #[test]
    fn test_from_vk_rejects_codes_outside_the_catalog() {
        // VK_DIVIDE, VK_A, VK_RCONTROL
        for vk in [0x6Fu16, 0x41, 0xA3] {
            assert_eq!(PhysicalKey::from_vk(vk), None, "0x{vk:02X}");
        }
    }

    #[test]
    fn test_function_keys_use_their_own_vk_codes() {
        assert_eq!(PhysicalKey::F1.vk(), 0x70);
        assert_eq!(PhysicalKey::F2.vk(), 0x71);
        assert_eq!(PhysicalKey::F3.vk(), 0x72);
        assert_eq!(PhysicalKey::F10.vk(), 0x79);
        assert_eq!(PhysicalKey::F12.vk(), 0x7B);
    }

    #[test]
    fn test_only_numlock_is_extended() {
        let extended: Vec<_> = PhysicalKey::ALL.into_iter().filter(|k| k.is_extended()).collect();
        assert_eq!(extended, vec![PhysicalKey::NumLock]);
    }

    #[test]
    fn test_modifiers_are_left_control_and_left_alt() {
        let modifiers: Vec<_> = PhysicalKey::ALL.into_iter().filter(|k| k.is_modifier()).collect();
        assert_eq!(modifiers, vec![PhysicalKey::LeftControl, PhysicalKey::LeftAlt]);
    }

    #[test]
    fn test_display_includes_vk_name_and_code() {
        assert_eq!(PhysicalKey::Enter.to_string(), "VK_RETURN(0x0D)");
    }

    #[test]
    fn test_scan_code_from_vsc_ex_plain_code() {
        let sc = ScanCode::from_vsc_ex(0x1C).expect("non-zero code");
        assert_eq!(sc.code(), 0x1C);
        assert!(!sc.is_extended());
    }

    #[test]
    fn test_scan_code_from_vsc_ex_e0_prefix_sets_extended() {
        let sc = ScanCode::from_vsc_ex(0xE01D).expect("non-zero code");
        assert_eq!(sc.code(), 0x1D);
        assert!(sc.is_extended());
    }

    #[test]
    fn test_scan_code_from_vsc_ex_zero_is_none() {
        assert_eq!(ScanCode::from_vsc_ex(0), None);
        assert_eq!(ScanCode::from_vsc_ex(0xE000), None);
    }

    #[test]
    fn test_with_extended_never_clears_the_bit() {
        let sc = ScanCode::new(0x45, true);
        assert!(sc.with_extended(false).is_extended());
        assert!(ScanCode::new(0x45, false).with_extended(true).is_extended());
    }

    #[test]
    fn test_scan_code_display() {
        assert_eq!(ScanCode::new(0x1C, false).to_string(), "1C");
        assert_eq!(ScanCode::new(0x45, true).to_string(), "E0 45");
    }
}
