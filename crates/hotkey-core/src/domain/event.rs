//! Synthetic input event records.
//!
//! An [`InputEvent`] is built immediately before it is submitted and is never
//! retained afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keymap::{PhysicalKey, ScanCode};

/// Whether the event pushes the key down or lets it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDirection {
    Down,
    Up,
}

impl fmt::Display for KeyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDirection::Down => f.write_str("down"),
            KeyDirection::Up => f.write_str("up"),
        }
    }
}

/// How the key is identified to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyEncoding {
    /// Scan-code form.  The virtual-key field is ignored by the OS.
    ScanCode(ScanCode),
    /// Virtual-key form.  Only used when the layout has no scan code for the key.
    VirtualKey,
}

/// One synthetic keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputEvent {
    key: PhysicalKey,
    direction: KeyDirection,
    encoding: KeyEncoding,
}

impl InputEvent {
    pub const fn new(key: PhysicalKey, direction: KeyDirection, encoding: KeyEncoding) -> Self {
        Self {
            key,
            direction,
            encoding,
        }
    }

    /// Scan-code encoded down event.
    pub const fn down(key: PhysicalKey, scan_code: ScanCode) -> Self {
        Self::new(key, KeyDirection::Down, KeyEncoding::ScanCode(scan_code))
    }

    /// Scan-code encoded up event.
    pub const fn up(key: PhysicalKey, scan_code: ScanCode) -> Self {
        Self::new(key, KeyDirection::Up, KeyEncoding::ScanCode(scan_code))
    }

    pub const fn key(&self) -> PhysicalKey {
        self.key
    }

    pub const fn direction(&self) -> KeyDirection {
        self.direction
    }

    pub const fn encoding(&self) -> KeyEncoding {
        self.encoding
    }

    /// The scan code carried by the event, if it is scan-code encoded.
    pub const fn scan_code(&self) -> Option<ScanCode> {
        match self.encoding {
            KeyEncoding::ScanCode(sc) => Some(sc),
            KeyEncoding::VirtualKey => None,
        }
    }

    pub const fn is_scan_code(&self) -> bool {
        matches!(self.encoding, KeyEncoding::ScanCode(_))
    }

    /// Same key and encoding, opposite direction.
    pub const fn reversed(&self) -> Self {
        let direction = match self.direction {
            KeyDirection::Down => KeyDirection::Up,
            KeyDirection::Up => KeyDirection::Down,
        };
        Self::new(self.key, direction, self.encoding)
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding {
            KeyEncoding::ScanCode(sc) => write!(f, "{} {} [scan {}]", self.direction, self.key, sc),
            KeyEncoding::VirtualKey => write!(f, "{} {} [vk]", self.direction, self.key),
        }
    }
}
