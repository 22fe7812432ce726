//! Symbolic actions and their classes.
//!
//! Callers never name virtual keys directly.  They pick a [`KeyAction`]:
//!
//! - `Press(HotKey)` – a momentary key press (down then up).
//! - `Hold(Modifier)` – push a modifier down and leave it down.
//! - `Release(Modifier)` – let a held modifier go.
//!
//! Each action has a stable name (`"pressEnter"`, `"holdCtrl"`, …).  External
//! callers bind to these names, so they must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::domain::event::KeyDirection;
use crate::keymap::PhysicalKey;

/// The shape of the event sequence an action produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionClass {
    /// Down immediately followed by up.
    Momentary,
    /// A single down; the key stays logically held.
    ModifierHold,
    /// A single up.
    ModifierRelease,
}

impl ActionClass {
    /// Directions of the events this class emits, in submission order.
    pub const fn directions(self) -> &'static [KeyDirection] {
        match self {
            ActionClass::Momentary => &[KeyDirection::Down, KeyDirection::Up],
            ActionClass::ModifierHold => &[KeyDirection::Down],
            ActionClass::ModifierRelease => &[KeyDirection::Up],
        }
    }

    /// Number of events one action of this class submits.
    pub const fn event_count(self) -> usize {
        self.directions().len()
    }
}

impl fmt::Display for ActionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionClass::Momentary => "momentary",
            ActionClass::ModifierHold => "modifier-hold",
            ActionClass::ModifierRelease => "modifier-release",
        };
        f.write_str(s)
    }
}

/// A key that can be pressed momentarily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotKey {
    Num1,
    Num2,
    Num4,
    Num5,
    Num7,
    Num8,
    NumLock,
    Space,
    Enter,
    Escape,
    F1,
    F2,
    F3,
    F10,
    F12,
}

impl HotKey {
    pub const ALL: [HotKey; 15] = [
        HotKey::Num1,
        HotKey::Num2,
        HotKey::Num4,
        HotKey::Num5,
        HotKey::Num7,
        HotKey::Num8,
        HotKey::NumLock,
        HotKey::Space,
        HotKey::Enter,
        HotKey::Escape,
        HotKey::F1,
        HotKey::F2,
        HotKey::F3,
        HotKey::F10,
        HotKey::F12,
    ];

    /// Short lowercase name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            HotKey::Num1 => "num1",
            HotKey::Num2 => "num2",
            HotKey::Num4 => "num4",
            HotKey::Num5 => "num5",
            HotKey::Num7 => "num7",
            HotKey::Num8 => "num8",
            HotKey::NumLock => "numlock",
            HotKey::Space => "space",
            HotKey::Enter => "enter",
            HotKey::Escape => "escape",
            HotKey::F1 => "f1",
            HotKey::F2 => "f2",
            HotKey::F3 => "f3",
            HotKey::F10 => "f10",
            HotKey::F12 => "f12",
        }
    }

    /// The physical key this hot key drives.
    pub const fn physical_key(self) -> PhysicalKey {
        match self {
            HotKey::Num1 => PhysicalKey::Numpad1,
            HotKey::Num2 => PhysicalKey::Numpad2,
            HotKey::Num4 => PhysicalKey::Numpad4,
            HotKey::Num5 => PhysicalKey::Numpad5,
            HotKey::Num7 => PhysicalKey::Numpad7,
            HotKey::Num8 => PhysicalKey::Numpad8,
            HotKey::NumLock => PhysicalKey::NumLock,
            HotKey::Space => PhysicalKey::Space,
            HotKey::Enter => PhysicalKey::Enter,
            HotKey::Escape => PhysicalKey::Escape,
            HotKey::F1 => PhysicalKey::F1,
            HotKey::F2 => PhysicalKey::F2,
            HotKey::F3 => PhysicalKey::F3,
            HotKey::F10 => PhysicalKey::F10,
            HotKey::F12 => PhysicalKey::F12,
        }
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HotKey {
    type Err = CatalogError;

    /// Parses a short key name, case-insensitively.  `esc` and `return` are
    /// accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let canonical = match lowered.as_str() {
            "esc" => "escape",
            "return" => "enter",
            other => other,
        };
        HotKey::ALL
            .into_iter()
            .find(|k| k.name() == canonical)
            .ok_or_else(|| CatalogError::UnknownKey(s.to_string()))
    }
}

/// A left-hand modifier that can be held and released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Control,
    Alt,
}

impl Modifier {
    pub const ALL: [Modifier; 2] = [Modifier::Control, Modifier::Alt];

    pub const fn name(self) -> &'static str {
        match self {
            Modifier::Control => "control",
            Modifier::Alt => "alt",
        }
    }

    pub const fn physical_key(self) -> PhysicalKey {
        match self {
            Modifier::Control => PhysicalKey::LeftControl,
            Modifier::Alt => PhysicalKey::LeftAlt,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modifier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "control" | "ctrl" => Ok(Modifier::Control),
            "alt" => Ok(Modifier::Alt),
            _ => Err(CatalogError::UnknownModifier(s.to_string())),
        }
    }
}

/// A symbolic operation exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAction {
    Press(HotKey),
    Hold(Modifier),
    Release(Modifier),
}

impl KeyAction {
    /// Number of actions in the closed catalog domain.
    pub const COUNT: usize = HotKey::ALL.len() + 2 * Modifier::ALL.len();

    /// Every action, in stable catalog order: presses first, then holds,
    /// then releases.
    pub fn all() -> impl Iterator<Item = KeyAction> {
        HotKey::ALL
            .into_iter()
            .map(KeyAction::Press)
            .chain(Modifier::ALL.into_iter().map(KeyAction::Hold))
            .chain(Modifier::ALL.into_iter().map(KeyAction::Release))
    }

    /// Position of the action in [`KeyAction::all`] order.
    ///
    /// Always below [`KeyAction::COUNT`], so it can index fixed-size tables.
    pub const fn index(self) -> usize {
        match self {
            KeyAction::Press(key) => key as usize,
            KeyAction::Hold(modifier) => HotKey::ALL.len() + modifier as usize,
            KeyAction::Release(modifier) => {
                HotKey::ALL.len() + Modifier::ALL.len() + modifier as usize
            }
        }
    }

    /// The stable name external callers bind to.
    pub const fn name(self) -> &'static str {
        match self {
            KeyAction::Press(HotKey::Num1) => "pressNum1",
            KeyAction::Press(HotKey::Num2) => "pressNum2",
            KeyAction::Press(HotKey::Num4) => "pressNum4",
            KeyAction::Press(HotKey::Num5) => "pressNum5",
            KeyAction::Press(HotKey::Num7) => "pressNum7",
            KeyAction::Press(HotKey::Num8) => "pressNum8",
            KeyAction::Press(HotKey::NumLock) => "pressNumLock",
            KeyAction::Press(HotKey::Space) => "pressSpace",
            KeyAction::Press(HotKey::Enter) => "pressEnter",
            KeyAction::Press(HotKey::Escape) => "pressEscape",
            KeyAction::Press(HotKey::F1) => "pressF1",
            KeyAction::Press(HotKey::F2) => "pressF2",
            KeyAction::Press(HotKey::F3) => "pressF3",
            KeyAction::Press(HotKey::F10) => "pressF10",
            KeyAction::Press(HotKey::F12) => "pressF12",
            KeyAction::Hold(Modifier::Control) => "holdCtrl",
            KeyAction::Hold(Modifier::Alt) => "holdAlt",
            KeyAction::Release(Modifier::Control) => "releaseCtrl",
            KeyAction::Release(Modifier::Alt) => "releaseAlt",
        }
    }

    /// Parses a stable action name.  Matching is exact: the names are a
    /// contract, not user input.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|action| action.name() == name)
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyAction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CatalogError::UnknownAction(s.to_string()))
    }
}

impl From<HotKey> for PhysicalKey {
    fn from(key: HotKey) -> Self {
        key.physical_key()
    }
}

impl From<Modifier> for PhysicalKey {
    fn from(modifier: Modifier) -> Self {
        modifier.physical_key()
    }
}
