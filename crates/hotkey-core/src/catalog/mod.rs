//! The closed catalog of symbolic actions.
//!
//! [`KeyCatalog`] maps every [`KeyAction`] to the [`PhysicalKey`] it drives and
//! the [`ActionClass`] of event sequence it needs.  It is built once at startup
//! with [`KeyCatalog::standard`] and handed to the engine (typically behind an
//! `Arc`).  There is no way to add, remove, or rebind entries afterwards.
//!
//! # How the table works
//!
//! `STANDARD_TABLE` is a compile-time array with one [`ActionBinding`] per
//! action, indexed by [`KeyAction::index`].  Resolving an action is a single
//! array read, and because the index of every action is below
//! [`KeyAction::COUNT`], resolution cannot fail.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::action::{ActionClass, HotKey, KeyAction, Modifier};
use crate::keymap::PhysicalKey;

/// Errors raised when a caller names something outside the catalog.
///
/// These are contract violations by the binding layer, not runtime failures
/// of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    #[error("unknown modifier: {0:?}")]
    UnknownModifier(String),
}

/// What an action resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActionBinding {
    pub key: PhysicalKey,
    pub class: ActionClass,
}

impl ActionBinding {
    pub const fn momentary(key: PhysicalKey) -> Self {
        Self {
            key,
            class: ActionClass::Momentary,
        }
    }

    pub const fn hold(key: PhysicalKey) -> Self {
        Self {
            key,
            class: ActionClass::ModifierHold,
        }
    }

    pub const fn release(key: PhysicalKey) -> Self {
        Self {
            key,
            class: ActionClass::ModifierRelease,
        }
    }
}

/// Immutable action → binding lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCatalog {
    table: [ActionBinding; KeyAction::COUNT],
}

impl KeyCatalog {
    /// Builds the standard catalog.
    pub fn standard() -> Self {
        debug!(actions = KeyAction::COUNT, "key catalog built");
        Self {
            table: STANDARD_TABLE,
        }
    }

    /// Resolves an action to its physical key and class.
    pub fn resolve(&self, action: KeyAction) -> ActionBinding {
        self.table[action.index()]
    }

    /// Parses a stable action name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownAction`] for names outside the catalog.
    pub fn lookup(&self, name: &str) -> Result<KeyAction, CatalogError> {
        name.parse()
    }

    /// Parses a stable action name and resolves it in one step.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownAction`] for names outside the catalog.
    pub fn resolve_name(&self, name: &str) -> Result<(KeyAction, ActionBinding), CatalogError> {
        let action = self.lookup(name)?;
        Ok((action, self.resolve(action)))
    }

    /// Every entry, in stable catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (KeyAction, ActionBinding)> + '_ {
        KeyAction::all().map(move |action| (action, self.resolve(action)))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for KeyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard bindings, indexed by [`KeyAction::index`].
const STANDARD_TABLE: [ActionBinding; KeyAction::COUNT] = {
    let mut t = [ActionBinding::momentary(PhysicalKey::Enter); KeyAction::COUNT];

    // ── Momentary presses ─────────────────────────────────────────────────────
    let mut i = 0;
    while i < HotKey::ALL.len() {
        let key = HotKey::ALL[i];
        t[KeyAction::Press(key).index()] = ActionBinding::momentary(key.physical_key());
        i += 1;
    }

    // ── Modifier holds and releases ───────────────────────────────────────────
    let mut m = 0;
    while m < Modifier::ALL.len() {
        let modifier = Modifier::ALL[m];
        t[KeyAction::Hold(modifier).index()] = ActionBinding::hold(modifier.physical_key());
        t[KeyAction::Release(modifier).index()] = ActionBinding::release(modifier.physical_key());
        m += 1;
    }

    t
};
