//! InjectionEngine: turns symbolic key actions into OS input events.
//!
//! This use case sits at the application layer and delegates to an
//! [`InputInjector`] trait object for the two things only the OS can do:
//! translate a virtual key into a scan code under the current layout, and
//! accept a synthetic event into the input stream.  The platform-specific
//! implementations are in the infrastructure layer.
//!
//! # Event sequences
//!
//! | Class            | Submissions                    |
//! |------------------|--------------------------------|
//! | Momentary        | `down(key)`, then `up(key)`    |
//! | ModifierHold     | `down(key)`                    |
//! | ModifierRelease  | `up(key)`                      |
//!
//! A hold is never paired with a release by the engine.  Pairing them is the
//! caller's job, and so is serialising calls that must not interleave: the
//! engine carries no state between calls and takes no locks.

use std::sync::Arc;

use hotkey_core::{
    ActionClass, CatalogError, HotKey, InputEvent, KeyAction, KeyCatalog, KeyDirection,
    KeyEncoding, Modifier, PhysicalKey, ScanCode,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for injection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    /// The OS accepted fewer events than were submitted.  Typical causes are
    /// an elevated foreground process, the secure desktop, or an
    /// input-blocking policy.  Not retried.
    #[error("OS accepted {accepted} of {requested} {class} events for {key}")]
    Rejected {
        key: PhysicalKey,
        class: ActionClass,
        requested: u32,
        accepted: u32,
    },

    /// The caller named an action outside the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Platform input injection port.
///
/// Each supported OS provides an implementation in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait InputInjector: Send + Sync {
    /// Translates `key` into its scan code under the current keyboard layout.
    ///
    /// Called on every injection; implementations must not cache across
    /// layout changes.  Returns `None` when the layout has no scan code for
    /// the key.
    fn scan_code(&self, key: PhysicalKey) -> Option<ScanCode>;

    /// Submits one event and returns how many events the OS accepted (0 or 1).
    fn submit(&self, event: &InputEvent) -> u32;
}

/// The injection engine.
///
/// Cheap to share: both collaborators are behind `Arc`.
#[derive(Clone)]
pub struct InjectionEngine {
    catalog: Arc<KeyCatalog>,
    injector: Arc<dyn InputInjector>,
}

impl InjectionEngine {
    /// Creates an engine over the given catalog and platform injector.
    pub fn new(catalog: Arc<KeyCatalog>, injector: Arc<dyn InputInjector>) -> Self {
        Self { catalog, injector }
    }

    pub fn catalog(&self) -> &KeyCatalog {
        &self.catalog
    }

    /// Executes one catalog action.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] if the OS accepted fewer events
    /// than the action's class requires.
    pub fn execute(&self, action: KeyAction) -> Result<(), InjectionError> {
        let binding = self.catalog.resolve(action);
        debug!(%action, key = %binding.key, class = %binding.class, "executing action");
        match binding.class {
            ActionClass::Momentary => self.execute_momentary(binding.key),
            ActionClass::ModifierHold => self.execute_modifier_hold(binding.key),
            ActionClass::ModifierRelease => self.execute_modifier_release(binding.key),
        }
    }

    /// Parses a stable action name and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Catalog`] for unknown names, otherwise as
    /// [`InjectionEngine::execute`].
    pub fn execute_named(&self, name: &str) -> Result<KeyAction, InjectionError> {
        let action = self.catalog.lookup(name)?;
        self.execute(action)?;
        Ok(action)
    }

    /// Presses and releases a hot key.
    ///
    /// # Errors
    ///
    /// See [`InjectionEngine::execute`].
    pub fn press(&self, key: HotKey) -> Result<(), InjectionError> {
        self.execute(KeyAction::Press(key))
    }

    /// Pushes a modifier down and leaves it down.
    ///
    /// # Errors
    ///
    /// See [`InjectionEngine::execute`].
    pub fn hold(&self, modifier: Modifier) -> Result<(), InjectionError> {
        self.execute(KeyAction::Hold(modifier))
    }

    /// Lets a modifier up.
    ///
    /// # Errors
    ///
    /// See [`InjectionEngine::execute`].
    pub fn release(&self, modifier: Modifier) -> Result<(), InjectionError> {
        self.execute(KeyAction::Release(modifier))
    }

    /// Submits `down(key)` then `up(key)` as two back-to-back submissions.
    ///
    /// The up event is submitted even when the down event was rejected, so a
    /// partially accepted press never leaves the key logically held.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] unless both events were accepted.
    pub fn execute_momentary(&self, key: PhysicalKey) -> Result<(), InjectionError> {
        let down = self.encode(key, KeyDirection::Down);
        let up = down.reversed();

        // Nothing may run between these two submissions.
        let accepted = self.injector.submit(&down);
        let accepted = accepted.saturating_add(self.injector.submit(&up));

        settle(key, ActionClass::Momentary, accepted)
    }

    /// Submits a single `down(key)`.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] if the event was not accepted.
    pub fn execute_modifier_hold(&self, key: PhysicalKey) -> Result<(), InjectionError> {
        let event = self.encode(key, KeyDirection::Down);
        let accepted = self.injector.submit(&event);
        settle(key, ActionClass::ModifierHold, accepted)
    }

    /// Submits a single `up(key)`.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] if the event was not accepted.
    pub fn execute_modifier_release(&self, key: PhysicalKey) -> Result<(), InjectionError> {
        let event = self.encode(key, KeyDirection::Up);
        let accepted = self.injector.submit(&event);
        settle(key, ActionClass::ModifierRelease, accepted)
    }

    /// Builds the event for `key`, resolving its scan code afresh.
    fn encode(&self, key: PhysicalKey, direction: KeyDirection) -> InputEvent {
        let encoding = match self.injector.scan_code(key) {
            Some(sc) => KeyEncoding::ScanCode(sc.with_extended(key.is_extended())),
            None => {
                warn!(%key, "layout has no scan code for key; using virtual-key form");
                KeyEncoding::VirtualKey
            }
        };
        InputEvent::new(key, direction, encoding)
    }
}

/// Collapses an accepted-event count into the binary per-action result.
fn settle(key: PhysicalKey, class: ActionClass, accepted: u32) -> Result<(), InjectionError> {
    let requested = class.event_count() as u32;
    if accepted >= requested {
        debug!(%key, %class, accepted, "injection accepted");
        Ok(())
    } else {
        warn!(%key, %class, requested, accepted, "injection rejected by OS");
        Err(InjectionError::Rejected {
            key,
            class,
            requested,
            accepted,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
