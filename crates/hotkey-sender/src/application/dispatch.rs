//! HotKeyDispatcher: the boolean surface a binding layer exposes to callers.
//!
//! Host-language bindings publish one callable per catalog name and can only
//! marshal a success flag back.  The dispatcher is that contract: every call
//! is synchronous, every failure (rejected injection or unknown name) is
//! logged and collapsed to `false`, and nothing panics.

use hotkey_core::{HotKey, KeyAction, Modifier};
use tracing::warn;

use super::inject_keys::{InjectionEngine, InjectionError};

/// Name-based front end over an [`InjectionEngine`].
#[derive(Clone)]
pub struct HotKeyDispatcher {
    engine: InjectionEngine,
}

impl HotKeyDispatcher {
    pub fn new(engine: InjectionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &InjectionEngine {
        &self.engine
    }

    /// Invokes the action published under `name`.
    ///
    /// Returns `true` only if the name is in the catalog and the OS accepted
    /// every event.
    pub fn invoke(&self, name: &str) -> bool {
        match self.engine.catalog().lookup(name) {
            Ok(action) => self.run(action),
            Err(e) => {
                warn!(name, "binding called outside the catalog: {e}");
                false
            }
        }
    }

    /// `press(<key>)`.
    pub fn press(&self, key: HotKey) -> bool {
        self.run(KeyAction::Press(key))
    }

    /// `holdModifier(<control|alt>)`.
    pub fn hold_modifier(&self, modifier: Modifier) -> bool {
        self.run(KeyAction::Hold(modifier))
    }

    /// `releaseModifier(<control|alt>)`.
    pub fn release_modifier(&self, modifier: Modifier) -> bool {
        self.run(KeyAction::Release(modifier))
    }

    /// Every name a binding layer should publish, in stable order.
    pub fn published_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.engine.catalog().entries().map(|(action, _)| action.name())
    }

    fn run(&self, action: KeyAction) -> bool {
        match self.engine.execute(action) {
            Ok(()) => true,
            Err(InjectionError::Rejected { accepted, requested, .. }) => {
                warn!(%action, accepted, requested, "simulated key had no effect");
                false
            }
            Err(e) => {
                warn!(%action, "action failed: {e}");
                false
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
