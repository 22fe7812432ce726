//! hotkey-sender library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does hotkey-sender do? (for beginners)
//!
//! A host application (a game launcher, a macro tool) wants to press keys on
//! the user's behalf so that the foreground application cannot tell the
//! difference from a physical keyboard.  This crate:
//!
//! 1. Takes a symbolic request (`"pressEnter"`, `hold(Modifier::Alt)`).
//! 2. Resolves it through the [`hotkey_core::KeyCatalog`] to a physical key
//!    and an action class.
//! 3. Asks the OS for the key's scan code under the current layout.
//! 4. Submits the scan-code encoded down/up events through the platform
//!    injection API (`SendInput` on Windows).
//! 5. Reports whether the OS accepted every event.

/// Application layer: the injection engine, the name-based dispatcher, and
/// the hot-key activation state machine.
pub mod application;

/// Infrastructure layer: OS injection backends and configuration storage.
pub mod infrastructure;
