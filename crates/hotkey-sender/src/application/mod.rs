//! Application layer use cases.
//!
//! - **`inject_keys`** – the injection engine.  Turns a [`hotkey_core::KeyAction`]
//!   into correctly ordered, scan-code encoded events and hands them to an
//!   [`inject_keys::InputInjector`] implementation injected at construction
//!   time.
//!
//! - **`dispatch`** – the boolean, name-based surface a binding layer calls.
//!
//! - **`hotkey_state`** – tracks whether hot keys should be active, driven by
//!   game-context events (entering a match, opening chat, opening the menu).

pub mod dispatch;
pub mod hotkey_state;
pub mod inject_keys;
