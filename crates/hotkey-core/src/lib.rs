//! # hotkey-core
//!
//! Shared, OS-free foundation for hot-key injection: the physical key
//! identifiers, the scan-code reference table, the input event records the
//! engine submits, and the closed catalog of symbolic actions callers bind to.
//!
//! This crate has zero dependencies on OS APIs.  The injection engine and the
//! platform backends live in `hotkey-sender`.
//!
//! # Architecture overview (for beginners)
//!
//! A host application wants to say "press Enter" or "hold Control" and have
//! the foreground application see exactly what a physical keyboard would have
//! produced.  Getting there takes three steps:
//!
//! - **`catalog`** – turns a symbolic action name (`"pressEnter"`) into a
//!   [`KeyAction`] and resolves it to the physical key it drives and the
//!   class of event sequence it needs (momentary press, modifier hold,
//!   modifier release).
//!
//! - **`keymap`** – defines [`PhysicalKey`] (the Windows virtual-key codes of
//!   every key in the catalog) and [`ScanCode`], the hardware-position code
//!   the OS derives from a virtual key.
//!
//! - **`domain`** – the transient records that flow through the engine:
//!   [`InputEvent`] (key + direction + encoding) and the action types.

pub mod catalog;
pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `hotkey_core::KeyCatalog` instead of `hotkey_core::catalog::KeyCatalog`.
pub use catalog::{ActionBinding, CatalogError, KeyCatalog};
pub use domain::action::{ActionClass, HotKey, KeyAction, Modifier};
pub use domain::event::{InputEvent, KeyDirection, KeyEncoding};
pub use keymap::{PhysicalKey, ScanCode};
