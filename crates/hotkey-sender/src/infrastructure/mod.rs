//! Infrastructure layer for hotkey-sender.
//!
//! Contains OS-facing adapters: the input injection backends and the
//! configuration file store.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `hotkey_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`input_injection`** – implementations of `InputInjector`.  The native
//!   Windows backend is compiled only on Windows; the recording backend is
//!   available everywhere and backs dry runs and tests.
//!
//! - **`storage`** – TOML configuration load/save under the platform config
//!   directory.

pub mod input_injection;
pub mod storage;
