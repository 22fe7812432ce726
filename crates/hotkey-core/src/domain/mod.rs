//! Domain types for hot-key injection.
//!
//! Everything here is pure data with no OS dependencies:
//!
//! - **`action`** – what a caller can ask for ([`action::KeyAction`]) and the
//!   class of event sequence each request needs ([`action::ActionClass`]).
//! - **`event`** – the immutable [`event::InputEvent`] records the engine
//!   builds immediately before an OS call and discards immediately after.

pub mod action;
pub mod event;
