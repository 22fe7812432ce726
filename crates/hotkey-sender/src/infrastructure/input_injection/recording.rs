//! Recording input injector.
//!
//! # Why a recording injector?
//!
//! The native injector pushes events into the real input stream of whatever
//! desktop the process runs on.  That is useless in CI and unwanted in a dry
//! run.  `RecordingInjector` replaces both OS calls:
//!
//! - scan codes come from the US set-1 reference table in
//!   [`hotkey_core::keymap::scan_set1`];
//! - submissions are appended to a `Mutex<Vec<...>>` so callers can inspect
//!   exactly what would have been sent, and in what order.
//!
//! # Simulating rejection
//!
//! [`Acceptance`] controls how many submissions the "OS" accepts, which lets
//! tests drive the engine's failure path without a locked workstation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use hotkey_core::keymap::scan_set1;
use hotkey_core::{InputEvent, PhysicalKey, ScanCode};

use crate::application::inject_keys::InputInjector;

/// How the recording injector answers submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Acceptance {
    #[default]
    AcceptAll,
    RejectAll,
    /// Accept the first `n` submissions, reject the rest.
    AcceptFirst(usize),
}

/// One submitted event and whether it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub event: InputEvent,
    pub accepted: bool,
}

#[derive(Debug, Default)]
pub struct RecordingInjector {
    acceptance: Acceptance,
    /// Keys the simulated layout has no scan code for.
    unmapped: Vec<PhysicalKey>,
    submissions: Mutex<Vec<Submission>>,
    lookups: AtomicUsize,
}

impl RecordingInjector {
    /// Accepts everything and maps every key.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_acceptance(acceptance: Acceptance) -> Self {
        Self {
            acceptance,
            ..Self::default()
        }
    }

    /// Makes the simulated layout report no scan code for `key`.
    pub fn without_scan_code(mut self, key: PhysicalKey) -> Self {
        self.unmapped.push(key);
        self
    }

    /// Every submission so far, accepted or not.
    pub fn submissions(&self) -> Vec<Submission> {
        self.lock().clone()
    }

    /// Every submitted event, in order.
    pub fn events(&self) -> Vec<InputEvent> {
        self.lock().iter().map(|s| s.event).collect()
    }

    /// Only the events the simulated OS accepted.
    pub fn accepted_events(&self) -> Vec<InputEvent> {
        self.lock().iter().filter(|s| s.accepted).map(|s| s.event).collect()
    }

    /// How many times a scan code was requested.
    pub fn scan_code_lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Submission>> {
        // A panic in another test thread must not hide what was recorded.
        self.submissions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InputInjector for RecordingInjector {
    fn scan_code(&self, key: PhysicalKey) -> Option<ScanCode> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if self.unmapped.contains(&key) {
            return None;
        }
        Some(scan_set1::scan_code(key))
    }

    fn submit(&self, event: &InputEvent) -> u32 {
        let mut submissions = self.lock();
        let accepted = match self.acceptance {
            Acceptance::AcceptAll => true,
            Acceptance::RejectAll => false,
            Acceptance::AcceptFirst(n) => submissions.len() < n,
        };
        submissions.push(Submission {
            event: *event,
            accepted,
        });
        u32::from(accepted)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
