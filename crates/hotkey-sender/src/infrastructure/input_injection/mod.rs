//! Platform-specific input injection implementations.
//!
//! The native implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`; [`build_injector`] picks between it and the
//! recording backend at runtime from configuration.

pub mod recording;

#[cfg(target_os = "windows")]
pub mod windows;

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::inject_keys::InputInjector;
use crate::infrastructure::storage::config::Backend;

use self::recording::RecordingInjector;

/// Error returned when the configured backend cannot be constructed.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("the native injection backend is only available on Windows")]
    NativeUnavailable,
}

/// Constructs the injector selected by `backend`.
///
/// # Errors
///
/// Returns [`BackendError::NativeUnavailable`] when `Backend::Native` is
/// requested on a non-Windows build.
pub fn build_injector(backend: Backend) -> Result<Arc<dyn InputInjector>, BackendError> {
    info!(%backend, "selecting input injection backend");
    match backend {
        Backend::Recording => Ok(Arc::new(RecordingInjector::new())),
        Backend::Native => native(),
    }
}

#[cfg(target_os = "windows")]
fn native() -> Result<Arc<dyn InputInjector>, BackendError> {
    Ok(Arc::new(self::windows::WindowsInputInjector::new()))
}

#[cfg(not(target_os = "windows"))]
fn native() -> Result<Arc<dyn InputInjector>, BackendError> {
    Err(BackendError::NativeUnavailable)
}
