//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration from the
//! platform-appropriate directory, writes it back for `init-config`, and
//! falls back to defaults when no file exists yet.

pub mod config;
