//! encuesta-desktop library root.
//!
//! Re-exports the non-UI modules so that integration tests can exercise
//! them directly (config migrations, the credential store, audit events)
//! without going through the Tauri command layer.

pub mod audit;
pub mod config;
pub mod storage;
