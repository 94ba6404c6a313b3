//! encuesta-core
//!
//! Pure domain types and wire DTOs for the survey backend.
//! No HTTP dependency — this is the shared vocabulary of the Encuesta system.

pub mod error;
pub mod models;
pub mod rut;
