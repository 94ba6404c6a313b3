//! encuesta-api
//!
//! HTTP operations against the survey backend. Thin wrapper around reqwest;
//! the backend is an opaque collaborator and every call maps one endpoint.

pub mod auth;
pub mod client;
pub mod error;
pub mod exports;
pub mod patients;
pub mod registrations;
pub mod surveys;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
