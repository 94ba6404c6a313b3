//! encuesta-export
//!
//! Local CSV rendering of fetched survey results. The backend also serves
//! Excel/CSV exports; this crate builds the same wide table offline from
//! already-fetched registrations.

pub mod csv;
pub mod error;
pub mod table;

pub use csv::to_csv;
pub use error::ExportError;
pub use table::{ResultTable, build_table};
