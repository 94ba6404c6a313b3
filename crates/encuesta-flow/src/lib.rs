//! encuesta-flow
//!
//! Skip-logic engine for survey response capture. Pure logic over
//! encuesta-core types — no HTTP, no UI.
//!
//! The three core functions are total: they never error and never panic,
//! degrading to empty outputs on inconsistent data. Internal
//! inconsistencies (a jump target that resolves nowhere) are reported as
//! data, not failures.

pub mod draft;
pub mod error;
pub mod session;
pub mod submission;
pub mod validation;
pub mod visibility;

pub use draft::hydrate_answers;
pub use error::{FlowError, SubmitBlocked};
pub use session::{ResponseSession, SessionPhase};
pub use submission::build_submission;
pub use validation::find_missing_required;
pub use visibility::{JumpHazard, VisibleFlow, compute_visible};
