use std::collections::BTreeSet;

use thiserror::Error;

use encuesta_core::models::{OptionId, QuestionId};

use crate::session::SessionPhase;

/// Controller misuse: these indicate a UI bug, not bad respondent input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("option {option_id} does not belong to question {question_id}")]
    ForeignOption {
        question_id: QuestionId,
        option_id: OptionId,
    },

    #[error("answer value does not match the type of question {0}")]
    KindMismatch(QuestionId),

    #[error("operation not allowed in phase {0:?}")]
    WrongPhase(SessionPhase),

    #[error(transparent)]
    Blocked(#[from] SubmitBlocked),
}

/// Why a submit attempt did not go out. Recoverable and user-facing;
/// the session drops back to answering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("no patient selected")]
    NoPatient,

    #[error("{} required question(s) unanswered", .0.len())]
    MissingRequired(BTreeSet<QuestionId>),
}
