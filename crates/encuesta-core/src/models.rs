pub mod answer;
pub mod patient;
pub mod registration;
pub mod survey;

pub use answer::{AnswerState, AnswerSubmission, AnswerValue, RegistrationRequest};
pub use patient::Patient;
pub use registration::{
    DraftSummary, RegistrationDetail, RegistrationStatus, RegistrationSummary,
};
pub use survey::{AnswerOption, OptionId, Question, QuestionId, QuestionKind, Survey};
