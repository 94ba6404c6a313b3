use serde::Serialize;
use ts_rs::TS;

use encuesta_core::models::{
    AnswerState, AnswerSubmission, AnswerValue, QuestionId, QuestionKind, RegistrationRequest,
    Survey,
};

use crate::draft::hydrate_answers;
use crate::error::{FlowError, SubmitBlocked};
use crate::submission::build_submission;
use crate::validation::find_missing_required;
use crate::visibility::{VisibleFlow, compute_visible};

/// Where a response session currently stands.
///
/// SelectingPatient → Answering → Submitting → Done, with Submitting
/// falling back to Answering on rejection. Draft saves detour through
/// SavingDraft and always come back to Answering; they never pass
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum SessionPhase {
    SelectingPatient,
    Answering,
    SavingDraft,
    Submitting,
    Done,
}

/// One survey-response session: the survey snapshot (immutable for the
/// session's lifetime), the chosen patient, and the answers so far.
///
/// The session owns no I/O. Callers fetch and dispatch; the session
/// decides what is visible, what may be submitted, and in which phase an
/// operation is legal.
#[derive(Debug, Clone)]
pub struct ResponseSession {
    survey: Survey,
    patient_id: Option<u32>,
    /// Set when resuming a stored draft, so a later save updates it.
    draft_registration: Option<u32>,
    answers: AnswerState,
    phase: SessionPhase,
}

impl ResponseSession {
    pub fn new(survey: Survey) -> Self {
        Self {
            survey,
            patient_id: None,
            draft_registration: None,
            answers: AnswerState::new(),
            phase: SessionPhase::SelectingPatient,
        }
    }

    /// Resume a stored draft: patient already chosen, answers rehydrated
    /// against the current survey definition.
    pub fn resume(
        survey: Survey,
        patient_id: u32,
        registration_id: u32,
        rows: &[AnswerSubmission],
    ) -> Self {
        let answers = hydrate_answers(&survey, rows);
        Self {
            survey,
            patient_id: Some(patient_id),
            draft_registration: Some(registration_id),
            answers,
            phase: SessionPhase::Answering,
        }
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn patient_id(&self) -> Option<u32> {
        self.patient_id
    }

    pub fn draft_registration(&self) -> Option<u32> {
        self.draft_registration
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    /// The questions currently shown, recomputed from scratch. Callers
    /// should log the hazard, if any.
    pub fn visible(&self) -> VisibleFlow<'_> {
        compute_visible(&self.survey, &self.answers)
    }

    /// Choosing (or switching) the patient is legal until a submit or
    /// draft save is in flight.
    pub fn select_patient(&mut self, patient_id: u32) -> Result<(), FlowError> {
        match self.phase {
            SessionPhase::SelectingPatient | SessionPhase::Answering => {
                self.patient_id = Some(patient_id);
                self.phase = SessionPhase::Answering;
                Ok(())
            }
            phase => Err(FlowError::WrongPhase(phase)),
        }
    }

    /// Record an answer. The value must match the question's type, and
    /// choice values must reference options of that question. Re-selecting
    /// the already-selected single-choice option is a no-op (standard
    /// radio semantics); clearing is [`clear_answer`](Self::clear_answer).
    pub fn set_answer(&mut self, question_id: QuestionId, value: AnswerValue) -> Result<(), FlowError> {
        if self.phase != SessionPhase::Answering {
            return Err(FlowError::WrongPhase(self.phase));
        }
        let question = self
            .survey
            .question(question_id)
            .ok_or(FlowError::UnknownQuestion(question_id))?;

        match (&value, question.kind) {
            (AnswerValue::SingleChoice(option_id), QuestionKind::SingleChoice) => {
                if question.option(*option_id).is_none() {
                    return Err(FlowError::ForeignOption {
                        question_id,
                        option_id: *option_id,
                    });
                }
            }
            (AnswerValue::MultipleChoice(selected), QuestionKind::MultipleChoice) => {
                if let Some(option_id) = selected.iter().find(|id| question.option(**id).is_none()) {
                    return Err(FlowError::ForeignOption {
                        question_id,
                        option_id: *option_id,
                    });
                }
            }
            (AnswerValue::Text(_), QuestionKind::FreeText)
            | (AnswerValue::Number(_), QuestionKind::Number)
            | (AnswerValue::Date(_), QuestionKind::Date) => {}
            _ => return Err(FlowError::KindMismatch(question_id)),
        }

        self.answers.set(question_id, value);
        Ok(())
    }

    pub fn clear_answer(&mut self, question_id: QuestionId) -> Result<(), FlowError> {
        if self.phase != SessionPhase::Answering {
            return Err(FlowError::WrongPhase(self.phase));
        }
        if self.survey.question(question_id).is_none() {
            return Err(FlowError::UnknownQuestion(question_id));
        }
        self.answers.clear(question_id);
        Ok(())
    }

    /// Gate and project a final submission. Requires a patient and every
    /// required visible question answered; on success the session moves to
    /// Submitting and the caller dispatches the payload.
    pub fn begin_submit(&mut self) -> Result<RegistrationRequest, FlowError> {
        if self.phase != SessionPhase::Answering {
            return Err(FlowError::WrongPhase(self.phase));
        }
        let patient_id = self.patient_id.ok_or(SubmitBlocked::NoPatient)?;

        let visible = compute_visible(&self.survey, &self.answers);
        let missing = find_missing_required(&visible.questions, &self.answers);
        if !missing.is_empty() {
            return Err(SubmitBlocked::MissingRequired(missing).into());
        }

        let answers = build_submission(&visible.questions, &self.answers);
        self.phase = SessionPhase::Submitting;
        Ok(RegistrationRequest {
            patient_id,
            survey_id: self.survey.id,
            answers,
            is_draft: false,
        })
    }

    pub fn submit_succeeded(&mut self) {
        if self.phase == SessionPhase::Submitting {
            self.phase = SessionPhase::Done;
        }
    }

    pub fn submit_failed(&mut self) {
        if self.phase == SessionPhase::Submitting {
            self.phase = SessionPhase::Answering;
        }
    }

    /// Project a draft save. Drafts need a patient to attach to but skip
    /// required-field validation entirely; visibility filtering still
    /// applies, so abandoned branches are not persisted.
    pub fn begin_draft(&mut self) -> Result<RegistrationRequest, FlowError> {
        if self.phase != SessionPhase::Answering {
            return Err(FlowError::WrongPhase(self.phase));
        }
        let patient_id = self.patient_id.ok_or(SubmitBlocked::NoPatient)?;

        let visible = compute_visible(&self.survey, &self.answers);
        let answers = build_submission(&visible.questions, &self.answers);
        self.phase = SessionPhase::SavingDraft;
        Ok(RegistrationRequest {
            patient_id,
            survey_id: self.survey.id,
            answers,
            is_draft: true,
        })
    }

    /// Draft saves return to Answering whatever the outcome; navigation
    /// after a successful save is the caller's decision.
    pub fn draft_saved(&mut self) {
        if self.phase == SessionPhase::SavingDraft {
            self.phase = SessionPhase::Answering;
        }
    }

    pub fn draft_failed(&mut self) {
        if self.phase == SessionPhase::SavingDraft {
            self.phase = SessionPhase::Answering;
        }
    }
}
