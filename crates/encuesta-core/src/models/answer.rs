use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::survey::{OptionId, QuestionId};

/// A single recorded answer, typed by the kind of question it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Date(jiff::civil::Date),
    SingleChoice(OptionId),
    MultipleChoice(BTreeSet<OptionId>),
}

impl AnswerValue {
    /// An empty answer counts as unanswered: blank/whitespace text or an
    /// empty selection set. Numbers and dates are never empty once set.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Number(_) | AnswerValue::Date(_) | AnswerValue::SingleChoice(_) => false,
            AnswerValue::MultipleChoice(selected) => selected.is_empty(),
        }
    }
}

/// The current answers of a response session, keyed by question id.
/// Absence of a key means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerState {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, question_id: QuestionId, value: AnswerValue) {
        self.answers.insert(question_id, value);
    }

    pub fn clear(&mut self, question_id: QuestionId) {
        self.answers.remove(&question_id);
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&AnswerValue> {
        self.answers.get(&question_id)
    }

    /// Answered means present and non-empty.
    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.answers
            .get(&question_id)
            .is_some_and(|value| !value.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }
}

/// One answer row of the registration payload (`RespuestaRequestDto`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSubmission {
    #[serde(rename = "idPregunta")]
    pub question_id: QuestionId,
    #[serde(rename = "idOpcionSeleccionada", default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<OptionId>,
    #[serde(rename = "valorTexto", default, skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
}

/// The registration payload sent to `POST /api/v1/encuestas/registro`,
/// for both final submissions and drafts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationRequest {
    #[serde(rename = "idPaciente")]
    pub patient_id: u32,
    #[serde(rename = "idEncuesta")]
    pub survey_id: u32,
    #[serde(rename = "respuestas")]
    pub answers: Vec<AnswerSubmission>,
    #[serde(rename = "esBorrador", default)]
    pub is_draft: bool,
}
