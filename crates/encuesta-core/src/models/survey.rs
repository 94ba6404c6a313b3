use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable identifier of a question within a survey. Also its ordering key:
/// the sequential flow of a survey is ascending question id.
pub type QuestionId = u32;

/// Identifier of an answer option. Unique across the survey.
pub type OptionId = u32;

/// A survey definition as served by `GET /api/v1/encuestas/{id}`.
///
/// The backend gives no order guarantee on `questions`; consumers sort by
/// id before traversing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Survey {
    #[serde(rename = "idEncuesta")]
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "preguntas", default)]
    pub questions: Vec<Question>,
}

impl Survey {
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[serde(rename = "idPregunta")]
    pub id: QuestionId,
    #[serde(rename = "textoPregunta")]
    pub text: String,
    #[serde(rename = "tipoPregunta")]
    pub kind: QuestionKind,
    #[serde(rename = "obligatoria", default)]
    pub required: bool,
    /// Hidden-by-default: excluded from sequential flow, reachable only by
    /// being the target of a jump.
    #[serde(rename = "oculta", default)]
    pub hidden: bool,
    #[serde(rename = "opciones", default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// Question type tags as the backend spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionKind {
    /// Free text, short or long. The backend historically used both tags.
    #[serde(rename = "TEXTO_LIBRE", alias = "TEXTO")]
    FreeText,
    #[serde(rename = "NUMERO")]
    Number,
    #[serde(rename = "FECHA")]
    Date,
    #[serde(rename = "SELECCION_UNICA", alias = "SELECCION")]
    SingleChoice,
    #[serde(rename = "SELECCION_MULTIPLE")]
    MultipleChoice,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    #[serde(rename = "idOpcion")]
    pub id: OptionId,
    #[serde(rename = "textoOpcion")]
    pub text: String,
    /// Skip-logic target: the question to show next when this option is
    /// selected on a single-choice question. A target that does not resolve
    /// is a data-integrity hazard, not an error.
    #[serde(rename = "idPreguntaDestino", default)]
    pub jump_to: Option<QuestionId>,
}
