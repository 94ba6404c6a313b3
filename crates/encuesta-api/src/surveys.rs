use serde::Serialize;
use tracing::info;

use encuesta_core::models::{AnswerOption, Question, QuestionKind, Survey};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Payload for creating or renaming a survey.
#[derive(Debug, Serialize)]
pub struct SurveyUpsert<'a> {
    #[serde(rename = "titulo")]
    pub title: &'a str,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(rename = "version", skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
}

/// Payload for the survey builder: a new or edited question with its
/// options. Option jump targets ride along (`idPreguntaDestino`).
#[derive(Debug, Serialize)]
pub struct QuestionUpsert<'a> {
    #[serde(rename = "textoPregunta")]
    pub text: &'a str,
    #[serde(rename = "tipoPregunta")]
    pub kind: QuestionKind,
    #[serde(rename = "obligatoria")]
    pub required: bool,
    #[serde(rename = "oculta")]
    pub hidden: bool,
    #[serde(rename = "opciones")]
    pub options: Vec<OptionUpsert<'a>>,
}

#[derive(Debug, Serialize)]
pub struct OptionUpsert<'a> {
    #[serde(rename = "textoOpcion")]
    pub text: &'a str,
    #[serde(rename = "idPreguntaDestino", skip_serializing_if = "Option::is_none")]
    pub jump_to: Option<u32>,
}

impl ApiClient {
    pub async fn list_surveys(&self) -> Result<Vec<Survey>, ApiError> {
        self.get_json("/api/v1/encuestas").await
    }

    pub async fn get_survey(&self, survey_id: u32) -> Result<Survey, ApiError> {
        info!(survey_id, "fetching survey");
        self.get_json(&format!("/api/v1/encuestas/{survey_id}")).await
    }

    pub async fn create_survey(&self, survey: &SurveyUpsert<'_>) -> Result<Survey, ApiError> {
        info!(title = survey.title, "creating survey");
        self.post_json("/api/v1/encuestas", survey).await
    }

    pub async fn update_survey(
        &self,
        survey_id: u32,
        survey: &SurveyUpsert<'_>,
    ) -> Result<Survey, ApiError> {
        self.put_json(&format!("/api/v1/encuestas/{survey_id}"), survey).await
    }

    pub async fn delete_survey(&self, survey_id: u32) -> Result<(), ApiError> {
        info!(survey_id, "deleting survey");
        self.delete(&format!("/api/v1/encuestas/{survey_id}")).await
    }

    pub async fn add_question(
        &self,
        survey_id: u32,
        question: &QuestionUpsert<'_>,
    ) -> Result<Question, ApiError> {
        info!(survey_id, "adding question");
        self.post_json(&format!("/api/v1/encuestas/{survey_id}/preguntas"), question)
            .await
    }

    pub async fn update_question(
        &self,
        question_id: u32,
        question: &QuestionUpsert<'_>,
    ) -> Result<Question, ApiError> {
        self.put_json(&format!("/api/v1/encuestas/preguntas/{question_id}"), question)
            .await
    }

    pub async fn delete_question(&self, question_id: u32) -> Result<(), ApiError> {
        info!(question_id, "deleting question");
        self.delete(&format!("/api/v1/encuestas/preguntas/{question_id}"))
            .await
    }
}

impl<'a> From<&'a Question> for QuestionUpsert<'a> {
    fn from(question: &'a Question) -> Self {
        Self {
            text: &question.text,
            kind: question.kind,
            required: question.required,
            hidden: question.hidden,
            options: question.options.iter().map(OptionUpsert::from).collect(),
        }
    }
}

impl<'a> From<&'a AnswerOption> for OptionUpsert<'a> {
    fn from(option: &'a AnswerOption) -> Self {
        Self {
            text: &option.text,
            jump_to: option.jump_to,
        }
    }
}
