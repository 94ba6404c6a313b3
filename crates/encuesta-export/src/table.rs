use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use encuesta_core::models::{Question, RegistrationDetail, Survey};

use crate::error::ExportError;

/// A survey's results as a wide table: fixed columns, then one column per
/// question in ascending-id order. The same layout the backend uses for
/// its Excel export.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

const FIXED_COLUMNS: [&str; 4] = ["ID Registro", "Fecha", "Paciente", "Usuario"];

/// Build the result table for a survey from its fetched registrations.
///
/// Per cell, option ids resolve to their display text and multiple
/// selections join with ", "; a question the registration never answered
/// leaves an empty cell. Registrations from another survey are rejected.
pub fn build_table(
    survey: &Survey,
    registrations: &[RegistrationDetail],
) -> Result<ResultTable, ExportError> {
    if let Some(foreign) = registrations.iter().find(|r| r.survey_id != survey.id) {
        return Err(ExportError::ForeignRegistration {
            registration_id: foreign.id,
            survey_id: survey.id,
        });
    }

    let mut questions: Vec<&Question> = survey.questions.iter().collect();
    questions.sort_by_key(|q| q.id);

    let mut header: Vec<String> = FIXED_COLUMNS.iter().map(|s| s.to_string()).collect();
    header.extend(questions.iter().map(|q| q.text.clone()));

    let mut rows = Vec::with_capacity(registrations.len());
    for registration in registrations {
        // Answer text per question; multi-select rows accumulate.
        let mut by_question: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for answer in &registration.answers {
            let text = match (answer.option_id, &answer.value_text) {
                (Some(option_id), _) => survey
                    .question(answer.question_id)
                    .and_then(|q| q.option(option_id))
                    .map(|o| o.text.clone())
                    .unwrap_or_else(|| option_id.to_string()),
                (None, Some(text)) => text.clone(),
                (None, None) => continue,
            };
            by_question.entry(answer.question_id).or_default().push(text);
        }

        let mut row = vec![
            registration.id.to_string(),
            registration.recorded_at.to_string(),
            registration.patient_name.clone().unwrap_or_default(),
            registration.username.clone().unwrap_or_default(),
        ];
        row.extend(questions.iter().map(|q| {
            by_question
                .get(&q.id)
                .map(|texts| texts.join(", "))
                .unwrap_or_default()
        }));
        rows.push(row);
    }

    debug!(
        survey_id = survey.id,
        rows = rows.len(),
        columns = header.len(),
        "result table built"
    );
    Ok(ResultTable { header, rows })
}
