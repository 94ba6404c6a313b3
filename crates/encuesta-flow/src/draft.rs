use std::collections::BTreeSet;

use encuesta_core::models::{
    AnswerState, AnswerSubmission, AnswerValue, QuestionKind, Survey,
};

/// Rebuild an answer state from the flat answer rows of a stored draft.
///
/// Draft rows are keyed by question id only; the survey definition decides
/// how each row is typed. Rows that no longer line up with the survey —
/// unknown question ids, option ids that moved to another question,
/// unparseable numbers or dates — are dropped silently, since a draft may
/// predate a survey edit. Multiple rows for one multiple-choice question
/// fold into a single selection set.
pub fn hydrate_answers(survey: &Survey, rows: &[AnswerSubmission]) -> AnswerState {
    let mut answers = AnswerState::new();

    for row in rows {
        let Some(question) = survey.question(row.question_id) else {
            continue;
        };

        match question.kind {
            QuestionKind::SingleChoice => {
                if let Some(option_id) = row.option_id
                    && question.option(option_id).is_some()
                {
                    answers.set(question.id, AnswerValue::SingleChoice(option_id));
                }
            }
            QuestionKind::MultipleChoice => {
                let Some(option_id) = row.option_id else {
                    continue;
                };
                if question.option(option_id).is_none() {
                    continue;
                }
                let mut selected = match answers.get(question.id) {
                    Some(AnswerValue::MultipleChoice(set)) => set.clone(),
                    _ => BTreeSet::new(),
                };
                selected.insert(option_id);
                answers.set(question.id, AnswerValue::MultipleChoice(selected));
            }
            QuestionKind::FreeText => {
                if let Some(text) = &row.value_text
                    && !text.trim().is_empty()
                {
                    answers.set(question.id, AnswerValue::Text(text.clone()));
                }
            }
            QuestionKind::Number => {
                if let Some(text) = &row.value_text
                    && let Ok(number) = text.trim().parse::<f64>()
                {
                    answers.set(question.id, AnswerValue::Number(number));
                }
            }
            QuestionKind::Date => {
                if let Some(text) = &row.value_text
                    && let Ok(date) = text.trim().parse::<jiff::civil::Date>()
                {
                    answers.set(question.id, AnswerValue::Date(date));
                }
            }
        }
    }

    answers
}
