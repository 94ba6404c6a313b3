use encuesta_core::models::{AnswerState, AnswerSubmission, AnswerValue, Question};

/// Project the current answers of the visible questions into the wire
/// payload.
///
/// Answers to questions outside `visible` are dropped even when present in
/// the answer state — a stale answer from an abandoned branch must never
/// reach the backend. Absent or empty answers contribute nothing (absence,
/// not an explicit null). Output order follows `visible`; a multiple
/// choice emits one row per selected option, ascending by option id.
pub fn build_submission(visible: &[&Question], answers: &AnswerState) -> Vec<AnswerSubmission> {
    let mut out = Vec::new();

    for question in visible {
        let Some(value) = answers.get(question.id) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match value {
            AnswerValue::SingleChoice(option_id) => out.push(AnswerSubmission {
                question_id: question.id,
                option_id: Some(*option_id),
                value_text: None,
            }),
            AnswerValue::MultipleChoice(selected) => {
                for option_id in selected {
                    out.push(AnswerSubmission {
                        question_id: question.id,
                        option_id: Some(*option_id),
                        value_text: None,
                    });
                }
            }
            AnswerValue::Text(text) => out.push(AnswerSubmission {
                question_id: question.id,
                option_id: None,
                value_text: Some(text.clone()),
            }),
            AnswerValue::Number(number) => out.push(AnswerSubmission {
                question_id: question.id,
                option_id: None,
                value_text: Some(number.to_string()),
            }),
            AnswerValue::Date(date) => out.push(AnswerSubmission {
                question_id: question.id,
                option_id: None,
                value_text: Some(date.to_string()),
            }),
        }
    }

    out
}
