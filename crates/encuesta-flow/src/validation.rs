use std::collections::BTreeSet;

use encuesta_core::models::{AnswerState, Question, QuestionId};

/// Required visible questions with no (non-empty) recorded answer.
///
/// Questions outside `visible` are never flagged, whatever their required
/// flag says — an invisible question cannot be answered. Empty set means
/// the form may be submitted. Visible order is ascending question id, so
/// the set's first element is the first error on screen.
pub fn find_missing_required(
    visible: &[&Question],
    answers: &AnswerState,
) -> BTreeSet<QuestionId> {
    visible
        .iter()
        .filter(|q| q.required && !answers.is_answered(q.id))
        .map(|q| q.id)
        .collect()
}
