use serde::Serialize;
use ts_rs::TS;

use encuesta_core::models::{AnswerState, AnswerValue, OptionId, Question, QuestionId, Survey};

/// A jump whose target never matched a remaining question: either the id
/// does not exist in the survey or it was already passed. The traversal
/// swallows the rest of the survey in that case; callers log this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct JumpHazard {
    pub from_question: QuestionId,
    pub via_option: OptionId,
    pub target: QuestionId,
}

/// The ordered questions currently shown to the respondent, plus any
/// unresolved jump detected on the way.
#[derive(Debug)]
pub struct VisibleFlow<'a> {
    pub questions: Vec<&'a Question>,
    pub hazard: Option<JumpHazard>,
}

impl VisibleFlow<'_> {
    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id == id)
    }

    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id).collect()
    }
}

/// Compute the visible question sequence for the current answers.
///
/// Single pass over the questions in ascending-id order, carrying at most
/// one pending jump target:
///
/// - While a jump is pending, every question except the target is skipped
///   outright; its answer is not consulted. Reaching the target clears the
///   jump and includes it.
/// - With no jump pending, hidden-by-default questions are skipped and
///   everything else is included.
/// - A question just included whose recorded answer is a single choice on
///   an option carrying a jump target arms that jump, effective from the
///   next question on. Only single-choice answers arm jumps; multiple
///   selections and free values never do, whatever their options claim.
///
/// Stateless and idempotent: identical inputs give identical output.
pub fn compute_visible<'a>(survey: &'a Survey, answers: &AnswerState) -> VisibleFlow<'a> {
    let mut ordered: Vec<&Question> = survey.questions.iter().collect();
    ordered.sort_by_key(|q| q.id);

    let mut visible = Vec::new();
    let mut pending: Option<JumpHazard> = None;

    for question in ordered {
        if let Some(jump) = pending {
            if question.id != jump.target {
                continue;
            }
            pending = None;
            visible.push(question);
        } else if question.hidden {
            continue;
        } else {
            visible.push(question);
        }

        // Reaching here means `question` was just included and no jump is
        // pending; its own answer may arm the next one.
        if let Some(AnswerValue::SingleChoice(option_id)) = answers.get(question.id)
            && question.kind == encuesta_core::models::QuestionKind::SingleChoice
            && let Some(option) = question.option(*option_id)
            && let Some(target) = option.jump_to
        {
            pending = Some(JumpHazard {
                from_question: question.id,
                via_option: option.id,
                target,
            });
        }
    }

    VisibleFlow {
        questions: visible,
        hazard: pending,
    }
}
