use std::collections::BTreeSet;

use encuesta_core::models::{
    AnswerOption, AnswerState, AnswerValue, Question, QuestionKind, Survey,
};
use encuesta_flow::{compute_visible, find_missing_required};

fn question(id: u32, kind: QuestionKind, required: bool, hidden: bool) -> Question {
    Question {
        id,
        text: format!("pregunta {id}"),
        kind,
        required,
        hidden,
        options: vec![],
    }
}

#[test]
fn required_unanswered_visible_questions_flagged() {
    let q1 = question(1, QuestionKind::FreeText, true, false);
    let q2 = question(2, QuestionKind::FreeText, false, false);
    let q3 = question(3, QuestionKind::Number, true, false);
    let visible = [&q1, &q2, &q3];

    let missing = find_missing_required(&visible, &AnswerState::new());
    assert_eq!(missing, BTreeSet::from([1, 3]));
}

#[test]
fn empty_values_count_as_unanswered() {
    let q1 = question(1, QuestionKind::FreeText, true, false);
    let q2 = question(2, QuestionKind::MultipleChoice, true, false);
    let visible = [&q1, &q2];

    let mut answers = AnswerState::new();
    answers.set(1, AnswerValue::Text("  \t".to_string()));
    answers.set(2, AnswerValue::MultipleChoice([].into()));

    let missing = find_missing_required(&visible, &answers);
    assert_eq!(missing, BTreeSet::from([1, 2]));
}

#[test]
fn complete_form_yields_empty_set() {
    let q1 = question(1, QuestionKind::FreeText, true, false);
    let visible = [&q1];

    let mut answers = AnswerState::new();
    answers.set(1, AnswerValue::Text("sin observaciones".to_string()));

    assert!(find_missing_required(&visible, &answers).is_empty());
}

#[test]
fn invisible_required_question_is_exempt() {
    // Q5 is required but hidden-by-default and never targeted by a jump:
    // it cannot be answered, so it must not block submission.
    let survey = Survey {
        id: 1,
        title: "Encuesta".to_string(),
        description: None,
        version: None,
        questions: vec![
            Question {
                id: 1,
                text: "pregunta 1".to_string(),
                kind: QuestionKind::SingleChoice,
                required: true,
                hidden: false,
                options: vec![AnswerOption {
                    id: 10,
                    text: "opción 10".to_string(),
                    jump_to: None,
                }],
            },
            question(5, QuestionKind::FreeText, true, true),
        ],
    };

    let mut answers = AnswerState::new();
    answers.set(1, AnswerValue::SingleChoice(10));

    let flow = compute_visible(&survey, &answers);
    let missing = find_missing_required(&flow.questions, &answers);
    assert!(!missing.contains(&5));
    assert!(missing.is_empty());
}

#[test]
fn branch_left_behind_is_exempt() {
    // A required question inside a skipped range stops being flagged the
    // moment the jump bypasses it.
    let survey = Survey {
        id: 1,
        title: "Encuesta".to_string(),
        description: None,
        version: None,
        questions: vec![
            Question {
                id: 1,
                text: "pregunta 1".to_string(),
                kind: QuestionKind::SingleChoice,
                required: true,
                hidden: false,
                options: vec![AnswerOption {
                    id: 10,
                    text: "opción 10".to_string(),
                    jump_to: Some(3),
                }],
            },
            question(2, QuestionKind::FreeText, true, false),
            question(3, QuestionKind::FreeText, false, false),
        ],
    };

    let mut answers = AnswerState::new();

    let flow = compute_visible(&survey, &answers);
    assert_eq!(find_missing_required(&flow.questions, &answers), BTreeSet::from([1, 2]));

    answers.set(1, AnswerValue::SingleChoice(10));
    let flow = compute_visible(&survey, &answers);
    assert!(find_missing_required(&flow.questions, &answers).is_empty());
}
