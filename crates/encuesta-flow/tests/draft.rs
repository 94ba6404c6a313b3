use encuesta_core::models::{
    AnswerOption, AnswerSubmission, AnswerValue, Question, QuestionKind, Survey,
};
use encuesta_flow::hydrate_answers;

fn row(question_id: u32, option_id: Option<u32>, value_text: Option<&str>) -> AnswerSubmission {
    AnswerSubmission {
        question_id,
        option_id,
        value_text: value_text.map(str::to_string),
    }
}

fn fixture_survey() -> Survey {
    Survey {
        id: 4,
        title: "Encuesta".to_string(),
        description: None,
        version: None,
        questions: vec![
            Question {
                id: 1,
                text: "selección".to_string(),
                kind: QuestionKind::SingleChoice,
                required: false,
                hidden: false,
                options: vec![AnswerOption {
                    id: 10,
                    text: "a".to_string(),
                    jump_to: None,
                }],
            },
            Question {
                id: 2,
                text: "síntomas".to_string(),
                kind: QuestionKind::MultipleChoice,
                required: false,
                hidden: false,
                options: vec![
                    AnswerOption {
                        id: 20,
                        text: "tos".to_string(),
                        jump_to: None,
                    },
                    AnswerOption {
                        id: 21,
                        text: "fiebre".to_string(),
                        jump_to: None,
                    },
                ],
            },
            Question {
                id: 3,
                text: "edad".to_string(),
                kind: QuestionKind::Number,
                required: false,
                hidden: false,
                options: vec![],
            },
            Question {
                id: 4,
                text: "fecha de inclusión".to_string(),
                kind: QuestionKind::Date,
                required: false,
                hidden: false,
                options: vec![],
            },
        ],
    }
}

#[test]
fn rows_hydrate_by_question_kind() {
    let survey = fixture_survey();
    let rows = vec![
        row(1, Some(10), None),
        row(3, None, Some("44")),
        row(4, None, Some("2025-06-30")),
    ];

    let answers = hydrate_answers(&survey, &rows);
    assert_eq!(answers.get(1), Some(&AnswerValue::SingleChoice(10)));
    assert_eq!(answers.get(3), Some(&AnswerValue::Number(44.0)));
    assert_eq!(
        answers.get(4),
        Some(&AnswerValue::Date(jiff::civil::date(2025, 6, 30)))
    );
}

#[test]
fn multiple_rows_fold_into_one_selection_set() {
    let survey = fixture_survey();
    let rows = vec![row(2, Some(21), None), row(2, Some(20), None)];

    let answers = hydrate_answers(&survey, &rows);
    assert_eq!(
        answers.get(2),
        Some(&AnswerValue::MultipleChoice([20, 21].into()))
    );
}

#[test]
fn stale_rows_are_dropped() {
    let survey = fixture_survey();
    let rows = vec![
        // Question deleted since the draft was saved.
        row(99, None, Some("huérfana")),
        // Option no longer on this question.
        row(1, Some(77), None),
        // Number that stopped parsing.
        row(3, None, Some("cuarenta")),
        // Date in a shape the backend never produces.
        row(4, None, Some("30/06/2025")),
    ];

    let answers = hydrate_answers(&survey, &rows);
    assert!(answers.is_blank());
}

#[test]
fn blank_text_rows_are_dropped() {
    let mut survey = fixture_survey();
    survey.questions.push(Question {
        id: 5,
        text: "observaciones".to_string(),
        kind: QuestionKind::FreeText,
        required: false,
        hidden: false,
        options: vec![],
    });

    let answers = hydrate_answers(&survey, &[row(5, None, Some("   "))]);
    assert!(answers.is_blank());
}
