use encuesta_core::models::{
    AnswerOption, AnswerSubmission, Question, QuestionKind, RegistrationDetail,
    RegistrationStatus, Survey,
};
use encuesta_export::{ExportError, build_table, to_csv};

fn fixture_survey() -> Survey {
    Survey {
        id: 4,
        title: "Tamizaje basal".to_string(),
        description: None,
        version: None,
        questions: vec![
            // Out of id order on purpose; the table must sort.
            Question {
                id: 2,
                text: "Síntomas".to_string(),
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
                id: 1,
                text: "Observaciones, generales".to_string(),
                kind: QuestionKind::FreeText,
                required: false,
                hidden: false,
                options: vec![],
            },
        ],
    }
}

fn registration(id: u32, answers: Vec<AnswerSubmission>) -> RegistrationDetail {
    RegistrationDetail {
        id,
        patient_id: 7,
        patient_name: Some("Ana Rojas".to_string()),
        survey_id: 4,
        recorded_at: "2025-11-03T14:00:00Z".parse().unwrap(),
        username: Some("enfermera1".to_string()),
        status: RegistrationStatus::Completed,
        answers,
    }
}

#[test]
fn header_is_fixed_columns_then_questions_by_id() {
    let table = build_table(&fixture_survey(), &[]).unwrap();
    assert_eq!(
        table.header,
        vec![
            "ID Registro",
            "Fecha",
            "Paciente",
            "Usuario",
            "Observaciones, generales",
            "Síntomas",
        ]
    );
    assert!(table.rows.is_empty());
}

#[test]
fn option_ids_resolve_to_text_and_join() {
    let survey = fixture_survey();
    let detail = registration(
        31,
        vec![
            AnswerSubmission {
                question_id: 2,
                option_id: Some(20),
                value_text: None,
            },
            AnswerSubmission {
                question_id: 2,
                option_id: Some(21),
                value_text: None,
            },
            AnswerSubmission {
                question_id: 1,
                option_id: None,
                value_text: Some("sin hallazgos".to_string()),
            },
        ],
    );

    let table = build_table(&survey, &[detail]).unwrap();
    let row = &table.rows[0];
    assert_eq!(row[0], "31");
    assert_eq!(row[2], "Ana Rojas");
    assert_eq!(row[3], "enfermera1");
    assert_eq!(row[4], "sin hallazgos");
    assert_eq!(row[5], "tos, fiebre");
}

#[test]
fn unanswered_questions_leave_empty_cells() {
    let table = build_table(&fixture_survey(), &[registration(31, vec![])]).unwrap();
    assert_eq!(table.rows[0][4], "");
    assert_eq!(table.rows[0][5], "");
}

#[test]
fn unknown_option_falls_back_to_its_id() {
    let detail = registration(
        31,
        vec![AnswerSubmission {
            question_id: 2,
            option_id: Some(77),
            value_text: None,
        }],
    );
    let table = build_table(&fixture_survey(), &[detail]).unwrap();
    assert_eq!(table.rows[0][5], "77");
}

#[test]
fn foreign_registration_is_rejected() {
    let mut detail = registration(31, vec![]);
    detail.survey_id = 9;

    match build_table(&fixture_survey(), &[detail]) {
        Err(ExportError::ForeignRegistration {
            registration_id,
            survey_id,
        }) => {
            assert_eq!(registration_id, 31);
            assert_eq!(survey_id, 4);
        }
        other => panic!("expected foreign-registration error, got {other:?}"),
    }
}

#[test]
fn csv_quotes_embedded_commas_and_quotes() {
    let survey = fixture_survey();
    let detail = registration(
        31,
        vec![AnswerSubmission {
            question_id: 1,
            option_id: None,
            value_text: Some("dijo \"bien\", sin dolor".to_string()),
        }],
    );

    let csv = to_csv(&build_table(&survey, &[detail]).unwrap());
    assert!(csv.contains("\"Observaciones, generales\""));
    assert!(csv.contains("\"dijo \"\"bien\"\", sin dolor\""));
    assert!(csv.ends_with("\r\n"));
}
