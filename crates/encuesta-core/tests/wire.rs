use std::collections::BTreeSet;

use encuesta_core::models::{
    AnswerSubmission, AnswerValue, Patient, Question, QuestionKind, RegistrationRequest, Survey,
};

#[test]
fn survey_deserializes_backend_shape() {
    let json = r#"{
        "idEncuesta": 4,
        "titulo": "Tamizaje basal",
        "version": "1.2",
        "preguntas": [
            {
                "idPregunta": 1,
                "textoPregunta": "¿Fuma actualmente?",
                "tipoPregunta": "SELECCION_UNICA",
                "obligatoria": true,
                "opciones": [
                    { "idOpcion": 10, "textoOpcion": "Sí" },
                    { "idOpcion": 11, "textoOpcion": "No", "idPreguntaDestino": 3 }
                ]
            },
            {
                "idPregunta": 2,
                "textoPregunta": "¿Cuántos cigarrillos al día?",
                "tipoPregunta": "NUMERO",
                "obligatoria": false,
                "oculta": true,
                "opciones": []
            }
        ]
    }"#;

    let survey: Survey = serde_json::from_str(json).unwrap();
    assert_eq!(survey.id, 4);
    assert_eq!(survey.title, "Tamizaje basal");
    assert_eq!(survey.questions.len(), 2);

    let q1 = survey.question(1).unwrap();
    assert_eq!(q1.kind, QuestionKind::SingleChoice);
    assert!(q1.required);
    assert!(!q1.hidden);
    assert_eq!(q1.option(11).unwrap().jump_to, Some(3));
    assert_eq!(q1.option(10).unwrap().jump_to, None);

    let q2 = survey.question(2).unwrap();
    assert!(q2.hidden);
    assert_eq!(q2.kind, QuestionKind::Number);
}

#[test]
fn question_kind_accepts_legacy_aliases() {
    let q: Question = serde_json::from_str(
        r#"{ "idPregunta": 9, "textoPregunta": "x", "tipoPregunta": "TEXTO" }"#,
    )
    .unwrap();
    assert_eq!(q.kind, QuestionKind::FreeText);

    let q: Question = serde_json::from_str(
        r#"{ "idPregunta": 9, "textoPregunta": "x", "tipoPregunta": "SELECCION" }"#,
    )
    .unwrap();
    assert_eq!(q.kind, QuestionKind::SingleChoice);
}

#[test]
fn answer_value_round_trips() {
    let values = vec![
        AnswerValue::Text("dolor leve".to_string()),
        AnswerValue::Number(37.5),
        AnswerValue::Date(jiff::civil::date(2025, 11, 3)),
        AnswerValue::SingleChoice(12),
        AnswerValue::MultipleChoice(BTreeSet::from([10, 11])),
    ];

    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: AnswerValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn empty_answers_detected() {
    assert!(AnswerValue::Text("   ".to_string()).is_empty());
    assert!(AnswerValue::MultipleChoice(BTreeSet::new()).is_empty());
    assert!(!AnswerValue::Number(0.0).is_empty());
    assert!(!AnswerValue::SingleChoice(1).is_empty());
}

#[test]
fn registration_request_serializes_wire_names() {
    let request = RegistrationRequest {
        patient_id: 7,
        survey_id: 4,
        answers: vec![AnswerSubmission {
            question_id: 1,
            option_id: Some(10),
            value_text: None,
        }],
        is_draft: true,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["idPaciente"], 7);
    assert_eq!(json["idEncuesta"], 4);
    assert_eq!(json["esBorrador"], true);
    assert_eq!(json["respuestas"][0]["idPregunta"], 1);
    assert_eq!(json["respuestas"][0]["idOpcionSeleccionada"], 10);
    // Absent text value is omitted entirely, not null.
    assert!(json["respuestas"][0].get("valorTexto").is_none());
}

#[test]
fn patient_deserializes_and_displays() {
    let patient: Patient = serde_json::from_str(
        r#"{
            "idPaciente": 14,
            "rut": "12.345.678-5",
            "nombre": "María",
            "apellidos": "Rojas Díaz",
            "grupo": "CONTROL"
        }"#,
    )
    .unwrap();

    assert_eq!(patient.id, 14);
    assert_eq!(patient.display_name(), "María Rojas Díaz");
    assert_eq!(patient.birth_date, None);
}
