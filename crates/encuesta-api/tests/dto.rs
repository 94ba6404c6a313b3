use encuesta_api::patients::PatientUpsert;
use encuesta_api::surveys::{OptionUpsert, QuestionUpsert, SurveyUpsert};
use encuesta_api::users::UserProfile;
use encuesta_core::models::QuestionKind;
use serde_json::json;

#[test]
fn survey_upsert_wire_names() {
    let payload = serde_json::to_value(SurveyUpsert {
        title: "Seguimiento semanal",
        description: Some("Síntomas de la semana"),
        version: None,
    })
    .unwrap();

    assert_eq!(
        payload,
        json!({
            "titulo": "Seguimiento semanal",
            "descripcion": "Síntomas de la semana"
        })
    );
}

#[test]
fn question_upsert_carries_jump_targets() {
    let payload = serde_json::to_value(QuestionUpsert {
        text: "¿Presenta síntomas?",
        kind: QuestionKind::SingleChoice,
        required: true,
        hidden: false,
        options: vec![
            OptionUpsert {
                text: "Sí",
                jump_to: Some(5),
            },
            OptionUpsert {
                text: "No",
                jump_to: None,
            },
        ],
    })
    .unwrap();

    assert_eq!(
        payload,
        json!({
            "textoPregunta": "¿Presenta síntomas?",
            "tipoPregunta": "SELECCION_UNICA",
            "obligatoria": true,
            "oculta": false,
            "opciones": [
                { "textoOpcion": "Sí", "idPreguntaDestino": 5 },
                { "textoOpcion": "No" }
            ]
        })
    );
}

#[test]
fn patient_upsert_omits_absent_fields() {
    let payload = serde_json::to_value(PatientUpsert {
        rut: "12.345.678-5",
        first_name: "María",
        last_name: "Rojas Díaz",
        phone: None,
        email: None,
        participant_code: Some("P-014"),
        group: Some("CONTROL"),
        birth_date: Some(jiff::civil::date(1987, 3, 21)),
    })
    .unwrap();

    assert_eq!(
        payload,
        json!({
            "rut": "12.345.678-5",
            "nombre": "María",
            "apellidos": "Rojas Díaz",
            "codigoParticipante": "P-014",
            "grupo": "CONTROL",
            "fechaNacimiento": "1987-03-21"
        })
    );
}

#[test]
fn user_profile_wire_shape() {
    let profile: UserProfile = serde_json::from_value(json!({
        "name": "Marcela",
        "lastname": "Rojas",
        "phone_number": "+56 9 1234 5678",
        "address": null,
        "email": "mrojas@example.cl"
    }))
    .unwrap();

    assert_eq!(profile.name, "Marcela");
    assert_eq!(profile.address, None);

    // update payload omits absent fields
    let payload = serde_json::to_value(UserProfile {
        name: "Marcela".to_string(),
        lastname: "Rojas".to_string(),
        phone_number: None,
        address: None,
        email: Some("mrojas@example.cl".to_string()),
    })
    .unwrap();
    assert_eq!(
        payload,
        json!({
            "name": "Marcela",
            "lastname": "Rojas",
            "email": "mrojas@example.cl"
        })
    );
}
