use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::warn;

use encuesta_api::ApiClient;
use encuesta_api::patients::PatientUpsert;
use encuesta_api::surveys::{OptionUpsert, QuestionUpsert, SurveyUpsert};
use encuesta_api::users::UserProfile;
use encuesta_core::models::{
    AnswerValue, DraftSummary, Patient, Question, QuestionId, QuestionKind, Survey,
};
use encuesta_desktop::audit::AuditEvent;
use encuesta_desktop::config::{self, ConfigInfo, EncuestaConfig};
use encuesta_desktop::storage::{ACCESS_TOKEN_KEY, FileStore, KvStore, USER_ROLE_KEY};
use encuesta_flow::{ResponseSession, SessionPhase};

use crate::state::DesktopState;

/// What the frontend renders for the active response session: the visible
/// questions in flow order plus everything still blocking submission.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub survey_id: u32,
    pub survey_title: String,
    pub phase: SessionPhase,
    pub patient_id: Option<u32>,
    pub visible: Vec<Question>,
    pub missing_required: Vec<QuestionId>,
}

fn session_view(session: &ResponseSession) -> SessionView {
    let flow = session.visible();
    if let Some(hazard) = &flow.hazard {
        warn!(
            survey_id = session.survey().id,
            from_question = hazard.from_question,
            via_option = hazard.via_option,
            target = hazard.target,
            "jump target resolves nowhere; flow truncated"
        );
    }
    let missing = encuesta_flow::find_missing_required(&flow.questions, session.answers());
    SessionView {
        survey_id: session.survey().id,
        survey_title: session.survey().title.clone(),
        phase: session.phase(),
        patient_id: session.patient_id(),
        visible: flow.questions.into_iter().cloned().collect(),
        missing_required: missing.into_iter().collect(),
    }
}

async fn require_api(state: &DesktopState) -> Result<ApiClient, String> {
    state
        .api
        .lock()
        .await
        .clone()
        .ok_or_else(|| "not logged in".to_string())
}

async fn current_user(state: &DesktopState) -> String {
    state
        .username
        .lock()
        .await
        .clone()
        .unwrap_or_else(|| "unknown".to_string())
}

// -- configuration ----------------------------------------------------------

#[tauri::command]
pub async fn get_config() -> Result<Option<ConfigInfo>, String> {
    if !config::has_config() {
        return Ok(None);
    }
    let cfg = config::load_config().map_err(|e| e.to_string())?;
    Ok(Some(config::config_info(&cfg)))
}

#[tauri::command]
pub async fn configure(
    api_base_url: String,
    remember_user: Option<String>,
) -> Result<ConfigInfo, String> {
    let cfg = EncuestaConfig {
        config_version: config::CURRENT_VERSION,
        api_base_url,
        created_at: jiff::Timestamp::now(),
        remember_user,
    };
    config::save_config(&cfg).map_err(|e| e.to_string())?;
    Ok(config::config_info(&cfg))
}

/// Forget the stored configuration, sending the operator back through
/// first-run setup on the next launch.
#[tauri::command]
pub async fn reset_config() -> Result<(), String> {
    config::delete_config().map_err(|e| e.to_string())
}

// -- authentication ---------------------------------------------------------

/// Role the backend resolved for the logged-in user, for the frontend to
/// pick its landing screen.
#[tauri::command]
pub async fn login(
    state: State<'_, DesktopState>,
    username: String,
    password: String,
) -> Result<Option<String>, String> {
    let cfg = config::load_config().map_err(|e| e.to_string())?;
    let mut api = ApiClient::new(&cfg.api_base_url);
    let response = api.login(&username, &password).await.map_err(|e| e.to_string())?;

    let store = FileStore::open_default().map_err(|e| e.to_string())?;
    store
        .set(ACCESS_TOKEN_KEY, &response.access_token)
        .map_err(|e| e.to_string())?;
    if let Some(role) = &response.role {
        store.set(USER_ROLE_KEY, role).map_err(|e| e.to_string())?;
    }

    *state.api.lock().await = Some(api);
    *state.username.lock().await = Some(username.clone());

    AuditEvent::new("login", "sesion", &username, &username).emit();
    Ok(response.role)
}

/// Rebuild the client from the stored token, so a restart does not force a
/// fresh login. Returns the stored role when a token was found.
#[tauri::command]
pub async fn restore_session(state: State<'_, DesktopState>) -> Result<Option<String>, String> {
    if !config::has_config() {
        return Ok(None);
    }
    let cfg = config::load_config().map_err(|e| e.to_string())?;
    let store = FileStore::open_default().map_err(|e| e.to_string())?;
    let Some(token) = store.get(ACCESS_TOKEN_KEY).map_err(|e| e.to_string())? else {
        return Ok(None);
    };
    let role = store.get(USER_ROLE_KEY).map_err(|e| e.to_string())?;

    *state.api.lock().await = Some(ApiClient::with_token(&cfg.api_base_url, token));
    *state.username.lock().await = cfg.remember_user;
    Ok(role)
}

#[tauri::command]
pub async fn logout(state: State<'_, DesktopState>) -> Result<(), String> {
    let username = current_user(&state).await;
    if let Some(api) = state.api.lock().await.as_mut() {
        api.logout();
    }
    *state.api.lock().await = None;
    *state.username.lock().await = None;
    state.session.lock().await.close();

    let store = FileStore::open_default().map_err(|e| e.to_string())?;
    store.remove(ACCESS_TOKEN_KEY).map_err(|e| e.to_string())?;
    store.remove(USER_ROLE_KEY).map_err(|e| e.to_string())?;

    AuditEvent::new("logout", "sesion", &username, &username).emit();
    Ok(())
}

// -- patients ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PatientForm {
    pub rut: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub participant_code: Option<String>,
    pub group: Option<String>,
    /// ISO calendar date, "2001-07-14".
    pub birth_date: Option<String>,
}

fn patient_upsert(form: &PatientForm) -> Result<PatientUpsert<'_>, String> {
    let birth_date = form
        .birth_date
        .as_deref()
        .map(str::parse::<jiff::civil::Date>)
        .transpose()
        .map_err(|e| e.to_string())?;
    Ok(PatientUpsert {
        rut: &form.rut,
        first_name: &form.first_name,
        last_name: &form.last_name,
        phone: form.phone.as_deref(),
        email: form.email.as_deref(),
        participant_code: form.participant_code.as_deref(),
        group: form.group.as_deref(),
        birth_date,
    })
}

#[tauri::command]
pub async fn list_patients(state: State<'_, DesktopState>) -> Result<Vec<Patient>, String> {
    let api = require_api(&state).await?;
    api.list_patients().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn find_patient_by_rut(
    state: State<'_, DesktopState>,
    rut: String,
) -> Result<Patient, String> {
    let api = require_api(&state).await?;
    api.get_patient_by_rut(&rut).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_patient(
    state: State<'_, DesktopState>,
    mut form: PatientForm,
) -> Result<Patient, String> {
    let api = require_api(&state).await?;
    // Canonical dotted form; a bad verifier digit never reaches the backend.
    form.rut = encuesta_core::rut::parse(&form.rut).map_err(|e| e.to_string())?;
    let patient = api
        .create_patient(&patient_upsert(&form)?)
        .await
        .map_err(|e| e.to_string())?;
    AuditEvent::new(
        "create_patient",
        "paciente",
        patient.id.to_string(),
        current_user(&state).await,
    )
    .with_details(serde_json::json!({
        "nombre": patient.display_name(),
        "rut": patient.rut,
    }))
    .emit();
    Ok(patient)
}

#[tauri::command]
pub async fn update_patient(
    state: State<'_, DesktopState>,
    patient_id: u32,
    mut form: PatientForm,
) -> Result<Patient, String> {
    let api = require_api(&state).await?;
    form.rut = encuesta_core::rut::parse(&form.rut).map_err(|e| e.to_string())?;
    let patient = api
        .update_patient(patient_id, &patient_upsert(&form)?)
        .await
        .map_err(|e| e.to_string())?;
    AuditEvent::new(
        "update_patient",
        "paciente",
        patient_id.to_string(),
        current_user(&state).await,
    )
    .with_details(serde_json::json!({ "nombre": patient.display_name() }))
    .emit();
    Ok(patient)
}

#[tauri::command]
pub async fn delete_patient(state: State<'_, DesktopState>, patient_id: u32) -> Result<(), String> {
    let api = require_api(&state).await?;
    api.delete_patient(patient_id).await.map_err(|e| e.to_string())?;
    AuditEvent::new(
        "delete_patient",
        "paciente",
        patient_id.to_string(),
        current_user(&state).await,
    )
    .emit();
    Ok(())
}

// -- survey catalogue and builder -------------------------------------------

#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    pub text: String,
    pub kind: QuestionKind,
    pub required: bool,
    pub hidden: bool,
    pub options: Vec<OptionForm>,
}

#[derive(Debug, Deserialize)]
pub struct OptionForm {
    pub text: String,
    pub jump_to: Option<u32>,
}

fn question_upsert(form: &QuestionForm) -> QuestionUpsert<'_> {
    QuestionUpsert {
        text: &form.text,
        kind: form.kind,
        required: form.required,
        hidden: form.hidden,
        options: form
            .options
            .iter()
            .map(|o| OptionUpsert {
                text: &o.text,
                jump_to: o.jump_to,
            })
            .collect(),
    }
}

#[tauri::command]
pub async fn list_surveys(state: State<'_, DesktopState>) -> Result<Vec<Survey>, String> {
    let api = require_api(&state).await?;
    api.list_surveys().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_survey(state: State<'_, DesktopState>, survey_id: u32) -> Result<Survey, String> {
    let api = require_api(&state).await?;
    api.get_survey(survey_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_survey(
    state: State<'_, DesktopState>,
    title: String,
    description: Option<String>,
    version: Option<String>,
) -> Result<Survey, String> {
    let api = require_api(&state).await?;
    api.create_survey(&SurveyUpsert {
        title: &title,
        description: description.as_deref(),
        version: version.as_deref(),
    })
    .await
    .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_survey(
    state: State<'_, DesktopState>,
    survey_id: u32,
    title: String,
    description: Option<String>,
    version: Option<String>,
) -> Result<Survey, String> {
    let api = require_api(&state).await?;
    api.update_survey(
        survey_id,
        &SurveyUpsert {
            title: &title,
            description: description.as_deref(),
            version: version.as_deref(),
        },
    )
    .await
    .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_survey(state: State<'_, DesktopState>, survey_id: u32) -> Result<(), String> {
    let api = require_api(&state).await?;
    api.delete_survey(survey_id).await.map_err(|e| e.to_string())?;
    AuditEvent::new(
        "delete_survey",
        "encuesta",
        survey_id.to_string(),
        current_user(&state).await,
    )
    .emit();
    Ok(())
}

#[tauri::command]
pub async fn add_question(
    state: State<'_, DesktopState>,
    survey_id: u32,
    form: QuestionForm,
) -> Result<Question, String> {
    let api = require_api(&state).await?;
    api.add_question(survey_id, &question_upsert(&form))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_question(
    state: State<'_, DesktopState>,
    question_id: u32,
    form: QuestionForm,
) -> Result<Question, String> {
    let api = require_api(&state).await?;
    api.update_question(question_id, &question_upsert(&form))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_question(
    state: State<'_, DesktopState>,
    question_id: u32,
) -> Result<(), String> {
    let api = require_api(&state).await?;
    api.delete_question(question_id).await.map_err(|e| e.to_string())
}

// -- user administration (admin role only) ----------------------------------

#[tauri::command]
pub async fn list_users(state: State<'_, DesktopState>) -> Result<Vec<UserProfile>, String> {
    let api = require_api(&state).await?;
    api.list_users().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_user(
    state: State<'_, DesktopState>,
    user_id: u32,
    profile: UserProfile,
) -> Result<(), String> {
    let api = require_api(&state).await?;
    api.update_user(user_id, &profile).await.map_err(|e| e.to_string())?;
    AuditEvent::new(
        "update_user",
        "usuario",
        user_id.to_string(),
        current_user(&state).await,
    )
    .emit();
    Ok(())
}

#[tauri::command]
pub async fn delete_user(state: State<'_, DesktopState>, user_id: u32) -> Result<(), String> {
    let api = require_api(&state).await?;
    api.delete_user(user_id).await.map_err(|e| e.to_string())?;
    AuditEvent::new(
        "delete_user",
        "usuario",
        user_id.to_string(),
        current_user(&state).await,
    )
    .emit();
    Ok(())
}

// -- response capture -------------------------------------------------------

#[tauri::command]
pub async fn start_response(
    state: State<'_, DesktopState>,
    survey_id: u32,
) -> Result<SessionView, String> {
    let api = require_api(&state).await?;
    let epoch = state.session.lock().await.epoch;

    let survey = api.get_survey(survey_id).await.map_err(|e| e.to_string())?;

    let mut slot = state.session.lock().await;
    if slot.epoch != epoch {
        return Err("session changed while loading".to_string());
    }
    slot.install(ResponseSession::new(survey));
    match &slot.current {
        Some(session) => Ok(session_view(session)),
        None => Err("no active session".to_string()),
    }
}

#[tauri::command]
pub async fn resume_draft(
    state: State<'_, DesktopState>,
    registration_id: u32,
) -> Result<SessionView, String> {
    let api = require_api(&state).await?;
    let epoch = state.session.lock().await.epoch;

    let detail = api
        .get_registration(registration_id)
        .await
        .map_err(|e| e.to_string())?;
    let survey = api
        .get_survey(detail.survey_id)
        .await
        .map_err(|e| e.to_string())?;

    let mut slot = state.session.lock().await;
    if slot.epoch != epoch {
        return Err("session changed while loading".to_string());
    }
    slot.install(ResponseSession::resume(
        survey,
        detail.patient_id,
        detail.id,
        &detail.answers,
    ));
    match &slot.current {
        Some(session) => Ok(session_view(session)),
        None => Err("no active session".to_string()),
    }
}

#[tauri::command]
pub async fn close_session(state: State<'_, DesktopState>) -> Result<(), String> {
    state.session.lock().await.close();
    Ok(())
}

#[tauri::command]
pub async fn select_patient(
    state: State<'_, DesktopState>,
    patient_id: u32,
) -> Result<SessionView, String> {
    let mut slot = state.session.lock().await;
    let session = slot.current.as_mut().ok_or("no active session")?;
    session.select_patient(patient_id).map_err(|e| e.to_string())?;
    Ok(session_view(session))
}

#[tauri::command]
pub async fn set_answer(
    state: State<'_, DesktopState>,
    question_id: u32,
    value: AnswerValue,
) -> Result<SessionView, String> {
    let mut slot = state.session.lock().await;
    let session = slot.current.as_mut().ok_or("no active session")?;
    session.set_answer(question_id, value).map_err(|e| e.to_string())?;
    Ok(session_view(session))
}

#[tauri::command]
pub async fn clear_answer(
    state: State<'_, DesktopState>,
    question_id: u32,
) -> Result<SessionView, String> {
    let mut slot = state.session.lock().await;
    let session = slot.current.as_mut().ok_or("no active session")?;
    session.clear_answer(question_id).map_err(|e| e.to_string())?;
    Ok(session_view(session))
}

#[tauri::command]
pub async fn visible_questions(state: State<'_, DesktopState>) -> Result<SessionView, String> {
    let slot = state.session.lock().await;
    let session = slot.current.as_ref().ok_or("no active session")?;
    Ok(session_view(session))
}

/// Submit the session as a completed registration. The network call runs
/// with the session lock released; a submission that lands after the
/// operator abandoned the session is discarded.
#[tauri::command]
pub async fn submit_response(state: State<'_, DesktopState>) -> Result<u32, String> {
    let api = require_api(&state).await?;
    let (request, epoch) = {
        let mut slot = state.session.lock().await;
        let session = slot.current.as_mut().ok_or("no active session")?;
        let request = session.begin_submit().map_err(|e| e.to_string())?;
        (request, slot.epoch)
    };

    let result = api.save_registration(&request).await;

    let mut slot = state.session.lock().await;
    if slot.epoch != epoch {
        return Err("session changed while submitting".to_string());
    }
    let session = slot.current.as_mut().ok_or("no active session")?;
    match result {
        Ok(receipt) => {
            session.submit_succeeded();
            AuditEvent::new(
                "submit_registration",
                "registro",
                receipt.registration_id.to_string(),
                current_user(&state).await,
            )
            .with_details(serde_json::json!({
                "idEncuesta": request.survey_id,
                "idPaciente": request.patient_id,
                "respuestas": request.answers.len(),
            }))
            .emit();
            Ok(receipt.registration_id)
        }
        Err(e) => {
            session.submit_failed();
            Err(e.to_string())
        }
    }
}

/// Save the session as a draft, skipping required-field validation.
#[tauri::command]
pub async fn save_draft(state: State<'_, DesktopState>) -> Result<u32, String> {
    let api = require_api(&state).await?;
    let (request, epoch) = {
        let mut slot = state.session.lock().await;
        let session = slot.current.as_mut().ok_or("no active session")?;
        let request = session.begin_draft().map_err(|e| e.to_string())?;
        (request, slot.epoch)
    };

    let result = api.save_registration(&request).await;

    let mut slot = state.session.lock().await;
    if slot.epoch != epoch {
        return Err("session changed while saving".to_string());
    }
    let session = slot.current.as_mut().ok_or("no active session")?;
    match result {
        Ok(receipt) => {
            session.draft_saved();
            AuditEvent::new(
                "save_draft",
                "registro",
                receipt.registration_id.to_string(),
                current_user(&state).await,
            )
            .emit();
            Ok(receipt.registration_id)
        }
        Err(e) => {
            session.draft_failed();
            Err(e.to_string())
        }
    }
}

#[tauri::command]
pub async fn list_drafts(state: State<'_, DesktopState>) -> Result<Vec<DraftSummary>, String> {
    let api = require_api(&state).await?;
    api.list_drafts().await.map_err(|e| e.to_string())
}

// -- exports ----------------------------------------------------------------

/// Build the result table locally and write it as CSV.
#[tauri::command]
pub async fn export_csv(
    state: State<'_, DesktopState>,
    survey_id: u32,
    destination: PathBuf,
) -> Result<(), String> {
    let api = require_api(&state).await?;
    let survey = api.get_survey(survey_id).await.map_err(|e| e.to_string())?;
    let registrations = api
        .list_registration_details(survey_id)
        .await
        .map_err(|e| e.to_string())?;

    let table =
        encuesta_export::build_table(&survey, &registrations).map_err(|e| e.to_string())?;
    std::fs::write(&destination, encuesta_export::to_csv(&table)).map_err(|e| e.to_string())?;

    AuditEvent::new(
        "export_csv",
        "encuesta",
        survey_id.to_string(),
        current_user(&state).await,
    )
    .emit();
    Ok(())
}

/// Download the backend-rendered Excel workbook.
#[tauri::command]
pub async fn export_excel(
    state: State<'_, DesktopState>,
    survey_id: u32,
    destination: PathBuf,
) -> Result<(), String> {
    let api = require_api(&state).await?;
    let bytes = api.export_excel(survey_id).await.map_err(|e| e.to_string())?;
    std::fs::write(&destination, bytes).map_err(|e| e.to_string())?;

    AuditEvent::new(
        "export_excel",
        "encuesta",
        survey_id.to_string(),
        current_user(&state).await,
    )
    .emit();
    Ok(())
}
