#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .manage(state::DesktopState::default())
        .invoke_handler(tauri::generate_handler![
            commands::get_config,
            commands::configure,
            commands::reset_config,
            commands::login,
            commands::restore_session,
            commands::logout,
            commands::list_patients,
            commands::find_patient_by_rut,
            commands::create_patient,
            commands::update_patient,
            commands::delete_patient,
            commands::list_surveys,
            commands::get_survey,
            commands::create_survey,
            commands::update_survey,
            commands::delete_survey,
            commands::add_question,
            commands::update_question,
            commands::delete_question,
            commands::list_users,
            commands::update_user,
            commands::delete_user,
            commands::start_response,
            commands::resume_draft,
            commands::close_session,
            commands::select_patient,
            commands::set_answer,
            commands::clear_answer,
            commands::visible_questions,
            commands::submit_response,
            commands::save_draft,
            commands::list_drafts,
            commands::export_csv,
            commands::export_excel,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
