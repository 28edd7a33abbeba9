use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::export::docx::{docx_file_name, package::DOCX_CONTENT_TYPE, package_docx};
use crate::export::json::{to_pretty_json, JSON_FILE_NAME};
use crate::state::AppState;
use crate::store;

fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{}\"", file_name.replace('"', ""))
}

/// GET /api/v1/export/json
pub async fn export_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = store::load_resume(state.store.as_ref()).await?;
    let body = to_pretty_json(&resume)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, attachment(JSON_FILE_NAME)),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/export/docx
/// Packaging is CPU-bound and runs on the blocking pool.
pub async fn export_docx(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = store::load_resume(state.store.as_ref()).await?;
    let file_name = docx_file_name(&resume.personal_info.full_name);

    let bytes = tokio::task::spawn_blocking(move || package_docx(&resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("docx export task failed: {e}")))??;

    info!("Exported {file_name} ({} bytes)", bytes.len());
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, attachment(&file_name)),
        ],
        bytes,
    )
        .into_response())
}
