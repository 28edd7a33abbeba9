use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{find_font, find_layout, find_template};
use crate::editor::{apply_edit, EditOutcome, ResumeEdit};
use crate::errors::AppError;
use crate::ids::mint_id;
use crate::models::{Resume, Selection};
use crate::state::AppState;
use crate::store;

/// The stored resume plus the text each tag field should show.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    #[serde(flatten)]
    pub resume: Resume,
    pub input_values: BTreeMap<String, String>,
}

/// GET /api/v1/resume
pub async fn get_resume(State(state): State<AppState>) -> Result<Json<ResumeView>, AppError> {
    let drafts = state.drafts.read().await;
    let resume = store::load_resume(state.store.as_ref()).await?;
    let input_values = drafts.display_values(&resume);
    Ok(Json(ResumeView {
        resume,
        input_values,
    }))
}

/// PUT /api/v1/resume
/// Replaces the whole resume (import). Drafts for entities that no longer exist,
/// or whose tags changed, are dropped.
pub async fn put_resume(
    State(state): State<AppState>,
    Json(mut resume): Json<Resume>,
) -> Result<Json<ResumeView>, AppError> {
    let mut drafts = state.drafts.write().await;
    resume.assign_missing_skill_ids(mint_id);
    resume.ensure_bullets();
    store::save_resume(state.store.as_ref(), &resume).await?;
    drafts.reconcile(&resume);
    let input_values = drafts.display_values(&resume);

    info!(
        "Resume replaced ({} experiences, {} projects, {} education, {} skill categories)",
        resume.experiences.len(),
        resume.projects.len(),
        resume.education.len(),
        resume.skills.len()
    );
    Ok(Json(ResumeView {
        resume,
        input_values,
    }))
}

/// POST /api/v1/resume/edits
/// Applies one editor operation to the stored resume and persists the result.
pub async fn post_edit(
    State(state): State<AppState>,
    Json(edit): Json<ResumeEdit>,
) -> Result<Json<EditOutcome>, AppError> {
    // Held across load → apply → save so concurrent edits cannot interleave.
    let mut drafts = state.drafts.write().await;
    let resume = store::load_resume(state.store.as_ref()).await?;

    debug!("Applying edit: {edit:?}");
    let outcome = apply_edit(resume, edit, &mut drafts)?;
    store::save_resume(state.store.as_ref(), &outcome.resume).await?;

    Ok(Json(outcome))
}

/// GET /api/v1/selection
pub async fn get_selection(State(state): State<AppState>) -> Result<Json<Selection>, AppError> {
    Ok(Json(store::load_selection(state.store.as_ref()).await?))
}

/// Partial selection update. Omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionUpdate {
    pub template_id: Option<String>,
    pub font_family: Option<String>,
    pub layout_style: Option<String>,
}

/// PUT /api/v1/selection
/// Only catalog ids are accepted here. Stale ids already in the store still
/// render through the catalog fallbacks.
pub async fn put_selection(
    State(state): State<AppState>,
    Json(update): Json<SelectionUpdate>,
) -> Result<Json<Selection>, AppError> {
    // Same write lock as edits, so a selection save never interleaves with one.
    let _guard = state.drafts.write().await;
    let mut selection = store::load_selection(state.store.as_ref()).await?;

    if let Some(id) = update.template_id {
        find_template(&id).ok_or_else(|| unknown("template", &id))?;
        selection.template_id = id;
    }
    if let Some(id) = update.font_family {
        find_font(&id).ok_or_else(|| unknown("font", &id))?;
        selection.font_family = id;
    }
    if let Some(id) = update.layout_style {
        find_layout(&id).ok_or_else(|| unknown("layout", &id))?;
        selection.layout_style = id;
    }

    store::save_selection(state.store.as_ref(), &selection).await?;
    info!(
        "Selection saved: template={}, font={}, layout={}",
        selection.template_id, selection.font_family, selection.layout_style
    );
    Ok(Json(selection))
}

fn unknown(kind: &str, id: &str) -> AppError {
    AppError::Validation(format!("Unknown {kind} '{id}'"))
}
