use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Resume, Selection};
use crate::render::{render_preview, to_html_document, Node, PreviewOptions};
use crate::state::AppState;
use crate::store;

/// Optional overrides of the stored selection, e.g. `?layout=compact`.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    pub font: Option<String>,
    pub layout: Option<String>,
}

impl PreviewQuery {
    fn apply(self, mut selection: Selection) -> Selection {
        if let Some(template) = self.template {
            selection.template_id = template;
        }
        if let Some(font) = self.font {
            selection.font_family = font;
        }
        if let Some(layout) = self.layout {
            selection.layout_style = layout;
        }
        selection
    }
}

/// Body of `POST /api/v1/preview`: an unsaved resume plus design choices.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub resume: Resume,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub layout_style: Option<String>,
}

async fn stored_inputs(
    state: &AppState,
    query: PreviewQuery,
) -> Result<(Resume, Selection), AppError> {
    let resume = store::load_resume(state.store.as_ref()).await?;
    let selection = query.apply(store::load_selection(state.store.as_ref()).await?);
    Ok((resume, selection))
}

/// GET /api/v1/preview
/// Renders the stored resume with the stored selection.
pub async fn get_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<Node>, AppError> {
    let (resume, selection) = stored_inputs(&state, query).await?;
    Ok(Json(render_preview(&resume, PreviewOptions::from(&selection))))
}

/// POST /api/v1/preview
/// Renders the resume in the body. Nothing is stored.
pub async fn post_preview(Json(request): Json<PreviewRequest>) -> Json<Node> {
    let defaults = PreviewOptions::default();
    let options = PreviewOptions {
        template_id: request.template_id.as_deref().unwrap_or(defaults.template_id),
        font_family: request.font_family.as_deref().unwrap_or(defaults.font_family),
        layout_style: request.layout_style.as_deref().unwrap_or(defaults.layout_style),
    };
    Json(render_preview(&request.resume, options))
}

/// GET /api/v1/preview/print
/// Print-ready HTML document of the stored resume.
pub async fn get_print(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let (resume, selection) = stored_inputs(&state, query).await?;
    let tree = render_preview(&resume, PreviewOptions::from(&selection));

    let name = resume.personal_info.full_name.trim();
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };
    Ok(Html(to_html_document(&tree, &title)))
}
