use axum::Json;

use crate::catalog::{FontOption, LayoutOption, TemplateOption, FONTS, LAYOUTS, TEMPLATES};

/// GET /api/v1/catalog/templates
pub async fn list_templates() -> Json<&'static [TemplateOption]> {
    Json(TEMPLATES.as_slice())
}

/// GET /api/v1/catalog/fonts
pub async fn list_fonts() -> Json<&'static [FontOption]> {
    Json(FONTS.as_slice())
}

/// GET /api/v1/catalog/layouts
pub async fn list_layouts() -> Json<&'static [LayoutOption]> {
    Json(LAYOUTS.as_slice())
}
