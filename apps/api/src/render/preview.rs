use crate::catalog::{DEFAULT_FONT_ID, DEFAULT_LAYOUT_ID, DEFAULT_TEMPLATE_ID};
use crate::models::{Resume, Selection};
use crate::render::node::Node;
use crate::render::template::render_unified;

/// Design choices for a preview. Defaults match a first-time user's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions<'a> {
    pub template_id: &'a str,
    pub font_family: &'a str,
    pub layout_style: &'a str,
}

impl Default for PreviewOptions<'static> {
    fn default() -> Self {
        Self {
            template_id: DEFAULT_TEMPLATE_ID,
            font_family: DEFAULT_FONT_ID,
            layout_style: DEFAULT_LAYOUT_ID,
        }
    }
}

impl<'a> From<&'a Selection> for PreviewOptions<'a> {
    fn from(selection: &'a Selection) -> Self {
        Self {
            template_id: &selection.template_id,
            font_family: &selection.font_family,
            layout_style: &selection.layout_style,
        }
    }
}

/// Entry point of the rendering engine: resume plus design choices in, presentational tree out.
/// Pure and total; identical inputs give identical trees.
pub fn render_preview(resume: &Resume, options: PreviewOptions<'_>) -> Node {
    render_unified(
        resume,
        options.template_id,
        Some(options.font_family),
        Some(options.layout_style),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
