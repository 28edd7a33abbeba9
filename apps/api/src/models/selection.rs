use serde::{Deserialize, Serialize};

use crate::catalog::{DEFAULT_FONT_ID, DEFAULT_LAYOUT_ID, DEFAULT_TEMPLATE_ID};

/// The user's design choices. Ids are kept as raw strings: a value saved against an
/// older catalog must still load, and falls back to a default at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default = "default_template")]
    pub template_id: String,
    #[serde(default = "default_font")]
    pub font_family: String,
    #[serde(default = "default_layout")]
    pub layout_style: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            template_id: default_template(),
            font_family: default_font(),
            layout_style: default_layout(),
        }
    }
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

fn default_font() -> String {
    DEFAULT_FONT_ID.to_string()
}

fn default_layout() -> String {
    DEFAULT_LAYOUT_ID.to_string()
}
