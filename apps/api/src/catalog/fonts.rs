use serde::Serialize;

/// Stack used whenever a font id is missing or unknown.
pub const DEFAULT_FONT_STACK: &str = "Inter, system-ui, -apple-system, sans-serif";

pub const DEFAULT_FONT_ID: &str = "inter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Modern,
    Classic,
    Elegant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// CSS `font-family` value applied to the whole resume.
    pub font_family: &'static str,
    pub category: FontCategory,
}

pub static FONTS: [FontOption; 8] = [
    FontOption {
        id: "inter",
        name: "Inter",
        description: "Modern and highly readable, perfect for tech roles",
        font_family: DEFAULT_FONT_STACK,
        category: FontCategory::Modern,
    },
    FontOption {
        id: "roboto",
        name: "Roboto",
        description: "Clean and professional, widely used in corporate settings",
        font_family: "Roboto, system-ui, -apple-system, sans-serif",
        category: FontCategory::Modern,
    },
    FontOption {
        id: "open-sans",
        name: "Open Sans",
        description: "Friendly and approachable, great for creative roles",
        font_family: "Open Sans, system-ui, -apple-system, sans-serif",
        category: FontCategory::Classic,
    },
    FontOption {
        id: "lato",
        name: "Lato",
        description: "Elegant and sophisticated, ideal for executive positions",
        font_family: "Lato, system-ui, -apple-system, sans-serif",
        category: FontCategory::Elegant,
    },
    FontOption {
        id: "source-sans",
        name: "Source Sans Pro",
        description: "Professional and versatile, works for any industry",
        font_family: "Source Sans Pro, system-ui, -apple-system, sans-serif",
        category: FontCategory::Classic,
    },
    FontOption {
        id: "poppins",
        name: "Poppins",
        description: "Modern geometric design, perfect for design roles",
        font_family: "Poppins, system-ui, -apple-system, sans-serif",
        category: FontCategory::Modern,
    },
    FontOption {
        id: "nunito",
        name: "Nunito",
        description: "Rounded and friendly, great for startup environments",
        font_family: "Nunito, system-ui, -apple-system, sans-serif",
        category: FontCategory::Modern,
    },
    FontOption {
        id: "work-sans",
        name: "Work Sans",
        description: "Clean and minimal, excellent for consulting roles",
        font_family: "Work Sans, system-ui, -apple-system, sans-serif",
        category: FontCategory::Classic,
    },
];

pub fn find_font(id: &str) -> Option<&'static FontOption> {
    FONTS.iter().find(|f| f.id == id)
}

/// CSS font stack for a font id, defaulting to the Inter stack.
pub fn resolve_font_stack(id: &str) -> &'static str {
    find_font(id).map_or(DEFAULT_FONT_STACK, |f| f.font_family)
}
