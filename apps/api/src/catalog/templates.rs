use serde::Serialize;

use crate::catalog::colors::PrimaryColor;

pub const DEFAULT_TEMPLATE_ID: &str = "modern-blue";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub primary_color: PrimaryColor,
    pub accent_color: &'static str,
    pub preview: &'static str,
}

pub static TEMPLATES: [TemplateOption; 5] = [
    TemplateOption {
        id: "modern-blue",
        name: "Modern Blue",
        description: "Clean and professional with blue accents",
        primary_color: PrimaryColor::Blue,
        accent_color: "blue-50",
        preview: "A modern template with blue gradient header and clean typography",
    },
    TemplateOption {
        id: "elegant-purple",
        name: "Elegant Purple",
        description: "Sophisticated design with purple tones",
        primary_color: PrimaryColor::Purple,
        accent_color: "purple-50",
        preview: "An elegant template with purple gradients and refined styling",
    },
    TemplateOption {
        id: "professional-green",
        name: "Professional Green",
        description: "Corporate-friendly with green highlights",
        primary_color: PrimaryColor::Emerald,
        accent_color: "emerald-50",
        preview: "A professional template with emerald green accents",
    },
    TemplateOption {
        id: "creative-orange",
        name: "Creative Orange",
        description: "Bold and energetic with orange accents",
        primary_color: PrimaryColor::Orange,
        accent_color: "orange-50",
        preview: "A creative template with vibrant orange highlights",
    },
    TemplateOption {
        id: "minimal-gray",
        name: "Minimal Gray",
        description: "Clean minimalist design with gray tones",
        primary_color: PrimaryColor::Gray,
        accent_color: "gray-50",
        preview: "A minimal template with sophisticated gray styling",
    },
];

pub fn find_template(id: &str) -> Option<&'static TemplateOption> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Primary color for a template id; blue when the template is unknown.
pub fn resolve_primary_color(template_id: &str) -> PrimaryColor {
    find_template(template_id).map_or(PrimaryColor::Blue, |t| t.primary_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_green_uses_emerald() {
        assert_eq!(
            resolve_primary_color("professional-green"),
            PrimaryColor::Emerald
        );
    }

    #[test]
    fn test_unknown_template_resolves_to_blue() {
        assert!(find_template("retro-pink").is_none());
        assert_eq!(resolve_primary_color("retro-pink"), PrimaryColor::Blue);
    }

    #[test]
    fn test_each_template_has_distinct_color() {
        let mut colors: Vec<&str> = TEMPLATES.iter().map(|t| t.primary_color.id()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), TEMPLATES.len());
    }
}
