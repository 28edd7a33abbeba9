use serde::{Deserialize, Serialize};

pub const DEFAULT_LAYOUT_ID: &str = "single-column";

/// Page arrangement. Unknown ids resolve to `SingleColumn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    SingleColumn,
    TwoColumn,
    SidebarLeft,
    SidebarRight,
    Compact,
}

impl LayoutStyle {
    #[cfg(test)]
    pub const ALL: [LayoutStyle; 5] = [
        LayoutStyle::SingleColumn,
        LayoutStyle::TwoColumn,
        LayoutStyle::SidebarLeft,
        LayoutStyle::SidebarRight,
        LayoutStyle::Compact,
    ];

    pub fn from_id(id: &str) -> Self {
        match id {
            "two-column" => LayoutStyle::TwoColumn,
            "sidebar-left" => LayoutStyle::SidebarLeft,
            "sidebar-right" => LayoutStyle::SidebarRight,
            "compact" => LayoutStyle::Compact,
            _ => LayoutStyle::SingleColumn,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            LayoutStyle::SingleColumn => "single-column",
            LayoutStyle::TwoColumn => "two-column",
            LayoutStyle::SidebarLeft => "sidebar-left",
            LayoutStyle::SidebarRight => "sidebar-right",
            LayoutStyle::Compact => "compact",
        }
    }

    /// Whether sections in this layout sit in a narrow column and must stack their details.
    pub fn is_multi_column(self) -> bool {
        matches!(
            self,
            LayoutStyle::TwoColumn | LayoutStyle::SidebarLeft | LayoutStyle::SidebarRight
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOption {
    pub id: &'static str,
    pub style: LayoutStyle,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub best_for: &'static [&'static str],
}

pub static LAYOUTS: [LayoutOption; 5] = [
    LayoutOption {
        id: "single-column",
        style: LayoutStyle::SingleColumn,
        name: "Single Column",
        description: "Traditional single-column layout with full-width sections",
        icon: "📄",
        features: &["Full-width content", "Traditional flow", "Easy to read", "ATS-friendly"],
        best_for: &[
            "Traditional industries",
            "Senior positions",
            "Academic roles",
            "Government jobs",
        ],
    },
    LayoutOption {
        id: "two-column",
        style: LayoutStyle::TwoColumn,
        name: "Two Column",
        description: "Balanced two-column layout with equal width sections",
        icon: "📰",
        features: &[
            "Balanced columns",
            "Space efficient",
            "Modern look",
            "Good for content-heavy resumes",
        ],
        best_for: &["Tech roles", "Creative positions", "Consulting", "Project managers"],
    },
    LayoutOption {
        id: "sidebar-left",
        style: LayoutStyle::SidebarLeft,
        name: "Left Sidebar",
        description: "Narrow left sidebar for skills and contact, main content on right",
        icon: "📋",
        features: &[
            "Prominent skills section",
            "Clean separation",
            "Modern design",
            "Highlights expertise",
        ],
        best_for: &["Technical roles", "Design positions", "Freelancers", "Specialists"],
    },
    LayoutOption {
        id: "sidebar-right",
        style: LayoutStyle::SidebarRight,
        name: "Right Sidebar",
        description: "Main content on left, narrow right sidebar for additional info",
        icon: "📊",
        features: &[
            "Content-focused",
            "Professional look",
            "Good for experience-heavy resumes",
            "Clean layout",
        ],
        best_for: &[
            "Management roles",
            "Sales positions",
            "Marketing",
            "Business development",
        ],
    },
    LayoutOption {
        id: "compact",
        style: LayoutStyle::Compact,
        name: "Compact",
        description: "Dense layout that fits more content in less space",
        icon: "📑",
        features: &[
            "Space efficient",
            "Fits more content",
            "Clean typography",
            "Professional",
        ],
        best_for: &[
            "Experienced professionals",
            "Multiple roles",
            "Extensive portfolios",
            "Academic CVs",
        ],
    },
];

pub fn find_layout(id: &str) -> Option<&'static LayoutOption> {
    LAYOUTS.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trips_every_style() {
        for style in LayoutStyle::ALL {
            assert_eq!(LayoutStyle::from_id(style.id()), style);
        }
    }

    #[test]
    fn test_unknown_layout_is_single_column() {
        assert_eq!(LayoutStyle::from_id("magazine"), LayoutStyle::SingleColumn);
        assert!(find_layout("magazine").is_none());
    }

    #[test]
    fn test_catalog_entries_match_their_style() {
        for option in &LAYOUTS {
            assert_eq!(option.style.id(), option.id);
        }
    }

    #[test]
    fn test_multi_column_layouts() {
        assert!(!LayoutStyle::SingleColumn.is_multi_column());
        assert!(!LayoutStyle::Compact.is_multi_column());
        assert!(LayoutStyle::TwoColumn.is_multi_column());
        assert!(LayoutStyle::SidebarLeft.is_multi_column());
        assert!(LayoutStyle::SidebarRight.is_multi_column());
    }
}
