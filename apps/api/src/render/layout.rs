//! Layout renderer: arranges the section renderers into one of five page layouts.
//!
//! Each layout is a fixed plan: the columns it has and the sections each column
//! holds, in order. Multi-column layouts ask their sections for the stacked
//! (narrow) variant.

use crate::catalog::{ColorTheme, LayoutStyle};
use crate::models::Resume;
use crate::render::node::{Element, Node, Role, SectionKind, Tag};
use crate::render::sections::render_section;

use SectionKind::{Education, Experience, Projects, Skills, Summary};

const FULL_ORDER: &[SectionKind] = &[Summary, Experience, Skills, Projects, Education];

struct ColumnPlan {
    classes: &'static str,
    sections: &'static [SectionKind],
}

struct LayoutPlan {
    container: &'static str,
    /// Grid wrapper for multi-column layouts; `None` lays sections out directly.
    grid: Option<&'static str>,
    columns: &'static [ColumnPlan],
}

static SINGLE_COLUMN: LayoutPlan = LayoutPlan {
    container: "p-6 print:p-4 print:pt-0",
    grid: None,
    columns: &[ColumnPlan {
        classes: "",
        sections: FULL_ORDER,
    }],
};

static TWO_COLUMN: LayoutPlan = LayoutPlan {
    container: "p-6 print:p-4 print:pt-0",
    grid: Some("grid grid-cols-1 lg:grid-cols-2 print:grid-cols-2 gap-6 print:gap-4"),
    columns: &[
        ColumnPlan {
            classes: "space-y-6 print:space-y-4",
            sections: &[Summary, Experience, Skills],
        },
        ColumnPlan {
            classes: "space-y-6 print:space-y-4",
            sections: &[Projects, Education],
        },
    ],
};

const NARROW: &str = "lg:col-span-1 print:col-span-1 space-y-6 print:space-y-4";
const WIDE: &str = "lg:col-span-2 print:col-span-2 space-y-6 print:space-y-4";
const SIDEBAR_GRID: &str = "grid grid-cols-1 lg:grid-cols-3 print:grid-cols-3 gap-6 print:gap-4";

static SIDEBAR_LEFT: LayoutPlan = LayoutPlan {
    container: "p-6 print:p-4 print:pt-0",
    grid: Some(SIDEBAR_GRID),
    columns: &[
        ColumnPlan {
            classes: NARROW,
            sections: &[Skills, Education],
        },
        ColumnPlan {
            classes: WIDE,
            sections: &[Summary, Experience, Projects],
        },
    ],
};

static SIDEBAR_RIGHT: LayoutPlan = LayoutPlan {
    container: "p-6 print:p-4 print:pt-0",
    grid: Some(SIDEBAR_GRID),
    columns: &[
        ColumnPlan {
            classes: WIDE,
            sections: &[Summary, Experience, Projects],
        },
        ColumnPlan {
            classes: NARROW,
            sections: &[Skills, Education],
        },
    ],
};

// Reduced type scale and spacing, single-column order.
static COMPACT: LayoutPlan = LayoutPlan {
    container: "p-4 print:p-3 print:pt-0 text-sm print:text-xs",
    grid: None,
    columns: &[ColumnPlan {
        classes: "space-y-4 print:space-y-3",
        sections: FULL_ORDER,
    }],
};

fn plan_for(style: LayoutStyle) -> &'static LayoutPlan {
    match style {
        LayoutStyle::SingleColumn => &SINGLE_COLUMN,
        LayoutStyle::TwoColumn => &TWO_COLUMN,
        LayoutStyle::SidebarLeft => &SIDEBAR_LEFT,
        LayoutStyle::SidebarRight => &SIDEBAR_RIGHT,
        LayoutStyle::Compact => &COMPACT,
    }
}

/// Renders the resume body for `style`.
pub fn render_layout(resume: &Resume, style: LayoutStyle, colors: &ColorTheme) -> Node {
    let plan = plan_for(style);
    let stacked = style.is_multi_column();

    let render_column = |column: &ColumnPlan| -> Vec<Node> {
        column
            .sections
            .iter()
            .filter_map(|&kind| render_section(kind, resume, colors, stacked))
            .collect()
    };

    let body = Element::new(Tag::Div)
        .role(Role::Body)
        .attr("data-layout", style.id())
        .class(plan.container);

    let body = match plan.grid {
        None => {
            let sections = plan.columns.iter().flat_map(render_column);
            match plan.columns.first().map(|c| c.classes) {
                Some(classes) if !classes.is_empty() => body.child(
                    Element::new(Tag::Div)
                        .role(Role::Column)
                        .class(classes)
                        .children(sections),
                ),
                _ => body.children(sections),
            }
        }
        Some(grid) => body.child(
            Element::new(Tag::Div).class(grid).children(plan.columns.iter().map(|column| {
                Element::new(Tag::Div)
                    .role(Role::Column)
                    .class(column.classes)
                    .children(render_column(column))
                    .into()
            })),
        ),
    };

    body.into()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Sections of each column for `style`, left to right.
    fn column_sections(style: LayoutStyle) -> Vec<&'static [SectionKind]> {
        plan_for(style).columns.iter().map(|c| c.sections).collect()
    }
    use crate::catalog::get_color_theme;
    use crate::models::{Education as Edu, Experience as Exp, Project, Skill};

    fn full_resume() -> Resume {
        let mut resume = Resume::default();
        resume.personal_info.summary = "Systems engineer.".to_string();
        resume.experiences.push(Exp {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: vec!["Built X".to_string()],
            ..Exp::blank("x1".to_string())
        });
        resume.projects.push(Project {
            name: "cvbuilder".to_string(),
            ..Project::blank("p1".to_string())
        });
        resume.education.push(Edu {
            degree: "BSc".to_string(),
            field: "CS".to_string(),
            ..Edu::blank("e1".to_string())
        });
        resume.skills = vec![Skill {
            id: "s1".to_string(),
            category: "Languages".to_string(),
            items: vec!["Rust".to_string()],
        }];
        resume
    }

    fn columns(node: &Node) -> Vec<Vec<SectionKind>> {
        node.find_all(&|e| e.role == Some(Role::Column))
            .iter()
            .map(|c| Node::Element((*c).clone()).sections())
            .collect()
    }

    #[test]
    fn test_single_column_order() {
        let node = render_layout(&full_resume(), LayoutStyle::SingleColumn, get_color_theme("blue"));
        assert_eq!(
            node.sections(),
            vec![Summary, Experience, Skills, Projects, Education]
        );
    }

    #[test]
    fn test_two_column_split() {
        let node = render_layout(&full_resume(), LayoutStyle::TwoColumn, get_color_theme("blue"));
        assert_eq!(
            columns(&node),
            vec![vec![Summary, Experience, Skills], vec![Projects, Education]]
        );
    }

    #[test]
    fn test_sidebar_left_puts_skills_first() {
        let node = render_layout(&full_resume(), LayoutStyle::SidebarLeft, get_color_theme("blue"));
        assert_eq!(
            columns(&node),
            vec![vec![Skills, Education], vec![Summary, Experience, Projects]]
        );
        let cols = node.find_all(&|e| e.role == Some(Role::Column));
        assert!(cols[0].has_class("print:col-span-1"));
        assert!(cols[1].has_class("print:col-span-2"));
    }

    #[test]
    fn test_sidebar_right_mirrors_sidebar_left() {
        let node = render_layout(&full_resume(), LayoutStyle::SidebarRight, get_color_theme("blue"));
        assert_eq!(
            columns(&node),
            vec![vec![Summary, Experience, Projects], vec![Skills, Education]]
        );
    }

    #[test]
    fn test_compact_uses_reduced_type_scale() {
        let node = render_layout(&full_resume(), LayoutStyle::Compact, get_color_theme("blue"));
        let body = node.as_element().unwrap();
        assert!(body.has_class("text-sm"));
        assert!(body.has_class("print:text-xs"));
        assert_eq!(
            node.sections(),
            vec![Summary, Experience, Skills, Projects, Education]
        );
    }

    #[test]
    fn test_multi_column_layouts_stack_entry_details() {
        for style in LayoutStyle::ALL {
            let node = render_layout(&full_resume(), style, get_color_theme("blue"));
            let experience_entry = node.find_all(&|e| {
                e.role == Some(Role::Entry) && e.attrs.get("data-id").map(String::as_str) == Some("x1")
            })[0];
            let head = experience_entry.children[0].as_element().unwrap();
            let side_by_side = head.has_class("sm:flex-row");
            assert_eq!(
                side_by_side,
                !style.is_multi_column(),
                "{} should stack: {}",
                style.id(),
                style.is_multi_column()
            );
        }
    }

    #[test]
    fn test_column_sections_cover_every_section_once() {
        for style in LayoutStyle::ALL {
            let mut all: Vec<SectionKind> = column_sections(style).concat();
            all.sort_by_key(|k| k.as_str());
            let mut expected = SectionKind::ALL.to_vec();
            expected.sort_by_key(|k| k.as_str());
            assert_eq!(all, expected, "layout {}", style.id());
        }
    }

    #[test]
    fn test_empty_resume_has_no_sections() {
        let mut resume = Resume::default();
        resume.skills.clear();
        for style in LayoutStyle::ALL {
            let node = render_layout(&resume, style, get_color_theme("blue"));
            assert!(node.sections().is_empty());
        }
    }
}
