//! Section renderers, one pure projection per resume section.
//!
//! Each renderer takes its slice of the resume plus the resolved theme and returns
//! `None` when the slice is empty. A section is never emitted as an empty shell.

pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod summary;

use crate::catalog::ColorTheme;
use crate::models::Resume;
use crate::render::node::{Element, Node, Role, SectionKind, Tag};

pub use education::render_education;
pub use experience::render_experience;
pub use projects::render_projects;
pub use skills::render_skills;
pub use summary::render_summary;

/// Renders one section of `resume` by kind. `stacked` is ignored by sections
/// without a narrow-column variant (summary, skills).
pub fn render_section(
    kind: SectionKind,
    resume: &Resume,
    colors: &ColorTheme,
    stacked: bool,
) -> Option<Node> {
    match kind {
        SectionKind::Summary => render_summary(&resume.personal_info.summary, colors),
        SectionKind::Experience => render_experience(&resume.experiences, colors, stacked),
        SectionKind::Projects => render_projects(&resume.projects, colors, stacked),
        SectionKind::Skills => render_skills(&resume.skills, colors),
        SectionKind::Education => render_education(&resume.education, colors, stacked),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

/// The `<section>` wrapper with its themed heading. Callers append the body.
pub(crate) fn section_shell(kind: SectionKind, colors: &ColorTheme, spacing: &str) -> Element {
    let heading_margin = match kind {
        SectionKind::Summary => "mb-3 print:mb-2",
        _ => "mb-4 print:mb-3",
    };
    let heading = Element::new(Tag::H3)
        .role(Role::SectionHeading)
        .class("text-xl print:text-lg font-semibold text-gray-800")
        .class(heading_margin)
        .class(colors.border_color)
        .class("border-b-2 pb-1")
        .avoid_break_after()
        .text(kind.heading());

    Element::new(Tag::Section)
        .role(Role::Section)
        .section(kind)
        .attr("data-section", kind.as_str())
        .class(spacing)
        .child(heading)
}

/// Bulleted list of the non-empty strings in `points`. `None` when nothing is left.
pub(crate) fn bullet_list(points: &[String]) -> Option<Element> {
    let items: Vec<Node> = points
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| {
            Element::new(Tag::Li)
                .role(Role::Bullet)
                .class("break-words leading-relaxed print:leading-normal")
                .avoid_break_inside()
                .text(p.as_str())
                .into()
        })
        .collect();

    if items.is_empty() {
        return None;
    }

    Some(
        Element::new(Tag::Ul)
            .role(Role::Bullets)
            .class("list-disc list-inside space-y-1 print:space-y-0.5 text-gray-700 print:text-gray-800 mb-3 print:mb-2 text-sm print:text-xs")
            .children(items),
    )
}

/// Row of themed tag chips. `None` for an empty list.
pub(crate) fn tag_list(tags: &[String], colors: &ColorTheme, size: &str) -> Option<Element> {
    if tags.is_empty() {
        return None;
    }

    let chip_tokens = colors.tag_tokens();
    Some(
        Element::new(Tag::Div)
            .role(Role::Tags)
            .class("flex flex-wrap gap-1.5 print:gap-1")
            .children(tags.iter().map(|t| {
                Element::new(Tag::Span)
                    .role(Role::Tag)
                    .class("px-2 py-1 print:px-1.5 print:py-0.5")
                    .class(&chip_tokens)
                    .class(size)
                    .class("break-words")
                    .text(t.as_str())
                    .into()
            })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_color_theme;

    #[test]
    fn test_bullet_list_drops_empty_strings() {
        let list = bullet_list(&["".to_string(), "Built X".to_string(), "".to_string()])
            .expect("one bullet survives");
        assert_eq!(list.children.len(), 1);
        assert_eq!(list.text_content(), "Built X");
    }

    #[test]
    fn test_bullet_list_none_when_all_empty() {
        assert!(bullet_list(&[String::new()]).is_none());
        assert!(bullet_list(&[]).is_none());
    }

    #[test]
    fn test_tag_list_uses_theme_tokens() {
        let colors = get_color_theme("purple");
        let tags = tag_list(&["Go".to_string()], colors, "text-xs").unwrap();
        let chip = tags.children[0].as_element().unwrap();
        assert!(chip.has_class("bg-purple-100"));
        assert!(chip.has_class("print:text-purple-900"));
    }

    #[test]
    fn test_section_shell_marks_heading_keep_with_next() {
        let shell = section_shell(SectionKind::Skills, get_color_theme("blue"), "mb-6");
        assert_eq!(shell.section, Some(SectionKind::Skills));
        let heading = shell.children[0].as_element().unwrap();
        assert!(heading.print.avoid_break_after);
        assert!(heading.has_class("border-blue-600"));
        assert_eq!(heading.text_content(), "Technical Skills");
    }
}
