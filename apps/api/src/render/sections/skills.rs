use crate::catalog::ColorTheme;
use crate::models::Skill;
use crate::render::node::{Element, Node, Role, SectionKind, Tag};
use crate::render::sections::{section_shell, tag_list};

pub fn render_skills(skills: &[Skill], colors: &ColorTheme) -> Option<Node> {
    if skills.is_empty() {
        return None;
    }

    let groups = Element::new(Tag::Div)
        .class("space-y-3 print:space-y-2")
        .children(skills.iter().map(|skill| {
            Element::new(Tag::Div)
                .role(Role::Entry)
                .attr("data-id", skill.id.as_str())
                .avoid_break_inside()
                .child(
                    Element::new(Tag::H4)
                        .role(Role::EntryTitle)
                        .class("font-semibold text-gray-800 mb-1 print:mb-0.5 break-words text-base print:text-sm")
                        .text(skill.category.as_str()),
                )
                .child_opt(tag_list(&skill.items, colors, "text-sm print:text-xs rounded"))
                .into()
        }));

    Some(
        section_shell(SectionKind::Skills, colors, "mb-6 print:mb-5")
            .avoid_break_inside()
            .child(groups)
            .into(),
    )
}
