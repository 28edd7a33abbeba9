use crate::catalog::ColorTheme;
use crate::models::Experience;
use crate::render::node::{Element, Node, Role, SectionKind, Tag};
use crate::render::sections::{bullet_list, section_shell, tag_list};

/// Work history in list order. `stacked` puts dates and location under the
/// position/company block for narrow columns.
pub fn render_experience(
    experiences: &[Experience],
    colors: &ColorTheme,
    stacked: bool,
) -> Option<Node> {
    if experiences.is_empty() {
        return None;
    }

    let entries = Element::new(Tag::Div)
        .class("space-y-5 print:space-y-4")
        .children(experiences.iter().map(|e| render_entry(e, colors, stacked)));

    Some(
        section_shell(SectionKind::Experience, colors, "mb-6 print:mb-5")
            .child(entries)
            .into(),
    )
}

fn render_entry(experience: &Experience, colors: &ColorTheme, stacked: bool) -> Node {
    let title = Element::new(Tag::H4)
        .role(Role::EntryTitle)
        .class("text-lg print:text-sm font-semibold text-gray-800 break-words")
        .text(experience.position.as_str());
    let company = Element::new(Tag::P)
        .role(Role::EntrySubtitle)
        .class(&colors.accent_text())
        .class("font-medium break-words text-base print:text-xs")
        .text(experience.company.as_str());

    let date = Element::new(Tag::P)
        .role(Role::DateRange)
        .class(if stacked {
            "font-medium"
        } else {
            "whitespace-nowrap font-medium"
        })
        .text(experience.date_range());
    let location = (!experience.location.is_empty()).then(|| {
        Element::new(Tag::P)
            .class("break-words")
            .text(experience.location.as_str())
    });

    let head = if stacked {
        Element::new(Tag::Div)
            .class("mb-2 print:mb-1")
            .child(title)
            .child(company)
            .child(
                Element::new(Tag::Div)
                    .role(Role::EntryDetails)
                    .class("text-sm print:text-xs text-gray-600 print:text-gray-700 mt-1 print:mt-0.5")
                    .child(date)
                    .child_opt(location),
            )
    } else {
        Element::new(Tag::Div)
            .class("flex flex-col sm:flex-row sm:justify-between sm:items-start mb-2 print:mb-1 gap-1 print:gap-0")
            .child(
                Element::new(Tag::Div)
                    .class("min-w-0 flex-1")
                    .child(title)
                    .child(company),
            )
            .child(
                Element::new(Tag::Div)
                    .role(Role::EntryDetails)
                    .class("text-left sm:text-right text-sm print:text-xs text-gray-600 print:text-gray-700 flex-shrink-0")
                    .child(date)
                    .child_opt(location),
            )
    };

    Element::new(Tag::Div)
        .role(Role::Entry)
        .attr("data-id", experience.id.as_str())
        .class("print:mb-4")
        .avoid_break_inside()
        .child(head)
        .child_opt(bullet_list(&experience.description))
        .child_opt(tag_list(
            &experience.technologies,
            colors,
            "text-xs print:text-[10px] rounded-md",
        ))
        .into()
}
