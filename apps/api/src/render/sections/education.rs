use crate::catalog::ColorTheme;
use crate::models::Education;
use crate::render::node::{Element, Node, Role, SectionKind, Tag};
use crate::render::sections::section_shell;

/// Education entries. `stacked` puts graduation date and GPA under the institution.
pub fn render_education(education: &[Education], colors: &ColorTheme, stacked: bool) -> Option<Node> {
    if education.is_empty() {
        return None;
    }

    let entries = Element::new(Tag::Div)
        .class("space-y-4 print:space-y-3")
        .children(education.iter().map(|e| render_entry(e, colors, stacked)));

    Some(
        section_shell(SectionKind::Education, colors, "mb-6 print:mb-4")
            .child(entries)
            .into(),
    )
}

fn render_entry(edu: &Education, colors: &ColorTheme, stacked: bool) -> Node {
    let degree = Element::new(Tag::H4)
        .role(Role::EntryTitle)
        .class("font-semibold text-gray-800 break-words text-base print:text-sm")
        .text(format!("{} in {}", edu.degree, edu.field));
    let institution = Element::new(Tag::P)
        .role(Role::EntrySubtitle)
        .class(&colors.accent_text())
        .class("break-words text-sm print:text-xs")
        .text(edu.institution.as_str());
    let location = (!edu.location.is_empty()).then(|| {
        Element::new(Tag::P)
            .class("text-gray-600 print:text-gray-700 text-sm print:text-xs break-words")
            .text(edu.location.as_str())
    });

    let graduation = Element::new(Tag::P)
        .role(Role::DateRange)
        .class(if stacked {
            "font-medium"
        } else {
            "whitespace-nowrap font-medium"
        })
        .text(edu.graduation_date.as_str());
    let gpa = edu
        .gpa_label()
        .map(|gpa| Element::new(Tag::P).text(format!("GPA: {gpa}")));

    let body = if stacked {
        Element::new(Tag::Div)
            .class("space-y-1 print:space-y-0.5")
            .child(degree)
            .child(institution)
            .child_opt(location)
            .child(
                Element::new(Tag::Div)
                    .role(Role::EntryDetails)
                    .class("text-gray-600 print:text-gray-700 text-sm print:text-xs")
                    .child(graduation)
                    .child_opt(gpa),
            )
    } else {
        Element::new(Tag::Div)
            .class("flex flex-col sm:flex-row sm:justify-between gap-2 print:gap-1")
            .child(
                Element::new(Tag::Div)
                    .class("min-w-0 flex-1")
                    .child(degree)
                    .child(institution)
                    .child_opt(location),
            )
            .child(
                Element::new(Tag::Div)
                    .role(Role::EntryDetails)
                    .class("text-left sm:text-right text-gray-600 print:text-gray-700 flex-shrink-0 text-sm print:text-xs")
                    .child(graduation)
                    .child_opt(gpa),
            )
    };

    Element::new(Tag::Div)
        .role(Role::Entry)
        .attr("data-id", edu.id.as_str())
        .avoid_break_inside()
        .child(body)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_color_theme;

    fn degree() -> Education {
        Education {
            id: "e1".to_string(),
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            graduation_date: "May 2019".to_string(),
            gpa: Some("3.8".to_string()),
            location: String::new(),
        }
    }

    #[test]
    fn test_empty_education_renders_nothing() {
        assert!(render_education(&[], get_color_theme("emerald"), false).is_none());
    }

    #[test]
    fn test_degree_in_field_and_gpa() {
        let node = render_education(&[degree()], get_color_theme("emerald"), false).unwrap();
        let text = node.text_content();
        assert!(text.contains("BSc in Computer Science"));
        assert!(text.contains("GPA: 3.8"));
        assert!(text.contains("May 2019"));
    }

    #[test]
    fn test_missing_gpa_and_location_are_omitted() {
        let mut edu = degree();
        edu.gpa = None;
        let node = render_education(&[edu], get_color_theme("emerald"), true).unwrap();
        assert!(!node.text_content().contains("GPA"));
        let details = node.find_all(&|e| e.role == Some(Role::EntryDetails));
        assert_eq!(details[0].children.len(), 1);
    }

    #[test]
    fn test_stacked_details_are_last_child() {
        let node = render_education(&[degree()], get_color_theme("emerald"), true).unwrap();
        let entry = node.find_all(&|e| e.role == Some(Role::Entry))[0];
        let body = entry.children[0].as_element().unwrap();
        let last = body.children.last().and_then(Node::as_element).unwrap();
        assert_eq!(last.role, Some(Role::EntryDetails));
        assert!(body.has_class("space-y-1"));
    }
}
