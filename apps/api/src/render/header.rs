use crate::catalog::ColorTheme;
use crate::models::PersonalInfo;
use crate::render::node::{Element, Node, Role, Tag};

/// Themed header block: name, title, and two columns of contact items.
/// Left column holds email, phone, location; right holds portfolio, LinkedIn, GitHub.
/// Empty fields produce no item.
pub fn render_header(info: &PersonalInfo, colors: &ColorTheme) -> Node {
    let left = contact_column([
        contact(&info.email, "mail", Some(format!("mailto:{}", info.email)), "break-all"),
        contact(&info.phone, "phone", Some(format!("tel:{}", info.phone)), "break-words"),
        contact(&info.location, "map-pin", None, "break-words"),
    ]);
    let right = contact_column([
        external(&info.portfolio, "globe"),
        external(&info.linkedin, "linkedin"),
        external(&info.github, "github"),
    ]);

    Element::new(Tag::Div)
        .role(Role::Header)
        .class("resume-header")
        .class(colors.header_bg)
        .class(colors.print_header_bg)
        .class("text-white p-6 print:p-4 print:mb-4")
        .avoid_break_inside()
        .child(
            Element::new(Tag::H1)
                .class("text-3xl print:text-2xl font-bold mb-2 break-words")
                .text(info.full_name.as_str()),
        )
        .child(
            Element::new(Tag::H2)
                .class("text-xl print:text-lg font-light mb-4 opacity-90 break-words")
                .text(info.title.as_str()),
        )
        .child(
            Element::new(Tag::Div)
                .class("grid grid-cols-1 md:grid-cols-2 gap-3 print:gap-2 text-sm print:text-xs")
                .child(left)
                .child(right),
        )
        .into()
}

fn contact_column<const N: usize>(items: [Option<Node>; N]) -> Element {
    Element::new(Tag::Div)
        .role(Role::ContactColumn)
        .class("space-y-1.5 print:space-y-1")
        .children(items.into_iter().flatten())
}

fn external(url: &str, icon: &str) -> Option<Node> {
    contact(url, icon, Some(url.to_string()), "truncate min-w-0")
}

fn contact(value: &str, icon: &str, href: Option<String>, text_class: &str) -> Option<Node> {
    if value.is_empty() {
        return None;
    }

    let content = match href {
        Some(href) => {
            let link = Element::new(Tag::A).attr("href", href);
            // mailto/tel stay in the tab; web links open a new one.
            let link = if icon == "mail" || icon == "phone" {
                link
            } else {
                link.attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
            };
            link.class(text_class).class("hover:underline").text(value)
        }
        None => Element::new(Tag::Span).class(text_class).text(value),
    };

    Some(
        Element::new(Tag::Div)
            .role(Role::ContactItem)
            .attr("data-icon", icon)
            .class("flex items-center gap-2")
            .child(content)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_color_theme;

    #[test]
    fn test_header_omits_empty_contacts() {
        let info = PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            github: "https://github.com/jane".to_string(),
            ..Default::default()
        };
        let header = render_header(&info, get_color_theme("blue"));
        let columns = header.find_all(&|e| e.role == Some(Role::ContactColumn));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].children.len(), 1);
        assert_eq!(columns[1].children.len(), 1);
        assert_eq!(columns[0].text_content(), "jane@example.com");
        assert_eq!(columns[1].text_content(), "https://github.com/jane");
    }

    #[test]
    fn test_email_link_uses_mailto() {
        let info = PersonalInfo {
            email: "jane@example.com".to_string(),
            ..Default::default()
        };
        let header = render_header(&info, get_color_theme("blue"));
        let link = header.find_all(&|e| e.tag == Tag::A)[0];
        assert_eq!(link.attrs["href"], "mailto:jane@example.com");
        assert!(!link.attrs.contains_key("target"));
    }

    #[test]
    fn test_header_carries_theme_background() {
        let header = render_header(&PersonalInfo::default(), get_color_theme("purple"));
        let el = header.as_element().unwrap();
        assert!(el.has_class("from-purple-600"));
        assert!(el.has_class("print:bg-purple-700"));
        assert!(el.print.avoid_break_inside);
    }
}
