use crate::catalog::ColorTheme;
use crate::models::Project;
use crate::render::node::{Element, Node, Role, SectionKind, Tag};
use crate::render::sections::{bullet_list, section_shell, tag_list};

/// Projects in list order. `stack_urls` moves the link list under the name.
pub fn render_projects(projects: &[Project], colors: &ColorTheme, stack_urls: bool) -> Option<Node> {
    if projects.is_empty() {
        return None;
    }

    let entries = Element::new(Tag::Div)
        .class("space-y-5 print:space-y-4")
        .children(projects.iter().map(|p| render_entry(p, colors, stack_urls)));

    Some(
        section_shell(SectionKind::Projects, colors, "mb-6 print:mb-5")
            .child(entries)
            .into(),
    )
}

fn render_entry(project: &Project, colors: &ColorTheme, stack_urls: bool) -> Node {
    let links = link_list(project, colors);

    let head = if stack_urls {
        Element::new(Tag::Div)
            .class("mb-2 print:mb-1")
            .child(
                Element::new(Tag::H4)
                    .role(Role::EntryTitle)
                    .class("text-lg print:text-sm font-semibold text-gray-800 break-words mb-2")
                    .text(project.name.as_str()),
            )
            .child_opt(links)
    } else {
        Element::new(Tag::Div)
            .class("flex flex-col sm:flex-row sm:justify-between sm:items-start mb-2 print:mb-1 gap-2 print:gap-1")
            .child(
                Element::new(Tag::H4)
                    .role(Role::EntryTitle)
                    .class("text-lg print:text-sm font-semibold text-gray-800 break-words min-w-0 flex-1")
                    .text(project.name.as_str()),
            )
            .child_opt(links.map(|l| l.class("flex-shrink-0")))
    };

    let description = (!project.description.is_empty()).then(|| {
        Element::new(Tag::P)
            .class("text-gray-700 print:text-gray-800 mb-3 print:mb-2 break-words leading-relaxed print:leading-normal text-sm print:text-xs")
            .text(project.description.as_str())
    });

    Element::new(Tag::Div)
        .role(Role::Entry)
        .attr("data-id", project.id.as_str())
        .class("print:mb-4")
        .avoid_break_inside()
        .child(head)
        .child_opt(description)
        .child_opt(bullet_list(&project.highlights))
        .child_opt(tag_list(
            &project.technologies,
            colors,
            "text-xs print:text-[10px] rounded-md",
        ))
        .into()
}

fn link_list(project: &Project, colors: &ColorTheme) -> Option<Element> {
    let links: Vec<Node> = [("github", project.github_url()), ("external-link", project.demo_url())]
        .into_iter()
        .filter_map(|(icon, url)| url.map(|u| link(icon, u, colors)))
        .collect();

    if links.is_empty() {
        return None;
    }

    Some(
        Element::new(Tag::Div)
            .role(Role::Links)
            .class("flex flex-col gap-1 print:gap-0.5 text-sm print:text-[10px]")
            .children(links),
    )
}

fn link(icon: &str, url: &str, colors: &ColorTheme) -> Node {
    Element::new(Tag::Div)
        .class("flex items-center gap-1")
        .attr("data-icon", icon)
        .child(
            Element::new(Tag::A)
                .attr("href", url)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .class(&colors.accent_text())
                .class("hover:text-gray-800 break-all")
                .text(url),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_color_theme;

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            name: "cvbuilder".to_string(),
            description: "Resume renderer".to_string(),
            technologies: vec!["Rust".to_string(), "axum".to_string()],
            github: Some("https://github.com/jane/cvbuilder".to_string()),
            demo: None,
            highlights: vec!["".to_string(), "Shipped v1".to_string()],
        }
    }

    #[test]
    fn test_empty_projects_render_nothing() {
        assert!(render_projects(&[], get_color_theme("blue"), true).is_none());
    }

    #[test]
    fn test_renders_only_present_links() {
        let node = render_projects(&[project()], get_color_theme("blue"), false).unwrap();
        let anchors = node.find_all(&|e| e.tag == Tag::A);
        assert_eq!(anchors.len(), 1);
        assert_eq!(
            anchors[0].attrs.get("href").map(String::as_str),
            Some("https://github.com/jane/cvbuilder")
        );
    }

    #[test]
    fn test_no_links_block_without_urls() {
        let mut bare = project();
        bare.github = Some(String::new());
        let node = render_projects(&[bare], get_color_theme("blue"), true).unwrap();
        assert!(node.find_all(&|e| e.role == Some(Role::Links)).is_empty());
    }

    #[test]
    fn test_empty_highlights_are_skipped() {
        let node = render_projects(&[project()], get_color_theme("blue"), false).unwrap();
        let bullets = node.find_all(&|e| e.role == Some(Role::Bullet));
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].text_content(), "Shipped v1");
    }

    #[test]
    fn test_stacked_links_follow_name() {
        let node = render_projects(&[project()], get_color_theme("blue"), true).unwrap();
        let entry = node.find_all(&|e| e.role == Some(Role::Entry))[0];
        let head = entry.children[0].as_element().unwrap();
        assert!(head.has_class("mb-2"));
        assert_eq!(head.children[1].as_element().unwrap().role, Some(Role::Links));
    }

    #[test]
    fn test_empty_description_is_omitted() {
        let mut quiet = project();
        quiet.description.clear();
        let node = render_projects(&[quiet], get_color_theme("blue"), false).unwrap();
        assert!(!node.text_content().contains("Resume renderer"));
    }
}
