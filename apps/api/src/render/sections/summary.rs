use crate::catalog::ColorTheme;
use crate::render::node::{Element, Node, SectionKind, Tag};
use crate::render::sections::section_shell;

pub fn render_summary(summary: &str, colors: &ColorTheme) -> Option<Node> {
    if summary.is_empty() {
        return None;
    }

    let section = section_shell(SectionKind::Summary, colors, "mb-6 print:mb-5")
        .avoid_break_inside()
        .child(
            Element::new(Tag::P)
                .class("text-gray-700 print:text-gray-800 leading-relaxed print:leading-normal break-words text-sm print:text-xs")
                .text(summary),
        );
    Some(section.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_color_theme;

    #[test]
    fn test_empty_summary_renders_nothing() {
        assert!(render_summary("", get_color_theme("blue")).is_none());
    }

    #[test]
    fn test_summary_keeps_text_and_avoids_breaks() {
        let node = render_summary("Ten years of systems work.", get_color_theme("blue")).unwrap();
        let section = node.as_element().unwrap();
        assert!(section.print.avoid_break_inside);
        assert_eq!(
            node.text_content(),
            "Professional SummaryTen years of systems work."
        );
    }
}
