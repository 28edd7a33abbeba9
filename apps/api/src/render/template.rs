use crate::catalog::{
    get_color_theme, resolve_font_stack, resolve_primary_color, LayoutStyle, DEFAULT_FONT_ID,
    DEFAULT_LAYOUT_ID,
};
use crate::models::Resume;
use crate::render::header::render_header;
use crate::render::layout::render_layout;
use crate::render::node::{Element, Node, Role, Tag};

/// Renders a resume with one engine for every template: the template only picks
/// the color theme. Unknown ids fall back (blue theme, Inter stack, single column).
pub fn render_unified(
    resume: &Resume,
    template_id: &str,
    font_family: Option<&str>,
    layout_style: Option<&str>,
) -> Node {
    let font_stack = resolve_font_stack(font_family.unwrap_or(DEFAULT_FONT_ID));
    let primary_color = resolve_primary_color(template_id);
    let colors = get_color_theme(primary_color.id());
    let layout = LayoutStyle::from_id(layout_style.unwrap_or(DEFAULT_LAYOUT_ID));

    Element::new(Tag::Div)
        .role(Role::Document)
        .attr("style", format!("font-family: {font_stack}"))
        .attr("data-theme", primary_color.id())
        .class("bg-white shadow-lg max-w-4xl mx-auto min-h-screen")
        .class("print:shadow-none print:max-w-none print:mx-0")
        .child(render_header(&resume.personal_info, colors))
        .child(render_layout(resume, layout, colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fonts::DEFAULT_FONT_STACK;

    #[test]
    fn test_font_stack_wraps_the_document() {
        let node = render_unified(&Resume::default(), "modern-blue", Some("lato"), None);
        let root = node.as_element().unwrap();
        assert_eq!(
            root.attrs["style"],
            "font-family: Lato, system-ui, -apple-system, sans-serif"
        );
    }

    #[test]
    fn test_unknown_font_uses_inter_stack() {
        let node = render_unified(&Resume::default(), "modern-blue", Some("wingdings"), None);
        let root = node.as_element().unwrap();
        assert_eq!(
            root.attrs["style"],
            format!("font-family: {DEFAULT_FONT_STACK}")
        );
    }

    #[test]
    fn test_template_selects_theme() {
        let node = render_unified(&Resume::default(), "creative-orange", None, None);
        assert_eq!(node.as_element().unwrap().attrs["data-theme"], "orange");
    }

    #[test]
    fn test_header_precedes_body() {
        let node = render_unified(&Resume::default(), "minimal-gray", None, None);
        let root = node.as_element().unwrap();
        let roles: Vec<Option<Role>> = root
            .children
            .iter()
            .map(|c| c.as_element().and_then(|e| e.role))
            .collect();
        assert_eq!(roles, vec![Some(Role::Header), Some(Role::Body)]);
    }
}
