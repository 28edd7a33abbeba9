//! Print document: serializes a presentational tree to a standalone HTML page.
//!
//! Style tokens are emitted verbatim as `class` values; the page loads the
//! utility stylesheet that understands them. Print hints become the
//! `break-inside-avoid` / `break-after-avoid` classes defined in [`PRINT_CSS`].

use crate::render::node::{Element, Node};

const UTILITY_STYLESHEET: &str = "https://cdn.tailwindcss.com";

const PRINT_CSS: &str = "\
@page { size: letter; margin: 0.5in; }
@media print {
  html, body { margin: 0; padding: 0; background: white; }
  * { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
  .break-inside-avoid { break-inside: avoid; page-break-inside: avoid; }
  .break-after-avoid { break-after: avoid; page-break-after: avoid; }
  a { color: inherit; text-decoration: none; }
}";

/// Full HTML document for `root`, ready to print.
pub fn to_html_document(root: &Node, title: &str) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    out.push_str(&escape_markup(title));
    out.push_str("</title>\n");
    out.push_str("<script src=\"");
    out.push_str(UTILITY_STYLESHEET);
    out.push_str("\"></script>\n<style>\n");
    out.push_str(PRINT_CSS);
    out.push_str("\n</style>\n</head>\n<body class=\"bg-gray-100 print:bg-white\">\n");
    write_node(root, &mut out);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&escape_markup(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    let mut classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
    if element.print.avoid_break_inside {
        classes.push("break-inside-avoid");
    }
    if element.print.avoid_break_after {
        classes.push("break-after-avoid");
    }
    if !classes.is_empty() {
        write_attr(out, "class", &classes.join(" "));
    }
    for (name, value) in &element.attrs {
        write_attr(out, name, value);
    }
    out.push('>');

    for child in &element.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_markup(value));
    out.push('"');
}

/// Escapes text for HTML and XML bodies and attribute values.
pub(crate) fn escape_markup(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::{Role, Tag};

    fn to_html_fragment(node: &Node) -> String {
        let mut out = String::new();
        write_node(node, &mut out);
        out
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup(r#"R&D <team> "lead" it's"#),
            "R&amp;D &lt;team&gt; &quot;lead&quot; it&apos;s"
        );
    }

    #[test]
    fn test_print_hints_become_classes() {
        let node: Node = Element::new(Tag::Li)
            .role(Role::Bullet)
            .class("leading-relaxed")
            .avoid_break_inside()
            .text("Built X")
            .into();
        assert_eq!(
            to_html_fragment(&node),
            r#"<li class="leading-relaxed break-inside-avoid">Built X</li>"#
        );
    }

    #[test]
    fn test_attributes_are_escaped() {
        let node: Node = Element::new(Tag::A)
            .attr("href", "https://x.test/?a=1&b=2")
            .text("link")
            .into();
        assert_eq!(
            to_html_fragment(&node),
            r#"<a href="https://x.test/?a=1&amp;b=2">link</a>"#
        );
    }

    #[test]
    fn test_document_sets_letter_page() {
        let html = to_html_document(&Node::text("x"), "Jane <Doe>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@page { size: letter; margin: 0.5in; }"));
        assert!(html.contains("<title>Jane &lt;Doe&gt;</title>"));
    }

    #[test]
    fn test_print_document_keeps_skills_together() {
        use crate::models::Resume;
        use crate::render::{render_preview, PreviewOptions};

        let mut resume = Resume::default();
        resume.personal_info.summary = "Backend engineer.".to_string();
        resume.skills[0].items = vec!["Rust".to_string()];
        let html = to_html_document(&render_preview(&resume, PreviewOptions::default()), "r");

        for kind in ["skills", "summary"] {
            let marker = html.find(&format!("data-section=\"{kind}\"")).unwrap();
            let open = html[..marker].rfind("<section").unwrap();
            assert!(html[open..marker].contains("break-inside-avoid"), "{kind}");
        }
        // no rule may re-enable breaks inside sections
        assert!(!html.contains("break-inside: auto"));
    }
}
