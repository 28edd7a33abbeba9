//! Presentational tree produced by the renderer.
//!
//! The tree is a neutral document structure: element tags, style tokens, and
//! semantic markers. Two consumers read it, the on-screen preview (as JSON) and
//! the print document (see [`crate::render::html`]). Print consumers rely on the
//! `section` marker and the [`PrintHints`] flags to avoid page breaks inside a
//! section or list item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Section,
    H1,
    H2,
    H3,
    H4,
    P,
    Ul,
    Li,
    Span,
    A,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Section => "section",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::P => "p",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Span => "span",
            Tag::A => "a",
        }
    }
}

/// The five thematic blocks of a resume body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Projects,
    Skills,
    Education,
}

impl SectionKind {
    #[cfg(test)]
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Technical Skills",
            SectionKind::Education => "Education",
        }
    }
}

/// What an element means, independent of how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Document,
    Header,
    ContactColumn,
    ContactItem,
    Body,
    Column,
    Section,
    SectionHeading,
    Entry,
    EntryTitle,
    EntrySubtitle,
    EntryDetails,
    DateRange,
    Links,
    Bullets,
    Bullet,
    Tags,
    Tag,
}

/// Page-break hints for print consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintHints {
    pub avoid_break_inside: bool,
    pub avoid_break_after: bool,
}

impl PrintHints {
    pub fn is_empty(&self) -> bool {
        !self.avoid_break_inside && !self.avoid_break_after
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "PrintHints::is_empty")]
    pub print: PrintHints,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            role: None,
            section: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            print: PrintHints::default(),
            children: Vec::new(),
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn section(mut self, kind: SectionKind) -> Self {
        self.section = Some(kind);
        self
    }

    /// Appends whitespace-separated class tokens.
    pub fn class(mut self, tokens: &str) -> Self {
        self.classes
            .extend(tokens.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn avoid_break_inside(mut self) -> Self {
        self.print.avoid_break_inside = true;
        self
    }

    pub fn avoid_break_after(mut self) -> Self {
        self.print.avoid_break_after = true;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child only when one is given. Keeps optional fields out of the tree.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }
}

/// Tree queries, used by the renderer tests.
#[cfg(test)]
impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// All elements (including self) matching `pred`, in document order.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if pred(e) {
                found.push(e);
            }
        });
        found
    }

    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(e) = self {
            visit(e);
            for child in &e.children {
                child.walk(visit);
            }
        }
    }

    /// Section markers in document order.
    pub fn sections(&self) -> Vec<SectionKind> {
        self.find_all(&|e| e.role == Some(Role::Section))
            .into_iter()
            .filter_map(|e| e.section)
            .collect()
    }
}

#[cfg(test)]
impl Element {
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_splits_tokens() {
        let el = Element::new(Tag::Div).class("a  b\tc").class("d");
        assert_eq!(el.classes, vec!["a", "b", "c", "d"]);
        assert!(el.has_class("c"));
    }

    #[test]
    fn test_child_opt_skips_none() {
        let el = Element::new(Tag::Div)
            .child_opt(None::<Element>)
            .child_opt(Some(Node::text("x")));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_text_content_in_document_order() {
        let node: Node = Element::new(Tag::Div)
            .child(Element::new(Tag::P).text("one "))
            .child(Element::new(Tag::P).text("two"))
            .into();
        assert_eq!(node.text_content(), "one two");
    }

    #[test]
    fn test_sections_lists_markers_in_order() {
        let node: Node = Element::new(Tag::Div)
            .child(
                Element::new(Tag::Section)
                    .role(Role::Section)
                    .section(SectionKind::Skills),
            )
            .child(
                Element::new(Tag::Section)
                    .role(Role::Section)
                    .section(SectionKind::Summary),
            )
            .into();
        assert_eq!(node.sections(), vec![SectionKind::Skills, SectionKind::Summary]);
    }

    #[test]
    fn test_serializes_compactly() {
        let node: Node = Element::new(Tag::Li)
            .role(Role::Bullet)
            .avoid_break_inside()
            .text("Built X")
            .into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "li");
        assert_eq!(json["role"], "bullet");
        assert_eq!(json["print"]["avoidBreakInside"], true);
        assert!(json.get("attrs").is_none());
        assert_eq!(json["children"][0]["text"], "Built X");
    }
}
