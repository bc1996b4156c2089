//! In-memory document model.
//!
//! Pages are built declaratively from [`Element`] values, flattened into an
//! arena-backed [`Page`], edited in place by the synchronizer through
//! selectors, and finally serialized to HTML.

mod selector;

pub use selector::{Selector, SelectorError};

use selector::Compound;
use tracing::warn;

/// Handle to a node inside a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Builder value for markup.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Content>,
}

#[derive(Debug, Clone)]
enum Content {
    Element(Element),
    Text(String),
    Raw(String),
}

/// Start building an element.
pub fn el(tag: &str) -> Element {
    Element {
        tag: tag.to_ascii_lowercase(),
        attributes: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn class(mut self, class: &str) -> Self {
        match self.attributes.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attributes.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Content::Text(text.to_string()));
        self
    }

    /// Trusted markup, emitted verbatim.
    pub fn raw(mut self, html: &str) -> Self {
        self.children.push(Content::Raw(html.to_string()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Content::Element));
        self
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A mutable document.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Node>,
    root: NodeId,
}

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

impl Page {
    pub fn from_root(root: Element) -> Page {
        let mut page = Page {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        page.root = page.insert(Content::Element(root), None);
        page
    }

    fn insert(&mut self, content: Content, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (kind, children) = match content {
            Content::Element(element) => (
                NodeKind::Element {
                    tag: element.tag,
                    attributes: element.attributes,
                },
                element.children,
            ),
            Content::Text(text) => (NodeKind::Text(text), Vec::new()),
            Content::Raw(html) => (NodeKind::Raw(html), Vec::new()),
        };
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // ==================== Queries ====================

    /// First element matching `selector` in document order.
    ///
    /// An unparsable selector is logged and treated as matching nothing.
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    pub fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.root, selector, true)
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.select(scope, selector, false).into_iter().next()
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root, true)
            .into_iter()
            .find(|node| self.attribute(*node, "id") == Some(id))
    }

    fn select(&self, scope: NodeId, selector: &str, include_scope: bool) -> Vec<NodeId> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Ignoring invalid selector '{}': {}", selector, e);
                return Vec::new();
            }
        };

        self.descendants(scope, include_scope)
            .into_iter()
            .filter(|node| self.matches(*node, &parsed))
            .collect()
    }

    /// Element descendants of `scope` in document (pre-)order.
    fn descendants(&self, scope: NodeId, include_scope: bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![scope];
        while let Some(node) = stack.pop() {
            if self.is_element(node) && (include_scope || node != scope) {
                out.push(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let Some((subject, ancestors)) = selector.compounds.split_last() else {
            return false;
        };
        if !self.matches_compound(node, subject) {
            return false;
        }

        let mut current = self.nodes[node.0].parent;
        for compound in ancestors.iter().rev() {
            loop {
                match current {
                    Some(candidate) => {
                        current = self.nodes[candidate.0].parent;
                        if self.matches_compound(candidate, compound) {
                            break;
                        }
                    }
                    None => return false,
                }
            }
        }
        true
    }

    fn matches_compound(&self, node: NodeId, compound: &Compound) -> bool {
        let NodeKind::Element { tag, .. } = &self.nodes[node.0].kind else {
            return false;
        };

        if compound.tag.as_ref().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        if let Some(id) = &compound.id {
            if self.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if !compound.classes.iter().all(|class| self.has_class(node, class)) {
            return false;
        }
        let attributes_match = compound.attributes.iter().all(|wanted| {
            match (self.attribute(node, &wanted.name), &wanted.value) {
                (Some(actual), Some(value)) => actual == value,
                (Some(_), None) => true,
                (None, _) => false,
            }
        });
        if !attributes_match {
            return false;
        }
        match compound.nth_child {
            Some(n) => self.element_index(node) == Some(n),
            None => true,
        }
    }

    /// 1-based position among element siblings.
    fn element_index(&self, node: NodeId) -> Option<usize> {
        let parent = self.nodes[node.0].parent?;
        self.nodes[parent.0]
            .children
            .iter()
            .filter(|child| self.is_element(**child))
            .position(|child| *child == node)
            .map(|index| index + 1)
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Element { .. })
    }

    // ==================== Node access ====================

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[node.0].kind {
            match attributes.iter_mut().find(|(n, _)| n == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) || !self.is_element(node) {
            return;
        }
        let classes = match self.attribute(node, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attribute(node, "class", &classes);
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        let Some(existing) = self.attribute(node, "class") else {
            return;
        };
        let remaining: Vec<_> = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect();
        let remaining = remaining.join(" ");
        self.set_attribute(node, "class", &remaining);
    }

    /// Concatenated text of the node and its descendants. Raw markup is included
    /// as written.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) | NodeKind::Raw(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &self.nodes[node.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Replace all children of `node` with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.replace_children(node, NodeKind::Text(text.to_string()));
    }

    /// Replace all children of `node` with trusted markup.
    pub fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.replace_children(node, NodeKind::Raw(html.to_string()));
    }

    /// Serialized markup of the node's children.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in &self.nodes[node.0].children {
            self.write_node(*child, &mut out);
        }
        out
    }

    fn replace_children(&mut self, node: NodeId, leaf: NodeKind) {
        if !self.is_element(node) {
            return;
        }

        // A lone text or markup child is rewritten in place, so repeated
        // passes over the same slot do not grow the arena.
        let lone_leaf = match self.nodes[node.0].children.as_slice() {
            [only] if !self.is_element(*only) => Some(*only),
            _ => None,
        };
        if let Some(only) = lone_leaf {
            self.nodes[only.0].kind = leaf;
            return;
        }

        let old = std::mem::take(&mut self.nodes[node.0].children);
        for child in old {
            self.nodes[child.0].parent = None;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: leaf,
            parent: Some(node),
            children: Vec::new(),
        });
        self.nodes[node.0].children.push(id);
    }

    // ==================== Serialization ====================

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if self.tag(self.root) == Some("html") {
            out.push_str("<!DOCTYPE html>\n");
        }
        self.write_node(self.root, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Raw(html) => out.push_str(html),
            NodeKind::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in &self.nodes[node.0].children {
                    self.write_node(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Page {
        Page::from_root(
            el("body")
                .child(
                    el("section")
                        .class("page-header")
                        .child(el("h1").text("Title"))
                        .child(el("p").text("Subtitle")),
                )
                .child(
                    el("div")
                        .class("intro-text")
                        .child(el("p").text("First"))
                        .child(el("p").text("Second")),
                )
                .child(
                    el("div")
                        .class("category-card")
                        .attr("data-category-id", "dental")
                        .child(el("h3").class("category-title").text("Dental Health")),
                )
                .child(el("button").id("langEnglish").class("lang-btn active")),
        )
    }

    #[test]
    fn test_query_descendant() {
        let page = sample();
        let h1 = page.query(".page-header h1").unwrap();
        assert_eq!(page.text_content(h1), "Title");
    }

    #[test]
    fn test_query_first_in_document_order() {
        let page = sample();
        let p = page.query(".intro-text p").unwrap();
        assert_eq!(page.text_content(p), "First");
    }

    #[test]
    fn test_nth_child() {
        let page = sample();
        let p = page.query(".intro-text p:nth-child(2)").unwrap();
        assert_eq!(page.text_content(p), "Second");
        assert!(page.query(".intro-text p:nth-child(3)").is_none());
    }

    #[test]
    fn test_query_all_preserves_order() {
        let page = sample();
        let texts: Vec<_> = page
            .query_all("p")
            .into_iter()
            .map(|p| page.text_content(p))
            .collect();
        assert_eq!(texts, vec!["Subtitle", "First", "Second"]);
    }

    #[test]
    fn test_attribute_selectors() {
        let page = sample();
        assert!(page.query("[data-category-id]").is_some());
        assert!(page.query("[data-category-id=dental]").is_some());
        assert!(page.query("[data-category-id=\"cancer\"]").is_none());
    }

    #[test]
    fn test_query_within_scope() {
        let page = sample();
        let card = page.query("[data-category-id]").unwrap();
        let title = page.query_within(card, ".category-title").unwrap();
        assert_eq!(page.text_content(title), "Dental Health");
        assert!(page.query_within(card, "h1").is_none());
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let page = sample();
        assert!(page.query("a > b").is_none());
        assert!(page.query_all("").is_empty());
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut page = sample();
        let header = page.query(".page-header").unwrap();
        page.set_text(header, "flat");
        assert_eq!(page.text_content(header), "flat");
        assert!(page.query(".page-header h1").is_none());
    }

    #[test]
    fn test_set_inner_html_is_verbatim() {
        let mut page = sample();
        let h1 = page.query("h1").unwrap();
        page.set_inner_html(h1, "<span>📷</span> Follow");
        assert_eq!(page.inner_html(h1), "<span>📷</span> Follow");
    }

    #[test]
    fn test_class_manipulation() {
        let mut page = sample();
        let button = page.element_by_id("langEnglish").unwrap();

        assert!(page.has_class(button, "active"));
        page.remove_class(button, "active");
        assert!(!page.has_class(button, "active"));
        assert!(page.has_class(button, "lang-btn"));

        page.add_class(button, "active");
        page.add_class(button, "active");
        assert_eq!(page.attribute(button, "class"), Some("lang-btn active"));
    }

    #[test]
    fn test_serialization_escapes() {
        let page = Page::from_root(
            el("p")
                .attr("title", "a \"quoted\" <value>")
                .text("1 < 2 & 3 > 2"),
        );
        assert_eq!(
            page.to_html(),
            "<p title=\"a &quot;quoted&quot; &lt;value&gt;\">1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn test_void_elements_and_doctype() {
        let page = Page::from_root(el("html").child(el("head").child(el("meta").attr("charset", "utf-8"))));
        assert_eq!(
            page.to_html(),
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"></head></html>"
        );
    }

    #[test]
    fn test_repeated_set_text_reuses_node() {
        let mut page = Page::from_root(el("div").child(el("a").class("nav-link").text("Home")));
        let link = page.query(".nav-link").unwrap();

        page.set_text(link, "首頁");
        let size = page.nodes.len();
        for _ in 0..1000 {
            page.set_text(link, "Home");
            page.set_inner_html(link, "<span>x</span>");
            page.set_text(link, "首頁");
        }

        assert_eq!(page.nodes.len(), size);
        assert_eq!(page.text_content(link), "首頁");
    }

    #[test]
    fn test_set_text_replaces_element_children() {
        let mut page = Page::from_root(el("p").child(el("b").text("bold")).text(" tail"));
        let root = page.root();

        page.set_text(root, "plain");

        assert_eq!(page.to_html(), "<p>plain</p>");
        assert!(page.query("b").is_none());
    }

    #[test]
    fn test_builder_class_appends() {
        let page = Page::from_root(el("a").class("nav-link").class("active"));
        assert_eq!(page.attribute(page.root(), "class"), Some("nav-link active"));
    }
}
