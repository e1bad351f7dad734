//! Document model
//!
//! A small arena-backed element tree holding exactly what the page
//! behaviours read and write: ids, classes, attributes, inline style, the
//! `hidden` flag, focus, and a few layout measurements. Lookups return
//! `Option`, so a missing element is a no-op for the caller rather than an
//! error.

use std::collections::{BTreeMap, BTreeSet};

/// Handle to an element in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Horizontal box of an element, viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Default)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    hidden: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    scroll_height: f64,
}

/// An element tree plus the window state the behaviours consult
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    body: NodeId,
    focused: Option<NodeId>,
    root_properties: BTreeMap<String, String>,
    path: String,
    scroll_y: f64,
    fine_pointer: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding an `html` root with an empty `body`
    pub fn new() -> Self {
        let mut doc = Self {
            elements: vec![Element {
                tag: "html".to_string(),
                ..Default::default()
            }],
            body: NodeId(0),
            focused: None,
            root_properties: BTreeMap::new(),
            path: "/".to_string(),
            scroll_y: 0.0,
            fine_pointer: true,
        };
        let body = doc.create_element("body");
        doc.append_child(doc.root(), body);
        doc.body = body;
        doc
    }

    /// Number of elements ever created, attached or not
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // ---- tree ------------------------------------------------------------

    /// Creates a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        NodeId(self.elements.len() - 1)
    }

    /// Appends `child` to `parent`, detaching it from any previous parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.elements[child.0].parent.take() {
            self.elements[old.0].children.retain(|c| *c != child);
        }
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    /// Detaches every child of `id`
    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.elements[id.0].children);
        for child in children {
            self.elements[child.0].parent = None;
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.elements[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.elements[id.0].parent
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.elements[id.0].tag
    }

    /// Returns true if `id` is reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.ancestors_or_self(id).any(|n| n == self.root())
    }

    /// `id` followed by its ancestors, innermost first
    pub fn ancestors_or_self(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |n| self.parent(*n))
    }

    /// Descendants of `scope` in document order, excluding `scope`
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    // ---- queries -----------------------------------------------------------

    /// Connected element with the given id
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| self.elements[n.0].id.as_deref() == Some(id))
    }

    /// Descendants of `scope` carrying `class`
    pub fn query_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    /// Descendants of `scope` whose attribute `name` equals `value`
    pub fn query_attribute(&self, scope: NodeId, name: &str, value: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| self.attribute(*n, name) == Some(value))
            .collect()
    }

    /// First descendant of `scope` with one of `tags`
    pub fn first_with_tag(&self, scope: NodeId, tags: &[&str]) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|n| tags.iter().any(|t| *t == self.tag(*n)))
    }

    /// Nearest ancestor-or-self carrying attribute `name`
    pub fn closest_with_attribute(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.ancestors_or_self(id)
            .find(|n| self.elements[n.0].attributes.contains_key(name))
    }

    /// Nearest ancestor-or-self carrying `class`
    pub fn closest_with_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        self.ancestors_or_self(id).find(|n| self.has_class(*n, class))
    }

    // ---- identity, classes, attributes -------------------------------------

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.elements[node.0].id = Some(id.to_string());
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.elements[id.0].classes.contains(class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.elements[id.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.elements[id.0].classes.remove(class);
    }

    /// Adds `class` when `on`, removes it otherwise
    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.elements[id.0].attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.elements[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.elements[id.0].text
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.elements[id.0].text = text.to_string();
    }

    // ---- style and visibility ----------------------------------------------

    /// Inline style property; `None` when unset
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.elements[id.0].style.get(property).map(String::as_str)
    }

    /// Sets an inline style property; an empty value clears it
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        let style = &mut self.elements[id.0].style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.elements[id.0].hidden
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.elements[id.0].hidden = hidden;
    }

    // ---- layout ------------------------------------------------------------

    pub fn rect(&self, id: NodeId) -> Rect {
        self.elements[id.0].rect
    }

    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        self.elements[id.0].rect = rect;
    }

    pub fn scroll_height(&self, id: NodeId) -> f64 {
        self.elements[id.0].scroll_height
    }

    pub fn set_scroll_height(&mut self, id: NodeId, height: f64) {
        self.elements[id.0].scroll_height = height;
    }

    // ---- focus -------------------------------------------------------------

    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Focuses `id` if it is still in the document
    pub fn focus(&mut self, id: NodeId) {
        if self.is_connected(id) {
            self.focused = Some(id);
        }
    }

    // ---- window ------------------------------------------------------------

    /// Custom property on the root element, trimmed
    pub fn root_property(&self, name: &str) -> &str {
        self.root_properties
            .get(name)
            .map(|v| v.trim())
            .unwrap_or_default()
    }

    pub fn set_root_property(&mut self, name: &str, value: &str) {
        self.root_properties
            .insert(name.to_string(), value.to_string());
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Whether the primary pointer is fine (a mouse rather than touch)
    pub fn has_fine_pointer(&self) -> bool {
        self.fine_pointer
    }

    pub fn set_fine_pointer(&mut self, fine: bool) {
        self.fine_pointer = fine;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_elements_are_not_found_by_id() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_id(el, "menu");
        assert_eq!(doc.element_by_id("menu"), None);

        doc.append_child(doc.body(), el);
        assert_eq!(doc.element_by_id("menu"), Some(el));
    }

    #[test]
    fn descendants_are_in_document_order() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("span");
        let c = doc.create_element("div");
        doc.append_child(doc.body(), a);
        doc.append_child(a, b);
        doc.append_child(doc.body(), c);
        assert_eq!(doc.descendants(doc.body()), vec![a, b, c]);
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_style(el, "color", "red");
        doc.set_style(el, "color", "");
        assert_eq!(doc.style(el, "color"), None);
    }
}
