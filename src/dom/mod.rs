//! Host document model
//!
//! An arena-backed element tree standing in for the page DOM. Elements are
//! addressed by `NodeId` handles; the tree owns every node and handles are
//! plain indices, so callers never hold borrows into the tree across
//! mutations.

pub mod events;
pub mod html;
pub mod selector;
pub mod style;

pub use events::{Listener, PointerEventKind};
pub use selector::Selector;
pub use style::InlineStyle;

use crate::messages::Msg;

/// Handle to a node in a `Document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the document arena (creation order)
    pub fn index(self) -> usize {
        self.0
    }
}

/// An element: tag, attributes, class list and inline style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    /// Attributes in source order. `class` and `style` entries only mark
    /// position; their live values are `classes` and `style`.
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    style: InlineStyle,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            classes: Vec::new(),
            style: InlineStyle::new(),
        }
    }

    /// Lower-cased tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Attribute value by (case-insensitive) name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute; `class` and `style` update the class list and
    /// inline style respectively.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" => {
                self.classes.clear();
                for class in value.split_ascii_whitespace() {
                    self.add_class(class);
                }
            }
            "style" => self.style = InlineStyle::parse(value),
            _ => {}
        }
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value.to_string(),
            None => self.attributes.push((name, value.to_string())),
        }
    }

    /// Attributes in source order, with `class` and `style` reflecting
    /// their current values. Empty class lists and styles are omitted.
    pub fn attributes(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.attributes.len() + 2);
        let mut saw_class = false;
        let mut saw_style = false;
        for (name, value) in &self.attributes {
            match name.as_str() {
                "class" => {
                    saw_class = true;
                    if !self.classes.is_empty() {
                        out.push((name.clone(), self.classes.join(" ")));
                    }
                }
                "style" => {
                    saw_style = true;
                    if !self.style.is_empty() {
                        out.push((name.clone(), self.style.to_css()));
                    }
                }
                _ => out.push((name.clone(), value.clone())),
            }
        }
        if !saw_class && !self.classes.is_empty() {
            out.push(("class".to_string(), self.classes.join(" ")));
        }
        if !saw_style && !self.style.is_empty() {
            out.push(("style".to_string(), self.style.to_css()));
        }
        out
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }
}

/// Node payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The document root
    Document,
    Element(Element),
    /// Raw text as it appeared in the markup (entities undecoded)
    Text(String),
    Comment(String),
    Doctype(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<Listener>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

/// The host document tree
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document has no nodes besides the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached element; attach it with `append_child`
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    pub fn create_doctype(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Doctype(text.to_string()))
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), String> {
        if child == self.root() {
            return Err("Cannot append the document root".to_string());
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(format!(
                "Appending node {} under {} would create a cycle",
                child.0, parent.0
            ));
        }
        if !matches!(
            self.nodes[parent.0].data,
            NodeData::Document | NodeData::Element(_)
        ) {
            return Err(format!("Node {} cannot have children", parent.0));
        }

        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == self.root() || self.ancestors(id).any(|a| a == self.root())
    }

    /// All descendants in document (pre-)order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    /// Every connected element matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
            .collect()
    }

    /// First connected element matching `selector`
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    pub fn add_event_listener(&mut self, id: NodeId, listener: Listener) {
        self.nodes[id.0].listeners.push(listener);
    }

    pub fn listeners(&self, id: NodeId) -> &[Listener] {
        &self.nodes[id.0].listeners
    }

    /// Run the target's listeners for `kind`, collecting the messages they emit
    pub fn dispatch(&self, id: NodeId, kind: PointerEventKind) -> Vec<Msg> {
        self.listeners(id)
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| (listener.on_event)(id))
            .collect()
    }
}
