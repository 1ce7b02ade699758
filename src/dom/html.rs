//! Page markup loading and serialization
//!
//! Markup is parsed with tree-sitter-html and walked into a `Document`.
//! Source text between nodes (indentation, newlines) is kept as text nodes
//! so serialization reproduces the page layout.

use tree_sitter::{Language, Node, Parser};

use super::{Document, NodeData, NodeId};

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parse a full page into a new document
pub fn parse_document(markup: &str) -> Result<Document, String> {
    let mut doc = Document::new();
    let root = doc.root();
    parse_into(&mut doc, root, markup)?;
    Ok(doc)
}

/// Parse a markup fragment and append its top-level nodes under `parent`
///
/// Returns the appended top-level nodes in order.
pub fn parse_into(doc: &mut Document, parent: NodeId, markup: &str) -> Result<Vec<NodeId>, String> {
    let language: Language = tree_sitter_html::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| format!("Failed to load HTML grammar: {}", e))?;
    let tree = parser
        .parse(markup, None)
        .ok_or_else(|| "HTML parse was cancelled".to_string())?;

    let root = tree.root_node();
    if root.has_error() {
        tracing::warn!("Markup contains syntax errors; recovering what parsed");
    }

    let first_new = doc.children(parent).len();
    let mut builder = TreeBuilder {
        doc,
        source: markup,
    };
    builder.build_content(parent, root, 0, markup.len())?;
    Ok(builder.doc.children(parent)[first_new..].to_vec())
}

struct TreeBuilder<'a> {
    doc: &'a mut Document,
    source: &'a str,
}

impl<'a> TreeBuilder<'a> {
    fn text(&self, node: &Node) -> &'a str {
        let source: &'a str = self.source;
        &source[node.start_byte()..node.end_byte()]
    }

    /// Keep source text not covered by any node (whitespace between tags)
    fn push_gap(&mut self, parent: NodeId, start: usize, end: usize) -> Result<(), String> {
        if start >= end {
            return Ok(());
        }
        let source: &'a str = self.source;
        let gap = &source[start..end];
        let id = self.doc.create_text(gap);
        self.doc.append_child(parent, id)
    }

    fn build_content(
        &mut self,
        parent: NodeId,
        node: Node,
        start: usize,
        end: usize,
    ) -> Result<(), String> {
        let mut prev_end = start;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if matches!(child.kind(), "start_tag" | "self_closing_tag") {
                prev_end = child.end_byte();
                continue;
            }
            if child.is_missing() {
                continue;
            }

            self.push_gap(parent, prev_end, child.start_byte())?;
            prev_end = child.end_byte();

            match child.kind() {
                "element" | "script_element" | "style_element" => self.build_element(parent, child)?,
                "text" | "raw_text" | "entity" => {
                    let text = self.text(&child);
                    let id = self.doc.create_text(text);
                    self.doc.append_child(parent, id)?;
                }
                "comment" => {
                    let raw = self.text(&child);
                    let body = raw.strip_prefix("<!--").unwrap_or(raw);
                    let body = body.strip_suffix("-->").unwrap_or(body);
                    let id = self.doc.create_comment(body);
                    self.doc.append_child(parent, id)?;
                }
                "doctype" => {
                    let raw = self.text(&child);
                    let body = raw
                        .trim_start_matches("<!")
                        .trim_end_matches('>')
                        .trim();
                    // Drop the DOCTYPE keyword, keep the rest ("html")
                    let body = body
                        .split_once(char::is_whitespace)
                        .map(|(_, rest)| rest.trim())
                        .unwrap_or("");
                    let id = self.doc.create_doctype(body);
                    self.doc.append_child(parent, id)?;
                }
                "end_tag" => {}
                "erroneous_end_tag" => {
                    tracing::warn!(
                        "Ignoring stray end tag '{}' at byte {}",
                        self.text(&child),
                        child.start_byte()
                    );
                }
                "ERROR" => {
                    tracing::warn!("Recovering from markup error at byte {}", child.start_byte());
                    self.build_content(parent, child, child.start_byte(), child.end_byte())?;
                }
                other => {
                    tracing::trace!("Skipping {} node", other);
                }
            }
        }
        self.push_gap(parent, prev_end, end)
    }

    fn build_element(&mut self, parent: NodeId, node: Node) -> Result<(), String> {
        let mut cursor = node.walk();
        let Some(start_tag) = node
            .children(&mut cursor)
            .find(|c| matches!(c.kind(), "start_tag" | "self_closing_tag"))
        else {
            tracing::warn!("Element without start tag at byte {}", node.start_byte());
            return Ok(());
        };

        let mut tag_cursor = start_tag.walk();
        let tag_name = start_tag
            .children(&mut tag_cursor)
            .find(|c| c.kind() == "tag_name")
            .map(|n| self.text(&n).to_string())
            .unwrap_or_default();
        if tag_name.is_empty() {
            tracing::warn!("Start tag without name at byte {}", start_tag.start_byte());
            return Ok(());
        }

        let id = self.doc.create_element(&tag_name);
        self.doc.append_child(parent, id)?;

        let mut attr_cursor = start_tag.walk();
        for attr in start_tag.children(&mut attr_cursor) {
            if attr.kind() != "attribute" {
                continue;
            }
            let (name, value) = self.attribute(attr);
            if name.is_empty() {
                continue;
            }
            if let Some(element) = self.doc.element_mut(id) {
                element.set_attribute(&name, &value);
            }
        }

        // tree-sitter-html nests the content after a void tag inside it;
        // that content belongs to the void element's parent.
        let is_void = VOID_ELEMENTS
            .iter()
            .any(|v| v.eq_ignore_ascii_case(&tag_name));
        let content_parent = if is_void { parent } else { id };
        self.build_content(content_parent, node, node.start_byte(), node.end_byte())
    }

    fn attribute(&self, attr: Node) -> (String, String) {
        let mut name = String::new();
        let mut value = String::new();
        let mut cursor = attr.walk();
        for part in attr.children(&mut cursor) {
            match part.kind() {
                "attribute_name" => name = self.text(&part).to_string(),
                "attribute_value" => value = decode_entities(self.text(&part)),
                "quoted_attribute_value" => {
                    // The inner attribute_value is absent for `""`
                    let mut inner_cursor = part.walk();
                    value = part
                        .children(&mut inner_cursor)
                        .find(|c| c.kind() == "attribute_value")
                        .map(|n| decode_entities(self.text(&n)))
                        .unwrap_or_default();
                }
                _ => {}
            }
        }
        (name, value)
    }
}

/// Decode character references in an attribute value
///
/// Handles the XML entities plus numeric references; anything else is
/// kept as written.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest.find(';').and_then(|semi| {
            let name = &rest[1..semi];
            let ch = match name {
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "lt" => Some('<'),
                "gt" => Some('>'),
                _ => {
                    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                        u32::from_str_radix(hex, 16).ok()
                    } else if let Some(dec) = name.strip_prefix('#') {
                        dec.parse::<u32>().ok()
                    } else {
                        None
                    };
                    code.and_then(char::from_u32)
                }
            };
            ch.map(|c| (c, semi + 1))
        });
        match decoded {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Serialize the whole document
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(doc.root()) {
        write_node(doc, child, &mut out);
    }
    out
}

/// Serialize one node and its subtree
pub fn outer_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.node(id) {
        NodeData::Document => {
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
        }
        NodeData::Element(element) => {
            out.push('<');
            out.push_str(element.tag());
            for (name, value) in element.attributes() {
                out.push(' ');
                out.push_str(&name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(&value));
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&element.tag()) {
                return;
            }
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(element.tag());
            out.push('>');
        }
        NodeData::Text(text) => out.push_str(text),
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeData::Doctype(text) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(text);
            out.push('>');
        }
    }
}
