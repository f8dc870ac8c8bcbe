use crate::document::Document;
use crate::node::{NodeId, NodeKind};

/// Serialize a node and its subtree to compact HTML.
///
/// Only tags, classes and text are emitted. Missing nodes serialize to an
/// empty string.
pub fn outer_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };

    match node.kind() {
        NodeKind::Text(text) => escape_into(text, out),
        NodeKind::Element { tag } => {
            out.push('<');
            out.push_str(tag);
            if !node.class_list().is_empty() {
                out.push_str(" class=\"");
                escape_into(&node.class_list().to_string(), out);
                out.push('"');
            }
            out.push('>');
            for child in node.children() {
                write_node(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
