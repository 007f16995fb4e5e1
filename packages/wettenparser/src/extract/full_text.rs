//! Mixed-content text reconstruction.

use roxmltree::{Node, NodeType};

/// Reconstruct the logical text of an element with inline markup.
///
/// Walks the element and all of its descendants in document order. Each
/// visited node contributes its own text (for `<a>` references that is the
/// visible label, for comments and processing instructions their content),
/// and then the text that follows it up to the next sibling. Reference
/// elements are flattened together with anything nested inside them.
///
/// Fragments are concatenated as-is; whitespace is left for
/// [`clean`](crate::text::clean) to normalize. The element's own trailing
/// text is included as well.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_wettenparser::extract::extract_full_text;
///
/// let xml = r#"<al>Zie <a href="x">artikel 2</a>, tweede lid.</al>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(extract_full_text(doc.root_element()), "Zie artikel 2, tweede lid.");
/// ```
pub fn extract_full_text(node: Node<'_, '_>) -> String {
    let mut text = String::new();

    for visited in node.descendants() {
        if visited.is_text() {
            // Text nodes are picked up as the text or tail of their neighbours.
            continue;
        }
        if let Some(own) = own_text(visited) {
            text.push_str(own);
        }
        if let Some(tail) = trailing_text(visited) {
            text.push_str(tail);
        }
    }

    text
}

/// Direct text of an element, comment body, or instruction value.
fn own_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    match node.node_type() {
        NodeType::Element | NodeType::Comment => node.text(),
        NodeType::PI => node.pi().and_then(|pi| pi.value),
        NodeType::Root | NodeType::Text => None,
    }
}

/// Text directly following a node, before its next sibling node.
fn trailing_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.next_sibling()
        .filter(|sibling| sibling.is_text())
        .and_then(|sibling| sibling.text())
}
