//! Helpers for navigating statute XML by local tag name.
//!
//! BWB documents are published both with and without namespace prefixes,
//! so every lookup here compares local names only.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_wettenparser::xml::get_tag_name;
///
/// let xml = r#"<bwb:artikel xmlns:bwb="urn:bwb">text</bwb:artikel>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "artikel");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get all element children of a node, in document order.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_wettenparser::xml::find_child;
///
/// let xml = r#"<artikel><kop/><lid/></artikel>"#;
/// let doc = Document::parse(xml).unwrap();
/// let artikel = doc.root_element();
///
/// assert!(find_child(artikel, "kop").is_some());
/// assert!(find_child(artikel, "al").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Find a descendant element along a slash-separated path of tag names.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_wettenparser::xml::find_by_path;
///
/// let xml = r#"<artikel><kop><nr>1:1</nr></kop></artikel>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let nr = find_by_path(doc.root_element(), "kop/nr").unwrap();
/// assert_eq!(nr.text(), Some("1:1"));
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    path.split('/').try_fold(node, |current, part| find_child(current, part))
}

/// Build the heading of a structural element from its `kop` children.
///
/// The requested parts are read in order, trimmed, and joined by single
/// spaces; missing or blank parts are skipped. Returns `None` when the
/// element has no header block at all.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_wettenparser::xml::header_text;
///
/// let xml = r#"<titeldeel><kop><label>Titel</label><nr>1</nr><titel>Algemeen</titel></kop></titeldeel>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let heading = header_text(doc.root_element(), "kop", &["label", "nr", "titel"]);
/// assert_eq!(heading.as_deref(), Some("Titel 1 Algemeen"));
/// ```
pub fn header_text(node: Node<'_, '_>, header_tag: &str, parts: &[&str]) -> Option<String> {
    let header = find_child(node, header_tag)?;

    let heading = parts
        .iter()
        .filter_map(|tag| find_child(header, tag))
        .filter_map(|part| part.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Some(heading)
}
