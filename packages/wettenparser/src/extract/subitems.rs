//! Sub-list flattening for paragraphs.

use roxmltree::Node;

use super::full_text::extract_full_text;
use crate::config::{LIST_ITEM_NUMBER_TAG, LIST_ITEM_TAG, LIST_TAG, TEXT_BLOCK_TAG};
use crate::text::clean;
use crate::types::SubItemRecord;
use crate::xml::{find_child, find_children};

/// Flatten the sub-lists of a paragraph into sub-item records.
///
/// Every `li` of every direct `lijst` child is read in document order: the
/// number from `li.nr` and the text from the item's first `al`. Items where
/// both end up empty are dropped.
///
/// Returns `None` when no item qualifies, whether or not a `lijst` was
/// present.
pub fn extract_subitems(paragraph: Node<'_, '_>) -> Option<Vec<SubItemRecord>> {
    let items: Vec<SubItemRecord> = find_children(paragraph, LIST_TAG)
        .flat_map(|list| find_children(list, LIST_ITEM_TAG))
        .filter_map(extract_subitem)
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn extract_subitem(item: Node<'_, '_>) -> Option<SubItemRecord> {
    let number = find_child(item, LIST_ITEM_NUMBER_TAG).map(|nr| clean(nr.text()));
    let text = find_child(item, TEXT_BLOCK_TAG)
        .map(|al| clean(Some(extract_full_text(al).as_str())));

    let is_blank = |value: &Option<String>| value.as_deref().is_none_or(str::is_empty);
    if is_blank(&number) && is_blank(&text) {
        tracing::trace!("Dropping empty list item");
        return None;
    }

    Some(SubItemRecord { number, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    fn subitems(xml: &str) -> Option<Vec<SubItemRecord>> {
        let doc = Document::parse(xml).unwrap();
        extract_subitems(doc.root_element())
    }

    fn item(number: Option<&str>, text: Option<&str>) -> SubItemRecord {
        SubItemRecord {
            number: number.map(String::from),
            text: text.map(String::from),
        }
    }

    #[test]
    fn test_no_list() {
        assert_eq!(subitems("<lid><al>Tekst.</al></lid>"), None);
    }

    #[test]
    fn test_list_with_items() {
        let xml = r#"<lid>
            <al>Onder kind wordt verstaan:</al>
            <lijst>
                <li><li.nr>a.</li.nr><al>een <a>eigen</a> kind;</al></li>
                <li><li.nr>b.</li.nr><al>een
                    pleegkind.</al></li>
            </lijst>
        </lid>"#;

        assert_eq!(
            subitems(xml),
            Some(vec![
                item(Some("a."), Some("een eigen kind;")),
                item(Some("b."), Some("een pleegkind.")),
            ])
        );
    }

    #[test]
    fn test_all_items_empty_is_absent() {
        let xml = "<lid><lijst><li><li.nr> </li.nr><al/></li><li/></lijst></lid>";
        assert_eq!(subitems(xml), None);
    }

    #[test]
    fn test_empty_list_is_absent() {
        assert_eq!(subitems("<lid><lijst/></lid>"), None);
    }

    #[test]
    fn test_item_with_only_number_or_text() {
        let xml = "<lid><lijst>\
            <li><li.nr>1°</li.nr></li>\
            <li><al>zonder nummer</al></li>\
            <li><li.nr></li.nr><al>leeg nummer</al></li>\
        </lijst></lid>";

        assert_eq!(
            subitems(xml),
            Some(vec![
                item(Some("1°"), None),
                item(None, Some("zonder nummer")),
                item(Some(""), Some("leeg nummer")),
            ])
        );
    }

    #[test]
    fn test_multiple_lists_in_order() {
        let xml = "<lid>\
            <lijst><li><li.nr>a.</li.nr><al>eerste</al></li></lijst>\
            <al>tussentekst</al>\
            <lijst><li><li.nr>b.</li.nr><al>tweede</al></li></lijst>\
        </lid>";

        let numbers: Vec<_> = subitems(xml)
            .unwrap()
            .into_iter()
            .filter_map(|i| i.number)
            .collect();
        assert_eq!(numbers, vec!["a.", "b."]);
    }

    #[test]
    fn test_only_first_al_of_item() {
        let xml = "<lid><lijst><li><li.nr>a.</li.nr><al>een</al><al>twee</al></li></lijst></lid>";
        assert_eq!(subitems(xml), Some(vec![item(Some("a."), Some("een"))]));
    }

    #[test]
    fn test_nested_list_not_direct_child_ignored() {
        let xml = "<lid><al><lijst><li><li.nr>a.</li.nr></li></lijst></al></lid>";
        assert_eq!(subitems(xml), None);
    }
}
