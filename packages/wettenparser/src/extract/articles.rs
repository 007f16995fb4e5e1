//! Recursive article extraction over a statute document.

use roxmltree::{Document, Node, ParsingOptions};

use super::full_text::extract_full_text;
use super::subitems::extract_subitems;
use crate::config::{
    ARTICLE_TAG, EFFECTIVE_DATE_ATTRIBUTE, HEADER_TAG, HEADING_PART_TAGS, NUMBER_TAG,
    PARAGRAPH_NUMBER_TAG, PARAGRAPH_TAG, TEXT_BLOCK_TAG, TITLE_SECTION_TAG,
};
use crate::error::Result;
use crate::text::{clean, strip_number_prefix};
use crate::types::{ArticleRecord, ParagraphRecord};
use crate::xml::{
    element_children, find_by_path, find_child, find_children, get_tag_name, header_text,
};

/// Context inherited from ancestors during the walk.
///
/// Each child recursion receives its own clone, so a heading set while
/// inside one subtree is never visible to its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractContext {
    /// Heading of the nearest enclosing title section.
    pub title_heading: Option<String>,
}

impl ExtractContext {
    /// Return a copy with the title heading replaced.
    #[must_use]
    pub fn with_title_heading(self, title_heading: Option<String>) -> Self {
        Self { title_heading }
    }
}

/// Extracts article records from one statute document.
#[derive(Debug, Clone)]
pub struct ArticleExtractor<'a> {
    law_code: &'a str,
    effective_date: String,
}

impl<'a> ArticleExtractor<'a> {
    /// Create an extractor for a law code and document-level effective date.
    #[must_use]
    pub fn new(law_code: &'a str, effective_date: impl Into<String>) -> Self {
        Self {
            law_code,
            effective_date: effective_date.into(),
        }
    }

    /// Create an extractor reading the effective date from the document root.
    #[must_use]
    pub fn for_document(doc: &Document<'_>, law_code: &'a str) -> Self {
        let effective_date = doc
            .root_element()
            .attribute(EFFECTIVE_DATE_ATTRIBUTE)
            .unwrap_or_default();
        Self::new(law_code, effective_date)
    }

    /// Extract all qualifying articles below `root`, in document order.
    #[must_use]
    pub fn extract(&self, root: Node<'_, '_>) -> Vec<ArticleRecord> {
        self.walk(root, ExtractContext::default(), Vec::new())
    }

    /// Visit one element and its subtree, threading the accumulator through.
    fn walk(
        &self,
        node: Node<'_, '_>,
        context: ExtractContext,
        mut articles: Vec<ArticleRecord>,
    ) -> Vec<ArticleRecord> {
        let tag = get_tag_name(node);

        let context = if tag == TITLE_SECTION_TAG {
            context.with_title_heading(header_text(node, HEADER_TAG, &HEADING_PART_TAGS))
        } else {
            context
        };

        if tag == ARTICLE_TAG {
            if let Some(article) = self.extract_article(node, &context) {
                articles.push(article);
            }
        }

        element_children(node).fold(articles, |acc, child| {
            self.walk(child, context.clone(), acc)
        })
    }

    /// Build the record for one `artikel`, or `None` if it has no paragraphs.
    fn extract_article(
        &self,
        node: Node<'_, '_>,
        context: &ExtractContext,
    ) -> Option<ArticleRecord> {
        let article_number = find_by_path(node, &format!("{HEADER_TAG}/{NUMBER_TAG}"))
            .map(|nr| clean(nr.text()));
        let identifier = article_number
            .as_deref()
            .filter(|nr| !nr.is_empty())
            .map(|nr| format!("{}:{nr}", self.law_code));

        let paragraphs = extract_paragraphs(node);
        if paragraphs.is_empty() {
            tracing::debug!(
                article = article_number.as_deref().unwrap_or("<none>"),
                "Skipping article without paragraph text"
            );
            return None;
        }

        Some(ArticleRecord {
            article_number,
            identifier,
            effective_date: self.effective_date.clone(),
            paragraphs,
            title_heading: context.title_heading.clone(),
        })
    }
}

/// Paragraphs of an article: one per `lid`, or one per non-empty `al`
/// for articles without `lid` subdivision.
fn extract_paragraphs(article: Node<'_, '_>) -> Vec<ParagraphRecord> {
    let lids: Vec<_> = find_children(article, PARAGRAPH_TAG).collect();

    if lids.is_empty() {
        return find_children(article, TEXT_BLOCK_TAG)
            .map(|al| clean(Some(extract_full_text(al).as_str())))
            .filter(|text| !text.is_empty())
            .map(ParagraphRecord::unnumbered)
            .collect();
    }

    lids.into_iter().map(extract_lid).collect()
}

fn extract_lid(lid: Node<'_, '_>) -> ParagraphRecord {
    let number = find_child(lid, PARAGRAPH_NUMBER_TAG).map(|nr| clean(nr.text()));

    let text = find_children(lid, TEXT_BLOCK_TAG)
        .map(|al| clean(Some(extract_full_text(al).as_str())))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    let text = match number.as_deref() {
        Some(nr) => strip_number_prefix(&text, nr),
        None => text,
    };

    ParagraphRecord {
        number,
        text,
        subitems: extract_subitems(lid),
    }
}

/// Extract all articles from a parsed document.
pub fn extract_articles(doc: &Document<'_>, law_code: &str) -> Vec<ArticleRecord> {
    ArticleExtractor::for_document(doc, law_code).extract(doc.root_element())
}

/// Parse statute XML bytes and extract all articles.
///
/// The whole document is loaded before the walk starts; invalid UTF-8 or
/// malformed XML fails the entire operation without partial results.
///
/// # Examples
/// ```
/// use regelrecht_wettenparser::parse_articles;
///
/// let xml = br#"<toestand inwerkingtreding="2020-01-01">
///     <artikel><kop><nr>1</nr></kop><al>Deze wet geldt.</al></artikel>
/// </toestand>"#;
///
/// let articles = parse_articles(xml, "TEST").unwrap();
/// assert_eq!(articles[0].identifier.as_deref(), Some("TEST:1"));
/// ```
pub fn parse_articles(xml: &[u8], law_code: &str) -> Result<Vec<ArticleRecord>> {
    let xml = xml.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(xml);
    let text = std::str::from_utf8(xml)?;

    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(text, options)?;

    let articles = extract_articles(&doc, law_code);
    tracing::info!(law_code, count = articles.len(), "Extracted articles");

    Ok(articles)
}
