//! Output records produced by the article extractor.
//!
//! Field names follow the JSON contract consumed downstream, which is why
//! several fields are renamed on serialization. Absent values serialize as
//! `null` rather than being omitted.

use serde::{Deserialize, Serialize};

/// One extracted statutory article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Article label from `kop/nr` (e.g., "1:1"), absent if the article has none.
    pub article_number: Option<String>,

    /// `"{law_code}:{article_number}"`, present only with a non-empty number.
    pub identifier: Option<String>,

    /// Root `inwerkingtreding` attribute, empty if absent.
    pub effective_date: String,

    /// Paragraphs in document order. Never empty.
    #[serde(rename = "full_text_json")]
    pub paragraphs: Vec<ParagraphRecord>,

    /// Heading of the enclosing title section when the article was visited.
    #[serde(skip)]
    pub title_heading: Option<String>,
}

/// One paragraph (lid) of an article, or one text block of a flat article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Paragraph label from `lidnr`.
    #[serde(rename = "lidnr")]
    pub number: Option<String>,

    /// Cleaned paragraph text.
    pub text: String,

    /// Sub-list items; absent when the paragraph has no qualifying items.
    #[serde(rename = "subparagraphs")]
    pub subitems: Option<Vec<SubItemRecord>>,
}

impl ParagraphRecord {
    /// Create a paragraph for an article without explicit `lid` subdivision.
    #[must_use]
    pub fn unnumbered(text: impl Into<String>) -> Self {
        Self {
            number: None,
            text: text.into(),
            subitems: None,
        }
    }
}

/// One item of a sub-list inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItemRecord {
    /// Item marker from `li.nr` (e.g., "a.").
    #[serde(rename = "nr")]
    pub number: Option<String>,

    /// Item text.
    pub text: Option<String>,
}
