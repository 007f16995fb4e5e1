//! Article extraction from statute XML.
//!
//! The extractor walks the document once, depth-first, carrying the
//! enclosing title-section heading as an immutable context value. Each
//! `artikel` with extractable text becomes an [`ArticleRecord`](crate::types::ArticleRecord).

mod articles;
mod full_text;
mod subitems;

pub use articles::{extract_articles, parse_articles, ArticleExtractor, ExtractContext};
pub use full_text::extract_full_text;
pub use subitems::extract_subitems;
