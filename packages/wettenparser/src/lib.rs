//! RegelRecht Wettenparser - Extract articles from Dutch statute XML.
//!
//! This crate reads consolidated statute XML from the Basiswettenbestand
//! (BWB) and turns every article into a structured record with its number,
//! identifier, effective date, and paragraphs, ready to serialize as JSON.
//!
//! # Example
//!
//! ```
//! use regelrecht_wettenparser::parse_articles;
//!
//! let xml = br#"<toestand inwerkingtreding="2020-01-01">
//!     <artikel>
//!         <kop><nr>1</nr></kop>
//!         <lid><lidnr>1</lidnr><al>1. Hello world.</al></lid>
//!     </artikel>
//! </toestand>"#;
//!
//! let articles = parse_articles(xml, "TEST").unwrap();
//! assert_eq!(articles.len(), 1);
//! assert_eq!(articles[0].paragraphs[0].text, "Hello world.");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Tag names, defaults, and input validation
//! - [`types`]: Article, paragraph, and sub-item records
//! - [`error`]: Error types and Result alias
//! - [`text`]: Text normalization
//! - [`xml`]: XML navigation utilities
//! - [`extract`]: The recursive article extractor
//! - [`output`]: JSON output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod text;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extract::{extract_articles, parse_articles};

// Re-export commonly used items
pub use error::{Result, WettenparserError};
pub use output::{generate_json, save_json};
pub use types::{ArticleRecord, ParagraphRecord, SubItemRecord};
