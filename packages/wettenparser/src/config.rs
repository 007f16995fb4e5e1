//! Configuration constants and validation functions for the wettenparser.

use std::path::Path;

use crate::error::{Result, WettenparserError};

/// Output file written when no `--output` is given.
pub const DEFAULT_OUTPUT_FILE: &str = "parsed_articles.json";

/// Root attribute carrying the effective date of the consolidated text.
pub const EFFECTIVE_DATE_ATTRIBUTE: &str = "inwerkingtreding";

/// Title section element providing heading context.
pub const TITLE_SECTION_TAG: &str = "titeldeel";

/// Article element.
pub const ARTICLE_TAG: &str = "artikel";

/// Header block of articles and title sections.
pub const HEADER_TAG: &str = "kop";

/// Heading parts read from a title section header, in output order.
pub const HEADING_PART_TAGS: [&str; 3] = ["label", "nr", "titel"];

/// Number element inside a header block.
pub const NUMBER_TAG: &str = "nr";

/// Paragraph (lid) element.
pub const PARAGRAPH_TAG: &str = "lid";

/// Paragraph number element.
pub const PARAGRAPH_NUMBER_TAG: &str = "lidnr";

/// Text block (alinea) element.
pub const TEXT_BLOCK_TAG: &str = "al";

/// Sub-list container.
pub const LIST_TAG: &str = "lijst";

/// Sub-list item.
pub const LIST_ITEM_TAG: &str = "li";

/// Sub-list item number.
pub const LIST_ITEM_NUMBER_TAG: &str = "li.nr";

/// Validate a law code and return it trimmed.
///
/// # Examples
/// ```
/// use regelrecht_wettenparser::config::validate_law_code;
///
/// assert_eq!(validate_law_code(" BW1 ").unwrap(), "BW1");
/// assert!(validate_law_code("   ").is_err());
/// ```
pub fn validate_law_code(law_code: &str) -> Result<&str> {
    let trimmed = law_code.trim();
    if trimmed.is_empty() {
        Err(WettenparserError::InvalidLawCode(law_code.to_string()))
    } else {
        Ok(trimmed)
    }
}

/// Validate that a path points to an existing `.xml` file.
///
/// # Returns
/// * `Ok(())` if the file exists and has the `xml` extension
/// * `Err(WettenparserError::InvalidXmlPath)` otherwise
pub fn validate_xml_path(path: &Path) -> Result<()> {
    let has_xml_extension = path.extension().is_some_and(|ext| ext == "xml");
    if has_xml_extension && path.is_file() {
        Ok(())
    } else {
        Err(WettenparserError::InvalidXmlPath(
            path.display().to_string(),
        ))
    }
}
