//! Error types for the wettenparser.
//!
//! Input problems (unreadable files, bad encoding, malformed XML) are fatal
//! and surface here. Per-article anomalies never do: the extractor omits
//! such articles instead.

use thiserror::Error;

/// Main error type for the wettenparser library.
#[derive(Debug, Error)]
pub enum WettenparserError {
    /// Law code missing or blank.
    #[error("Invalid law code: '{0}'. A non-empty code is required (e.g., BW1)")]
    InvalidLawCode(String),

    /// Input path missing or not an XML file.
    #[error("Invalid XML file: '{0}' is not a valid XML file or doesn't exist")]
    InvalidXmlPath(String),

    /// Input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for wettenparser operations.
pub type Result<T> = std::result::Result<T, WettenparserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WettenparserError::InvalidLawCode("  ".to_string());
        assert!(err.to_string().contains("non-empty code"));
    }

    #[test]
    fn test_invalid_xml_path_display() {
        let err = WettenparserError::InvalidXmlPath("wet.txt".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid XML file: 'wet.txt' is not a valid XML file or doesn't exist"
        );
    }

    #[test]
    fn test_xml_parse_error_from() {
        let parse_err = roxmltree::Document::parse("<wet>").unwrap_err();
        let err: WettenparserError = parse_err.into();
        assert!(err.to_string().starts_with("XML parsing failed:"));
    }
}
