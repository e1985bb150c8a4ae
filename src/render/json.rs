//! JSON rendering for segmented resumes.

use crate::error::{Error, Result};
use crate::model::ResumeDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// Sections serialize as an array so their order survives.
pub fn to_json(doc: &ResumeDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        doc.metadata.source = Some("jane.txt".to_string());
        doc.sections.entry("Skills").push("- Rust");
        doc.sections.entry("Education").push("- MIT 2020");
        doc.refresh_metadata();
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"source\""));
        assert!(json.contains("jane.txt"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_to_json_keeps_section_order() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sections = value["sections"].as_array().unwrap();
        assert_eq!(sections[0]["title"], "Skills");
        assert_eq!(sections[1]["title"], "Education");
        assert_eq!(sections[1]["lines"][0], "- MIT 2020");
    }
}
