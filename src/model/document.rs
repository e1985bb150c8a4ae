//! Document-level types.

use super::{Section, SectionMap, CONTACT_INFORMATION};
use crate::render::SegmentationStats;
use serde::{Deserialize, Serialize};

/// A segmented resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Sections in document order
    pub sections: SectionMap,

    /// Normalized source lines the sections were built from
    pub lines: Vec<String>,

    /// Counters collected while segmenting
    pub stats: SegmentationStats,
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a section by title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.get(title)
    }

    /// Section titles in document order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.titles()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The contact block, if one was found.
    pub fn contact(&self) -> Option<&Section> {
        self.sections.get(CONTACT_INFORMATION)
    }

    /// Iterate sections in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Plain text of every section, headings followed by their lines.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("{}\n{}", s.title, s.markdown_list()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub(crate) fn refresh_metadata(&mut self) {
        self.metadata.line_count = self.lines.len() as u32;
        self.metadata.section_count = self.sections.len() as u32;
        self.metadata.has_contact_block = self.sections.contains(CONTACT_INFORMATION);
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Where the text came from (file name), if known
    pub source: Option<String>,

    /// Number of normalized lines
    pub line_count: u32,

    /// Number of sections produced
    pub section_count: u32,

    /// Whether a contact block was recognized
    pub has_contact_block: bool,
}

impl DocumentMetadata {
    /// Convert metadata to YAML frontmatter.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut yaml = String::from("---\n");

        if let Some(ref source) = self.source {
            yaml.push_str(&format!("source: \"{}\"\n", escape_yaml(source)));
        }
        yaml.push_str(&format!("lines: {}\n", self.line_count));
        yaml.push_str(&format!("sections: {}\n", self.section_count));
        yaml.push_str(&format!("contact: {}\n", self.has_contact_block));

        yaml.push_str("---\n\n");
        yaml
    }
}

fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter() {
        let metadata = DocumentMetadata {
            source: Some("jane \"cv\".txt".to_string()),
            line_count: 12,
            section_count: 3,
            has_contact_block: true,
        };
        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("source: \"jane \\\"cv\\\".txt\""));
        assert!(yaml.contains("sections: 3"));
        assert!(yaml.contains("contact: true"));
        assert!(yaml.ends_with("---\n\n"));
    }

    #[test]
    fn test_refresh_metadata() {
        let mut doc = ResumeDocument::new();
        doc.lines = vec!["jane@example.com".into(), "Skills".into(), "Rust".into()];
        doc.sections
            .entry(CONTACT_INFORMATION)
            .push("- jane@example.com");
        doc.sections.entry("Skills").push("- Rust");
        doc.refresh_metadata();

        assert_eq!(doc.metadata.line_count, 3);
        assert_eq!(doc.metadata.section_count, 2);
        assert!(doc.metadata.has_contact_block);
        assert_eq!(doc.contact().unwrap().len(), 1);
    }

    #[test]
    fn test_plain_text() {
        let mut doc = ResumeDocument::new();
        doc.sections.entry("Education").push("- MIT 2020");
        doc.sections.entry("Skills").push("- Rust");
        assert_eq!(doc.plain_text(), "Education\n- MIT 2020\n\nSkills\n- Rust");
    }
}
