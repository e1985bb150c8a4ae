//! Rendering result with metadata and statistics.

use crate::model::DocumentMetadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: DocumentMetadata,

    /// Segmentation statistics
    pub stats: SegmentationStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: DocumentMetadata, stats: SegmentationStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while segmenting and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationStats {
    /// Physical lines in the raw input
    pub input_line_count: u32,

    /// Lines left after normalization
    pub line_count: u32,

    /// Content lines dropped as noise
    pub dropped_line_count: u32,

    /// Headings matched from the section vocabulary
    pub vocabulary_heading_count: u32,

    /// Headings matched as `Title 2020 - Present`
    pub date_range_heading_count: u32,

    /// Headings matched after a location line
    pub location_heading_count: u32,

    /// Sections in the final document
    pub section_count: u32,

    /// Content lines placed in sections
    pub content_line_count: u32,

    /// Lines captured into the contact block
    pub contact_line_count: u32,

    /// Contact duplicates removed from the fallback bucket
    pub duplicate_contact_count: u32,

    /// Headings dropped because no content followed them
    pub pruned_section_count: u32,

    /// Whether the single-bucket fallback was used
    pub used_fallback: bool,

    /// Approximate word count of rendered content
    pub word_count: u32,

    /// Character count (excluding whitespace) of rendered content
    pub char_count: u32,
}

impl SegmentationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total headings of any kind.
    pub fn heading_count(&self) -> u32 {
        self.vocabulary_heading_count + self.date_range_heading_count + self.location_heading_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &SegmentationStats) {
        self.input_line_count += other.input_line_count;
        self.line_count += other.line_count;
        self.dropped_line_count += other.dropped_line_count;
        self.vocabulary_heading_count += other.vocabulary_heading_count;
        self.date_range_heading_count += other.date_range_heading_count;
        self.location_heading_count += other.location_heading_count;
        self.section_count += other.section_count;
        self.content_line_count += other.content_line_count;
        self.contact_line_count += other.contact_line_count;
        self.duplicate_contact_count += other.duplicate_contact_count;
        self.pruned_section_count += other.pruned_section_count;
        self.used_fallback |= other.used_fallback;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
