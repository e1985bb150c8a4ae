//! # resumark
//!
//! Resume text segmentation library for Rust.
//!
//! This library takes the raw text extracted from a resume, repairs common
//! extraction artifacts, splits it into titled sections and renders the
//! result as Markdown, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use resumark::{parse_text, render};
//!
//! let doc = parse_text("Education\nMIT 2020\nSkills\nRust");
//! assert_eq!(doc.titles(), vec!["Education", "Skills"]);
//!
//! let markdown = render::to_markdown(&doc, &render::RenderOptions::default()).unwrap();
//! assert!(markdown.starts_with("## EDUCATION"));
//! ```
//!
//! ## Features
//!
//! - **Artifact repair**: fixes known OCR and LaTeX leftovers, collapses whitespace
//! - **Heading detection**: section vocabulary, dated role lines, location-led entries
//! - **Contact block**: leading phone, email and profile links grouped first
//! - **Parallel processing**: uses Rayon for batches of resumes

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    DocumentMetadata, ResumeDocument, Section, SectionMap, CONTACT_INFORMATION, RESUME_CONTENT,
};
pub use parser::{
    format_list_item, normalize, NormalizeOptions, ParseOptions, ResumeParser, RewriteRule,
};
pub use render::{JsonFormat, RenderOptions, SegmentationStats, TextSize};

use std::io::Read;
use std::path::Path;

/// Segment resume text with the default options.
///
/// Never fails: empty input yields an empty document and text without
/// any recognizable heading lands in a single "Resume Content" section.
///
/// # Example
///
/// ```
/// use resumark::parse_text;
///
/// let doc = parse_text("Jane Doe, India\njane@example.com\nSkills\nRust");
/// assert_eq!(doc.titles(), vec!["Contact Information", "Skills"]);
/// ```
pub fn parse_text(text: &str) -> ResumeDocument {
    ResumeParser::default().parse(text)
}

/// Segment resume text with custom options.
///
/// # Example
///
/// ```
/// use resumark::{parse_text_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_region("Germany");
/// let doc = parse_text_with_options("Max Muster, Germany\nSkills\nRust", options)?;
/// assert!(doc.contact().is_some());
/// # Ok::<(), resumark::Error>(())
/// ```
pub fn parse_text_with_options(text: &str, options: ParseOptions) -> Result<ResumeDocument> {
    Ok(ResumeParser::new(options)?.parse(text))
}

/// Segment a UTF-8 text file.
///
/// # Example
///
/// ```no_run
/// use resumark::parse_file;
///
/// let doc = parse_file("resume.txt").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    ResumeParser::default().parse_file(path)
}

/// Segment a UTF-8 text file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ResumeDocument> {
    ResumeParser::new(options)?.parse_file(path)
}

/// Segment UTF-8 bytes.
pub fn parse_bytes(data: &[u8]) -> Result<ResumeDocument> {
    ResumeParser::default().parse_bytes(data)
}

/// Segment UTF-8 bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<ResumeDocument> {
    ResumeParser::new(options)?.parse_bytes(data)
}

/// Segment text read from a reader.
///
/// # Example
///
/// ```no_run
/// use resumark::parse_reader;
///
/// let doc = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ResumeDocument> {
    ResumeParser::default().parse_reader(reader)
}

/// Segment text read from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<ResumeDocument> {
    ResumeParser::new(options)?.parse_reader(reader)
}

/// Builder for segmenting and rendering resumes.
///
/// # Example
///
/// ```
/// use resumark::Resumark;
///
/// let markdown = Resumark::new()
///     .with_region("India")
///     .with_list_marker('*')
///     .parse_text("Skills\nRust\nGo lang")?
///     .to_markdown()?;
/// assert_eq!(markdown, "## SKILLS\n\n* Rust\n* Go lang");
/// # Ok::<(), resumark::Error>(())
/// ```
pub struct Resumark {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Resumark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the region used by location patterns.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_region(region);
        self
    }

    /// Recognize an additional section heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_heading(heading);
        self
    }

    /// Skip contact block extraction.
    pub fn without_contacts(mut self) -> Self {
        self.parse_options = self.parse_options.without_contacts();
        self
    }

    /// Map foreign bullet glyphs to `•` during normalization.
    pub fn with_standardized_bullets(mut self) -> Self {
        self.parse_options.normalize = self
            .parse_options
            .normalize
            .with_standardized_bullets(true);
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Set the list marker used by renderers.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Set the Markdown heading level.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_heading_level(level);
        self
    }

    /// Wrap sections in page-break-avoiding blocks.
    pub fn with_page_breaks(mut self) -> Self {
        self.render_options = self.render_options.with_page_break_hints(true);
        self
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Replace the parse options wholesale.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the render options wholesale.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Segment text and return a result wrapper.
    pub fn parse_text(self, text: &str) -> Result<ResumarkResult> {
        let parser = ResumeParser::new(self.parse_options)?;
        Ok(ResumarkResult {
            document: parser.parse(text),
            render_options: self.render_options,
        })
    }

    /// Segment a UTF-8 text file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<ResumarkResult> {
        let parser = ResumeParser::new(self.parse_options)?;
        Ok(ResumarkResult {
            document: parser.parse_file(path)?,
            render_options: self.render_options,
        })
    }

    /// Segment UTF-8 bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<ResumarkResult> {
        let parser = ResumeParser::new(self.parse_options)?;
        Ok(ResumarkResult {
            document: parser.parse_bytes(data)?,
            render_options: self.render_options,
        })
    }
}

impl Default for Resumark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of segmenting a resume.
pub struct ResumarkResult {
    /// The segmented document
    pub document: ResumeDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl ResumarkResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resumark_builder() {
        let builder = Resumark::new()
            .with_region("Germany")
            .with_heading("Publications")
            .with_frontmatter()
            .sequential();

        assert_eq!(builder.parse_options.region, "Germany");
        assert_eq!(builder.parse_options.extra_headings, vec!["Publications"]);
        assert!(builder.render_options.include_frontmatter);
        assert!(!builder.parse_options.parallel);
    }

    #[test]
    fn test_resumark_builder_default() {
        let builder = Resumark::default();
        assert!(!builder.render_options.include_frontmatter);
        assert!(builder.parse_options.extract_contacts);
    }

    #[test]
    fn test_resumark_custom_heading() {
        let result = Resumark::new()
            .with_heading("Publications")
            .parse_text("Publications\nRust in Action")
            .unwrap();
        assert_eq!(result.document().titles(), vec!["Publications"]);
    }

    #[test]
    fn test_resumark_outputs() {
        let result = Resumark::new()
            .with_heading_level(3)
            .parse_text("Education\nMIT 2020")
            .unwrap();

        assert_eq!(result.to_markdown().unwrap(), "### EDUCATION\n\n- MIT 2020");
        assert_eq!(result.to_text().unwrap(), "EDUCATION\n- MIT 2020");
        assert!(result
            .to_json(JsonFormat::Compact)
            .unwrap()
            .contains("\"Education\""));
    }

    #[test]
    fn test_resumark_parse_bytes_invalid_utf8() {
        let result = Resumark::new().parse_bytes(&[0xc3, 0x28]);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_parse_text_empty() {
        assert!(parse_text("").is_empty());
    }

    #[test]
    fn test_parse_text_with_invalid_rule() {
        let options = ParseOptions::new()
            .with_normalize(NormalizeOptions::new().with_rule(RewriteRule::new("broken", "(", "")));
        let err = parse_text_with_options("Skills\nRust", options).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_bytes_and_reader() {
        let doc = parse_bytes(b"Skills\nRust").unwrap();
        assert_eq!(doc.titles(), vec!["Skills"]);

        let doc = parse_reader(&b"Education\nMIT 2020"[..]).unwrap();
        assert_eq!(doc.titles(), vec!["Education"]);
    }

    #[test]
    fn test_json_format_default() {
        assert_eq!(JsonFormat::default(), JsonFormat::Pretty);
    }
}
