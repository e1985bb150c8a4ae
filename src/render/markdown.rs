//! Markdown rendering for segmented resumes.

use crate::error::Result;
use crate::model::{ResumeDocument, Section};
use crate::parser::LIST_PREFIX;

use super::{RenderOptions, RenderResult, SegmentationStats};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &ResumeDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &ResumeDocument, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
///
/// Each section becomes a heading followed by its list. With page-break
/// hints enabled, sections marked keep-together are wrapped in an HTML
/// block carrying `break-inside: avoid`.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(self, doc: &ResumeDocument) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    ///
    /// Word and character counts are recomputed from the rendered output.
    pub fn render_with_stats(self, doc: &ResumeDocument) -> Result<RenderResult> {
        let content = self.render_internal(doc)?;

        let mut stats = SegmentationStats {
            word_count: 0,
            char_count: 0,
            ..doc.stats.clone()
        };
        stats.count_text(&content);

        Ok(RenderResult::new(content, doc.metadata.clone(), stats))
    }

    fn render_internal(&self, doc: &ResumeDocument) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for section in doc.iter() {
            self.render_section(&mut output, section);
        }

        Ok(output.trim().to_string())
    }

    fn render_section(&self, output: &mut String, section: &Section) {
        let wrap = self.options.page_break_hints && section.keep_together;

        if wrap {
            output.push_str(&format!(
                "<section class=\"resume-section {}\" style=\"break-inside: avoid\">\n\n",
                self.options.text_size.css_class()
            ));
        }

        output.push_str(&"#".repeat(self.options.heading_level as usize));
        output.push(' ');
        output.push_str(&self.options.display_title(&section.title));
        output.push_str("\n\n");

        for line in &section.lines {
            output.push_str(&render_list_line(line, self.options.list_marker));
            output.push('\n');
        }
        output.push('\n');

        if wrap {
            output.push_str("</section>\n\n");
        }
    }
}

/// Re-mark a formatted line with `marker`.
pub(crate) fn render_list_line(line: &str, marker: char) -> String {
    match line.strip_prefix(LIST_PREFIX) {
        Some(rest) => format!("{} {}", marker, rest),
        None => format!("{} {}", marker, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CONTACT_INFORMATION;

    fn sample() -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        doc.sections
            .entry(CONTACT_INFORMATION)
            .push("- jane@example.com");
        doc.sections.entry("Education").push("- MIT 2020");
        doc.sections.entry("Skills").push("- Rust");
        doc.sections.entry("Skills").push("- Go lang");
        doc.refresh_metadata();
        doc
    }

    #[test]
    fn test_markdown_sections_in_order() {
        let md = to_markdown(&sample(), &RenderOptions::default()).unwrap();
        assert_eq!(
            md,
            "## CONTACT INFORMATION\n\n- jane@example.com\n\n## EDUCATION\n\n- MIT 2020\n\n## SKILLS\n\n- Rust\n- Go lang"
        );
    }

    #[test]
    fn test_markdown_list_marker_and_level() {
        let options = RenderOptions::new()
            .with_list_marker('*')
            .with_heading_level(3)
            .with_uppercase_headings(false);
        let md = to_markdown(&sample(), &options).unwrap();
        assert!(md.contains("### Education\n\n* MIT 2020"));
        assert!(!md.contains("- Rust"));
    }

    #[test]
    fn test_markdown_page_break_hints() {
        let options = RenderOptions::new().with_page_break_hints(true);
        let md = to_markdown(&sample(), &options).unwrap();
        assert_eq!(md.matches("break-inside: avoid").count(), 3);
        assert!(md.contains("resume-section text-sm"));
        assert!(md.ends_with("</section>"));
    }

    #[test]
    fn test_markdown_frontmatter() {
        let options = RenderOptions::new().with_frontmatter(true);
        let md = to_markdown(&sample(), &options).unwrap();
        assert!(md.starts_with("---\n"));
        assert!(md.contains("sections: 3"));
    }

    #[test]
    fn test_markdown_with_stats() {
        let result = to_markdown_with_stats(&sample(), &RenderOptions::default()).unwrap();
        assert!(result.stats.word_count > 0);
        assert_eq!(result.metadata.section_count, 3);
    }

    #[test]
    fn test_markdown_stats_follow_rendered_output() {
        let doc = sample();
        let options = RenderOptions::new().with_page_break_hints(true);
        let result = to_markdown_with_stats(&doc, &options).unwrap();

        let mut expected = SegmentationStats::new();
        expected.count_text(&result.content);
        assert_eq!(result.stats.word_count, expected.word_count);
        assert_eq!(result.stats.char_count, expected.char_count);
        assert!(result.stats.word_count > doc.stats.word_count);
    }

    #[test]
    fn test_empty_document() {
        let md = to_markdown(&ResumeDocument::new(), &RenderOptions::default()).unwrap();
        assert!(md.is_empty());
    }
}
