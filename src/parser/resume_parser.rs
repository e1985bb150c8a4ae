//! Resume parser: normalization, segmentation, contact extraction, fallback.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::{ResumeDocument, Section, RESUME_CONTENT};
use crate::render::SegmentationStats;

use super::contact::{ContactExtractor, ContactOutcome};
use super::heading::HeadingClassifier;
use super::list_item::format_list_item;
use super::normalizer::{count_input_lines, Normalizer};
use super::options::ParseOptions;
use super::segmenter::{Segmentation, SectionSegmenter};

/// Turns raw extracted text into a sectioned [`ResumeDocument`].
///
/// Building the parser compiles every configured pattern, so it is the
/// only fallible step. Parsing itself accepts any text.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    options: ParseOptions,
    normalizer: Normalizer,
    segmenter: SectionSegmenter,
    contacts: Option<ContactExtractor>,
}

impl ResumeParser {
    /// Create a parser.
    pub fn new(options: ParseOptions) -> Result<Self> {
        let normalizer = Normalizer::new(options.normalize.clone())?;
        let classifier = HeadingClassifier::new(&options)?;
        let segmenter = SectionSegmenter::new(classifier, options.min_content_len);
        let contacts = if options.extract_contacts {
            Some(ContactExtractor::new(&options.region)?)
        } else {
            None
        };

        Ok(Self {
            options,
            normalizer,
            segmenter,
            contacts,
        })
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Segment a resume.
    pub fn parse(&self, text: &str) -> ResumeDocument {
        let lines = self.normalizer.normalize(text);

        let Segmentation {
            mut sections,
            headings,
            content_lines,
            dropped_short,
            pruned_empty,
        } = self.segmenter.segment(&lines);

        let contact = match &self.contacts {
            Some(extractor) => extractor.apply(&lines, &mut sections),
            None => ContactOutcome::default(),
        };

        let used_fallback = sections.is_empty() && !lines.is_empty();
        if used_fallback {
            log::debug!("No sections found; using single '{}' bucket", RESUME_CONTENT);
            let all = lines.iter().map(|l| format_list_item(l)).collect();
            sections.insert_first(Section::with_lines(RESUME_CONTENT, all));
        }

        let mut stats = SegmentationStats {
            input_line_count: count_input_lines(text) as u32,
            line_count: lines.len() as u32,
            dropped_line_count: dropped_short as u32,
            vocabulary_heading_count: headings.vocabulary as u32,
            date_range_heading_count: headings.date_range as u32,
            location_heading_count: headings.location_followed as u32,
            section_count: sections.len() as u32,
            content_line_count: content_lines as u32,
            contact_line_count: contact.captured as u32,
            duplicate_contact_count: contact.deduplicated as u32,
            pruned_section_count: pruned_empty as u32,
            used_fallback,
            ..Default::default()
        };
        for section in sections.iter() {
            stats.count_text(&section.markdown_list());
        }

        let mut doc = ResumeDocument {
            sections,
            lines,
            stats,
            ..Default::default()
        };
        doc.refresh_metadata();
        doc
    }

    /// Segment a resume, recording where it came from.
    pub fn parse_named(&self, text: &str, source: impl Into<String>) -> ResumeDocument {
        let mut doc = self.parse(text);
        doc.metadata.source = Some(source.into());
        doc
    }

    /// Segment UTF-8 bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<ResumeDocument> {
        let text = std::str::from_utf8(data)?;
        Ok(self.parse(text))
    }

    /// Segment everything readable from `reader`.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<ResumeDocument> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data)
    }

    /// Segment a UTF-8 text file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeDocument> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let mut doc = self.parse_bytes(&data)?;
        doc.metadata.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(doc)
    }

    /// Segment many independent resumes.
    ///
    /// Output order matches input order. Runs on the rayon pool when the
    /// `parallel` feature is enabled and the options allow it.
    pub fn parse_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<ResumeDocument> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if self.options.parallel {
                return texts.par_iter().map(|t| self.parse(t.as_ref())).collect();
            }
        }

        texts.iter().map(|t| self.parse(t.as_ref())).collect()
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self {
            options: ParseOptions::default(),
            normalizer: Normalizer::default(),
            segmenter: SectionSegmenter::default(),
            contacts: Some(ContactExtractor::default()),
        }
    }
}
