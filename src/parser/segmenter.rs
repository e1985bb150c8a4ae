//! Section segmentation.
//!
//! A single pass over normalized lines. The scan state is either "no
//! section yet" or "inside section T"; headings move to a (possibly
//! already seen) section, content lines are appended to the current one.

use crate::model::{SectionMap, RESUME_CONTENT};

use super::heading::{HeadingClassifier, LineClass};
use super::list_item::format_list_item;

/// Scan state carried from line to line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// No heading seen yet; content goes to the fallback bucket
    NoActiveSection,
    /// Content goes to the named section
    InSection(String),
}

impl ScanState {
    fn target(&self) -> &str {
        match self {
            ScanState::NoActiveSection => RESUME_CONTENT,
            ScanState::InSection(title) => title,
        }
    }
}

/// Heading counts by rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts {
    /// Lines matching the heading vocabulary
    pub vocabulary: usize,
    /// Lines starting with a year or month range
    pub date_range: usize,
    /// Month lines following a region location line
    pub location_followed: usize,
}

impl HeadingCounts {
    /// Total headings of any kind.
    pub fn total(&self) -> usize {
        self.vocabulary + self.date_range + self.location_followed
    }

    fn record(&mut self, class: &LineClass) {
        match class {
            LineClass::VocabularyHeading(_) => self.vocabulary += 1,
            LineClass::DateRangeHeading => self.date_range += 1,
            LineClass::LocationFollowedHeading => self.location_followed += 1,
            LineClass::PlainContent => {}
        }
    }
}

/// Output of a segmentation pass.
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    /// Non-empty sections in first-appearance order
    pub sections: SectionMap,
    /// Headings found, by rule
    pub headings: HeadingCounts,
    /// Content lines appended to some section
    pub content_lines: usize,
    /// Lines dropped as too short
    pub dropped_short: usize,
    /// Sections removed because nothing followed their heading
    pub pruned_empty: usize,
}

/// Groups normalized lines under their headings.
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    classifier: HeadingClassifier,
    min_content_len: usize,
}

impl SectionSegmenter {
    /// Create a segmenter.
    ///
    /// Content lines of `min_content_len` characters or fewer are dropped.
    pub fn new(classifier: HeadingClassifier, min_content_len: usize) -> Self {
        Self {
            classifier,
            min_content_len,
        }
    }

    /// The heading classifier in use.
    pub fn classifier(&self) -> &HeadingClassifier {
        &self.classifier
    }

    /// Segment `lines` into sections.
    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> Segmentation {
        let mut acc = Segmentation::default();

        let mut state = ScanState::NoActiveSection;
        for (idx, line) in lines.iter().enumerate() {
            let previous = idx.checked_sub(1).map(|p| lines[p].as_ref());
            state = self.step(state, previous, line.as_ref(), &mut acc);
        }

        acc.pruned_empty = acc.sections.retain_non_empty();
        log::debug!(
            "Segmented {} lines into {} sections ({} headings, {} dropped)",
            lines.len(),
            acc.sections.len(),
            acc.headings.total(),
            acc.dropped_short
        );
        acc
    }

    /// Advance the scan by one line.
    pub fn step(
        &self,
        state: ScanState,
        previous: Option<&str>,
        line: &str,
        acc: &mut Segmentation,
    ) -> ScanState {
        let class = self.classifier.classify(line, previous);
        log::trace!("{:?}: {}", class, line);

        if let Some(title) = self.classifier.title_for(line, &class) {
            acc.headings.record(&class);
            acc.sections.entry(&title);
            return ScanState::InSection(title);
        }

        if line.chars().count() > self.min_content_len {
            acc.sections
                .entry(state.target())
                .push(format_list_item(line));
            acc.content_lines += 1;
        } else {
            acc.dropped_short += 1;
        }
        state
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new(HeadingClassifier::default(), 2)
    }
}
