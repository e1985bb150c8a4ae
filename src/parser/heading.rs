//! Heading detection and title derivation.
//!
//! Every normalized line is classified by a fixed, prioritized rule list:
//!
//! 1. a known section name at the start of the line,
//! 2. a Title Case phrase followed by a year range (`Acme Corp 2023 - Present`),
//! 3. a `Month Year - Present` line directly after a `Place, Region` line.
//!
//! Anything else is content. Rules are tried in that order and the first
//! hit wins; there is no further disambiguation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

use super::options::{ParseOptions, DEFAULT_REGION};

/// Built-in section names, as regex fragments, in priority order.
///
/// Alternation is leftmost-first, so an earlier entry shadows a later one
/// that starts with the same words.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "Summary",
    "Professional Summary",
    "Education",
    "Work Experience",
    "Experience",
    "Work History",
    "Skills?",
    "Technical Skills?",
    "Projects?",
    "Certifications?",
    "References?",
    "Contact Information",
    "Personal Information",
    "Profile",
    "Accomplishments?",
    "Achievements?",
    "Community",
    "Community Leaders?",
    r"Fetch\.ai Community Leader.*",
    "MeerutCodeHub Community",
];

/// Number of leading words used as the title of a non-vocabulary heading.
const GENERATED_TITLE_WORDS: usize = 3;

static DEFAULT_VOCABULARY_RE: Lazy<Regex> =
    Lazy::new(|| build_vocabulary(&[]).unwrap());

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z\s]+\s+\d{4}\s*-\s*(?:Present|\d{4})").unwrap()
});

static MONTH_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+\s+\d{4}\s*-\s*(?:Present|\d{4})").unwrap());

static DEFAULT_LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| build_location(DEFAULT_REGION).unwrap());

/// How a single line was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Starts with a known section name (the matched text)
    VocabularyHeading(String),
    /// Title Case words followed by a year range
    DateRangeHeading,
    /// A date range directly after a `Place, Region` line
    LocationFollowedHeading,
    /// Ordinary content
    PlainContent,
}

impl LineClass {
    /// Check if this class starts a new section.
    pub fn is_heading(&self) -> bool {
        !matches!(self, LineClass::PlainContent)
    }
}

/// Classifies lines and derives section titles.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    vocabulary: Regex,
    location_line: Regex,
    brand_exceptions: Vec<(String, String)>,
}

impl HeadingClassifier {
    /// Build a classifier for the given options.
    pub fn new(options: &ParseOptions) -> Result<Self> {
        let vocabulary = if options.extra_headings.is_empty() {
            DEFAULT_VOCABULARY_RE.clone()
        } else {
            build_vocabulary(&options.extra_headings)?
        };
        let location_line = if options.region == DEFAULT_REGION {
            DEFAULT_LOCATION_RE.clone()
        } else {
            build_location(&options.region)?
        };

        Ok(Self {
            vocabulary,
            location_line,
            brand_exceptions: options.brand_exceptions.clone(),
        })
    }

    /// Classify `line`, given the line before it (if any).
    pub fn classify(&self, line: &str, previous: Option<&str>) -> LineClass {
        if let Some(caps) = self.vocabulary.captures(line) {
            return LineClass::VocabularyHeading(caps[1].to_string());
        }

        if DATE_RANGE_RE.is_match(line) {
            return LineClass::DateRangeHeading;
        }

        let after_location = previous.is_some_and(|prev| self.location_line.is_match(prev));
        if after_location && MONTH_RANGE_RE.is_match(line) {
            return LineClass::LocationFollowedHeading;
        }

        LineClass::PlainContent
    }

    /// Title for a heading line, or `None` for content.
    pub fn title_for(&self, line: &str, class: &LineClass) -> Option<String> {
        let raw = match class {
            LineClass::PlainContent => return None,
            LineClass::VocabularyHeading(matched) => matched.clone(),
            LineClass::DateRangeHeading | LineClass::LocationFollowedHeading => line
                .split_whitespace()
                .take(GENERATED_TITLE_WORDS)
                .collect::<Vec<_>>()
                .join(" "),
        };
        Some(self.title_case(&raw))
    }

    /// Capitalize each word, lowercase the rest, then restore brand spellings.
    pub fn title_case(&self, text: &str) -> String {
        let mut title = text
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        for (generic, canonical) in &self.brand_exceptions {
            title = title.replacen(generic.as_str(), canonical, 1);
        }
        title
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY_RE.clone(),
            location_line: DEFAULT_LOCATION_RE.clone(),
            brand_exceptions: ParseOptions::default().brand_exceptions,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn build_vocabulary(extra: &[String]) -> Result<Regex> {
    let alternatives = DEFAULT_VOCABULARY
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().map(|h| regex::escape(h.trim())))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)^({})", alternatives);
    Regex::new(&pattern).map_err(|e| Error::invalid_pattern("heading vocabulary", e))
}

fn build_location(region: &str) -> Result<Regex> {
    let pattern = format!(r"^[A-Z][a-zA-Z\s]+, {}$", regex::escape(region.trim()));
    Regex::new(&pattern).map_err(|e| Error::invalid_pattern("location line", e))
}
