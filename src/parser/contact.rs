//! Contact block extraction.
//!
//! The contact block is the run of lines at the very top of the document
//! that look like personal details. Scanning stops at the first line that
//! matches none of the patterns; a later email address is not contact info.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Section, SectionMap, CONTACT_INFORMATION, RESUME_CONTENT};

use super::list_item::{comparison_key, format_list_item};
use super::options::DEFAULT_REGION;

/// Kind of contact detail a line was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// `Jane Doe, India`
    NameLocation,
    /// `+919876543210`
    Phone,
    /// `jane@example.com`
    Email,
    /// `linkedin.com/in/jane-doe`
    LinkedIn,
    /// `https://github.com/jane`
    GitHub,
    /// `https://jane.vercel.app/`
    Portfolio,
}

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{10,12}$").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+/?$").unwrap()
});

static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https://github\.com/[\w-]+/?$").unwrap());

static PORTFOLIO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https://[\w-]+\.vercel\.app/?$").unwrap());

static DEFAULT_NAME_LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| build_name_location(DEFAULT_REGION).unwrap());

/// A line captured from the contact block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    /// The normalized source line
    pub text: String,
    /// Which pattern it matched first
    pub kind: ContactKind,
}

/// Outcome of applying the contact block to a section map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactOutcome {
    /// Number of contact lines captured
    pub captured: usize,
    /// Number of duplicates removed from the fallback bucket
    pub deduplicated: usize,
}

/// Recognizes the leading contact block.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    name_location: Regex,
}

impl ContactExtractor {
    /// Create an extractor whose name/location pattern ends in `region`.
    pub fn new(region: &str) -> Result<Self> {
        let name_location = if region == DEFAULT_REGION {
            DEFAULT_NAME_LOCATION_RE.clone()
        } else {
            build_name_location(region)?
        };
        Ok(Self { name_location })
    }

    /// Match a single line against the contact patterns, in fixed order.
    pub fn classify(&self, line: &str) -> Option<ContactKind> {
        let patterns: [(&Regex, ContactKind); 6] = [
            (&self.name_location, ContactKind::NameLocation),
            (&*PHONE_RE, ContactKind::Phone),
            (&*EMAIL_RE, ContactKind::Email),
            (&*LINKEDIN_RE, ContactKind::LinkedIn),
            (&*GITHUB_RE, ContactKind::GitHub),
            (&*PORTFOLIO_RE, ContactKind::Portfolio),
        ];
        patterns
            .iter()
            .find(|(re, _)| re.is_match(line))
            .map(|(_, kind)| *kind)
    }

    /// Collect the prefix run of contact lines.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ContactLine> {
        lines
            .iter()
            .map(|line| line.as_ref())
            .map_while(|line| {
                self.classify(line).map(|kind| ContactLine {
                    text: line.to_string(),
                    kind,
                })
            })
            .collect()
    }

    /// Scan `lines` and fold the contact block into `sections`.
    ///
    /// The contact section is placed first, replacing any existing one.
    /// Duplicates are removed from the fallback bucket only; named sections
    /// keep whatever their heading claimed.
    pub fn apply<S: AsRef<str>>(&self, lines: &[S], sections: &mut SectionMap) -> ContactOutcome {
        let contacts = self.scan(lines);
        if contacts.is_empty() {
            return ContactOutcome::default();
        }

        let formatted: Vec<String> = contacts.iter().map(|c| format_list_item(&c.text)).collect();
        let keys: Vec<&str> = formatted.iter().map(|l| comparison_key(l)).collect();

        let mut deduplicated = 0;
        if let Some(bucket) = sections.get_mut(RESUME_CONTENT) {
            let before = bucket.lines.len();
            bucket
                .lines
                .retain(|line| !keys.contains(&comparison_key(line)));
            deduplicated = before - bucket.lines.len();
            if bucket.is_empty() {
                sections.remove(RESUME_CONTENT);
            }
        }

        let captured = formatted.len();
        sections.insert_first(Section::with_lines(CONTACT_INFORMATION, formatted));
        log::debug!(
            "Contact block: {} lines captured, {} duplicates removed",
            captured,
            deduplicated
        );

        ContactOutcome {
            captured,
            deduplicated,
        }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self {
            name_location: DEFAULT_NAME_LOCATION_RE.clone(),
        }
    }
}

fn build_name_location(region: &str) -> Result<Regex> {
    let pattern = format!(r"^[\w\s]+\(?\w*\)?, {}$", regex::escape(region.trim()));
    Regex::new(&pattern).map_err(|e| Error::invalid_pattern("name/location line", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_patterns() {
        let extractor = ContactExtractor::default();
        let cases = [
            ("Jane Doe, India", Some(ContactKind::NameLocation)),
            ("Jane Doe (JD), India", Some(ContactKind::NameLocation)),
            ("+919876543210", Some(ContactKind::Phone)),
            ("9876543210", Some(ContactKind::Phone)),
            ("98765", None),
            ("jane.doe+cv@example.co.in", Some(ContactKind::Email)),
            ("linkedin.com/in/jane-doe", Some(ContactKind::LinkedIn)),
            ("https://www.LinkedIn.com/in/jane-doe/", Some(ContactKind::LinkedIn)),
            ("https://github.com/jane-doe", Some(ContactKind::GitHub)),
            ("https://jane.vercel.app/", Some(ContactKind::Portfolio)),
            ("Jane Doe, Germany", None),
            ("Education", None),
        ];
        for (line, expected) in cases {
            assert_eq!(extractor.classify(line), expected, "{line}");
        }
    }

    #[test]
    fn test_scan_is_prefix_run() {
        let extractor = ContactExtractor::default();
        let lines = [
            "Jane Doe, India",
            "jane@example.com",
            "Summary",
            "https://github.com/jane",
        ];
        let contacts = extractor.scan(&lines);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].kind, ContactKind::Email);
    }

    #[test]
    fn test_scan_stops_at_first_line() {
        let extractor = ContactExtractor::default();
        let lines = ["Summary", "jane@example.com"];
        assert!(extractor.scan(&lines).is_empty());
    }

    #[test]
    fn test_apply_dedups_fallback_bucket_only() {
        let extractor = ContactExtractor::default();
        let lines = ["Jane Doe, India", "jane@example.com", "Skills", "jane@example.com"];

        let mut sections = SectionMap::new();
        sections.entry(RESUME_CONTENT).push("- Jane Doe, India");
        sections.entry(RESUME_CONTENT).push("- jane@example.com");
        sections.entry("Skills").push("- jane@example.com");

        let outcome = extractor.apply(&lines, &mut sections);

        assert_eq!(outcome.captured, 2);
        assert_eq!(outcome.deduplicated, 2);
        assert_eq!(sections.titles(), vec![CONTACT_INFORMATION, "Skills"]);
        assert_eq!(
            sections.get(CONTACT_INFORMATION).unwrap().lines,
            vec!["- Jane Doe, India", "- jane@example.com"]
        );
        assert_eq!(sections.get("Skills").unwrap().lines, vec!["- jane@example.com"]);
    }

    #[test]
    fn test_apply_keeps_non_duplicate_fallback_lines() {
        let extractor = ContactExtractor::default();
        let lines = ["jane@example.com", "Built things"];

        let mut sections = SectionMap::new();
        sections.entry(RESUME_CONTENT).push("- jane@example.com");
        sections.entry(RESUME_CONTENT).push("- Built things");

        extractor.apply(&lines, &mut sections);

        assert_eq!(sections.titles(), vec![CONTACT_INFORMATION, RESUME_CONTENT]);
        assert_eq!(
            sections.get(RESUME_CONTENT).unwrap().lines,
            vec!["- Built things"]
        );
    }

    #[test]
    fn test_apply_without_contacts_is_noop() {
        let extractor = ContactExtractor::default();
        let mut sections = SectionMap::new();
        sections.entry(RESUME_CONTENT).push("- Hello there");

        let outcome = extractor.apply(&["Hello there"], &mut sections);
        assert_eq!(outcome, ContactOutcome::default());
        assert_eq!(sections.titles(), vec![RESUME_CONTENT]);
    }

    #[test]
    fn test_custom_region() {
        let extractor = ContactExtractor::new("Germany").unwrap();
        assert_eq!(
            extractor.classify("Jane Doe, Germany"),
            Some(ContactKind::NameLocation)
        );
        assert_eq!(extractor.classify("Jane Doe, India"), None);
    }
}
