//! Section types and the insertion-ordered section map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Title of the bucket that collects content seen before any heading.
pub const RESUME_CONTENT: &str = "Resume Content";

/// Title of the section built from the leading contact block.
pub const CONTACT_INFORMATION: &str = "Contact Information";

/// A titled group of list-formatted lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Title-cased section name
    pub title: String,

    /// Content lines, each already in `- text` list form
    pub lines: Vec<String>,

    /// Layout hint: the heading and its list should not be split across pages
    #[serde(default = "default_keep_together")]
    pub keep_together: bool,
}

fn default_keep_together() -> bool {
    true
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            keep_together: true,
        }
    }

    /// Create a section with the given lines.
    pub fn with_lines(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::new(title)
        }
    }

    /// Append a formatted line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Number of content lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the section has no content.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Content lines joined as a Markdown list.
    pub fn markdown_list(&self) -> String {
        self.lines.join("\n")
    }
}

/// Sections keyed by title, iterated in first-insertion order.
///
/// Titles are unique: inserting an existing title resolves to the
/// section already stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Section>", into = "Vec<Section>")]
pub struct SectionMap {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl SectionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the section with `title`, appending an empty one if absent.
    pub fn entry(&mut self, title: &str) -> &mut Section {
        let idx = match self.index.get(title) {
            Some(&idx) => idx,
            None => {
                self.sections.push(Section::new(title));
                let idx = self.sections.len() - 1;
                self.index.insert(title.to_string(), idx);
                idx
            }
        };
        &mut self.sections[idx]
    }

    /// Look up a section by title.
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.index.get(title).map(|&idx| &self.sections[idx])
    }

    /// Look up a section by title for modification.
    pub fn get_mut(&mut self, title: &str) -> Option<&mut Section> {
        match self.index.get(title) {
            Some(&idx) => Some(&mut self.sections[idx]),
            None => None,
        }
    }

    /// Check whether a section with `title` exists.
    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Remove a section, returning it if present.
    pub fn remove(&mut self, title: &str) -> Option<Section> {
        let idx = self.index.remove(title)?;
        let section = self.sections.remove(idx);
        self.reindex();
        Some(section)
    }

    /// Put `section` at the front, replacing any section with the same title.
    pub fn insert_first(&mut self, section: Section) {
        self.remove(&section.title);
        self.sections.insert(0, section);
        self.reindex();
    }

    /// Drop every section that has no lines. Returns how many were removed.
    pub fn retain_non_empty(&mut self) -> usize {
        let before = self.sections.len();
        self.sections.retain(|s| !s.is_empty());
        let removed = before - self.sections.len();
        if removed > 0 {
            self.reindex();
        }
        removed
    }

    /// Iterate sections in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Section titles in order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of content lines across all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    fn reindex(&mut self) {
        self.index = self
            .sections
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.title.clone(), idx))
            .collect();
    }
}

impl From<Vec<Section>> for SectionMap {
    fn from(sections: Vec<Section>) -> Self {
        let mut map = SectionMap::new();
        for section in sections {
            // Later duplicates fold into the first occurrence.
            map.entry(&section.title).lines.extend(section.lines);
        }
        map
    }
}

impl From<SectionMap> for Vec<Section> {
    fn from(map: SectionMap) -> Self {
        map.sections
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
