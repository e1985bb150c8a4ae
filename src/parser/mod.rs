//! Resume text parsing module.
//!
//! Raw text flows through [`Normalizer`] → [`SectionSegmenter`] →
//! [`ContactExtractor`] → fallback, orchestrated by [`ResumeParser`].

mod contact;
mod heading;
mod list_item;
mod normalizer;
mod options;
mod resume_parser;
mod segmenter;

pub use contact::{ContactExtractor, ContactKind, ContactLine, ContactOutcome};
pub use heading::{HeadingClassifier, LineClass, DEFAULT_VOCABULARY};
pub use list_item::{comparison_key, format_list_item, BULLET, LIST_PREFIX};
pub use normalizer::{normalize, Normalizer, RewriteRule};
pub use options::{NormalizeOptions, ParseOptions, DEFAULT_REGION};
pub use resume_parser::ResumeParser;
pub use segmenter::{HeadingCounts, ScanState, SectionSegmenter, Segmentation};
