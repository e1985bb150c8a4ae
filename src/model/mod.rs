//! Document model types for segmented resume content.
//!
//! This module defines the intermediate representation that sits between
//! segmentation and rendering: an insertion-ordered map of titled sections,
//! each holding list-formatted lines.

mod document;
mod section;

pub use document::{DocumentMetadata, ResumeDocument};
pub use section::{Section, SectionMap, CONTACT_INFORMATION, RESUME_CONTENT};
