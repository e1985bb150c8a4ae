//! Rendering module for converting segmented resumes to output formats.

mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, TextSize};
pub use result::{RenderResult, SegmentationStats};
pub use text::to_text;
