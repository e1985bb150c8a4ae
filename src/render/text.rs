//! Plain text rendering for segmented resumes.

use crate::error::Result;
use crate::model::ResumeDocument;

use super::markdown::render_list_line;
use super::RenderOptions;

/// Convert a document to plain text.
///
/// Titles stand on their own line, followed by the section's list lines.
/// Sections are separated by a blank line.
pub fn to_text(doc: &ResumeDocument, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for section in doc.iter() {
        output.push_str(&options.display_title(&section.title));
        output.push('\n');
        for line in &section.lines {
            output.push_str(&render_list_line(line, options.list_marker));
            output.push('\n');
        }
        output.push('\n');
    }

    Ok(output.trim().to_string())
}
