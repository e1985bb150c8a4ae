//! Rendering options and configuration.

/// Options for rendering a segmented resume.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character to use for unordered list markers
    pub list_marker: char,

    /// Markdown heading level for section titles (1-6)
    pub heading_level: u8,

    /// Render section titles in upper case
    pub uppercase_headings: bool,

    /// Text size hint for downstream renderers
    pub text_size: TextSize,

    /// Wrap sections marked keep-together in a block that avoids page breaks
    pub page_break_hints: bool,

    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the heading level.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable upper-case section titles.
    pub fn with_uppercase_headings(mut self, uppercase: bool) -> Self {
        self.uppercase_headings = uppercase;
        self
    }

    /// Set the text size hint.
    pub fn with_text_size(mut self, size: TextSize) -> Self {
        self.text_size = size;
        self
    }

    /// Enable or disable page-break hints.
    pub fn with_page_break_hints(mut self, hints: bool) -> Self {
        self.page_break_hints = hints;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Title as it should appear in output.
    pub fn display_title(&self, title: &str) -> String {
        if self.uppercase_headings {
            title.to_uppercase()
        } else {
            title.to_string()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '-',
            heading_level: 2,
            uppercase_headings: true,
            text_size: TextSize::Small,
            page_break_hints: false,
            include_frontmatter: false,
        }
    }
}

/// Text size hint passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    /// Compact text (default)
    #[default]
    Small,
    /// Regular body text
    Base,
    /// Larger text
    Large,
}

impl TextSize {
    /// CSS utility class for this size.
    pub fn css_class(self) -> &'static str {
        match self {
            TextSize::Small => "text-sm",
            TextSize::Base => "text-base",
            TextSize::Large => "text-lg",
        }
    }

    /// Parse a size name ("sm", "base", "lg", ...).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(TextSize::Small),
            "base" | "normal" => Ok(TextSize::Base),
            "lg" | "large" => Ok(TextSize::Large),
            other => Err(format!("Unknown text size: {}", other)),
        }
    }
}
