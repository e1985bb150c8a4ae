//! Parsing options and configuration.

use super::normalizer::RewriteRule;

/// Region used by the location patterns when none is configured.
pub const DEFAULT_REGION: &str = "India";

/// Options for the text normalizer.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form before the rewrite rules run
    pub normalize_unicode: bool,

    /// Standardize bullet characters (●, ○, ■ ... → •)
    pub standardize_bullets: bool,

    /// Caller rules, applied after the built-in ones
    pub extra_rules: Vec<RewriteRule>,

    /// Upper bound on rule-list passes while seeking a fixpoint
    pub max_passes: u8,
}

impl NormalizeOptions {
    /// Create new normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable bullet standardization.
    pub fn with_standardized_bullets(mut self, standardize: bool) -> Self {
        self.standardize_bullets = standardize;
        self
    }

    /// Append a rewrite rule.
    pub fn with_rule(mut self, rule: RewriteRule) -> Self {
        self.extra_rules.push(rule);
        self
    }

    /// Set the pass limit (at least 1).
    pub fn with_max_passes(mut self, passes: u8) -> Self {
        self.max_passes = passes.max(1);
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: false,
            extra_rules: Vec::new(),
            max_passes: 8,
        }
    }
}

/// Options for segmenting resume text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Text normalizer configuration
    pub normalize: NormalizeOptions,

    /// Location token closing name/location lines (e.g. "Jane Doe, India")
    pub region: String,

    /// Extra heading names, tried after the built-in vocabulary
    pub extra_headings: Vec<String>,

    /// Title-case exceptions restored after casing: (generic form, canonical form)
    pub brand_exceptions: Vec<(String, String)>,

    /// Content lines with at most this many characters are dropped as noise
    pub min_content_len: usize,

    /// Whether to pull the leading contact block into its own section
    pub extract_contacts: bool,

    /// Whether batch parsing may use multiple threads
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalizer options.
    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the location region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Add a heading name to the vocabulary.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.extra_headings.push(heading.into());
        self
    }

    /// Add a title-case exception.
    pub fn with_brand(mut self, generic: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.brand_exceptions.push((generic.into(), canonical.into()));
        self
    }

    /// Set the noise threshold for content lines.
    pub fn with_min_content_len(mut self, len: usize) -> Self {
        self.min_content_len = len;
        self
    }

    /// Disable contact block extraction.
    pub fn without_contacts(mut self) -> Self {
        self.extract_contacts = false;
        self
    }

    /// Disable parallel batch parsing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            region: DEFAULT_REGION.to_string(),
            extra_headings: Vec::new(),
            brand_exceptions: vec![("Fetch.ai".to_string(), "Fetch.AI".to_string())],
            min_content_len: 2,
            extract_contacts: true,
            parallel: true,
        }
    }
}
