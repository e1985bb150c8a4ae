//! Repair pipeline for text coming out of PDF/DOC extraction.
//!
//! The normalizer is an ordered list of string rewrites. Later rules see the
//! output of earlier ones, so new artifacts are handled by appending a rule
//! rather than editing an existing one. After the rewrites the text is split
//! into trimmed, non-empty lines.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

use super::list_item::BULLET;
use super::options::NormalizeOptions;

/// A caller-supplied rewrite: every match of `pattern` becomes `replacement`.
///
/// `replacement` follows `regex` syntax, so `$1` refers to a capture group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    /// Rule name, used in diagnostics
    pub name: String,
    /// Regular expression to search for
    pub pattern: String,
    /// Replacement text
    pub replacement: String,
}

impl RewriteRule {
    /// Create a regex rule.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Create a rule that replaces one literal string with another.
    pub fn literal(name: impl Into<String>, from: &str, to: &str) -> Self {
        Self::new(name, regex::escape(from), to.replace('$', "$$"))
    }

    fn compile(&self) -> Result<CompiledRule> {
        let regex = Regex::new(&self.pattern)
            .map_err(|e| Error::invalid_pattern(format!("rewrite rule '{}'", self.name), e))?;
        Ok(CompiledRule {
            name: self.name.clone(),
            regex,
            replacement: self.replacement.clone(),
        })
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: String,
    regex: Regex,
    replacement: String,
}

impl CompiledRule {
    fn builtin(name: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            regex: Regex::new(pattern).unwrap(),
            replacement: replacement.to_string(),
        }
    }
}

/// Built-in repairs, in application order.
static BUILTIN_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    vec![
        // $100+$ → 100+
        CompiledRule::builtin("dollar-plus", r"\$(\d+)\+\$", "${1}+"),
        CompiledRule::builtin("fetch-ai", r"retcn\.al", "Fetch.ai"),
        CompiledRule::builtin("nextjs", r"NuExt\.js", "Next.js"),
        CompiledRule::builtin("center-dot", r"\$\\cdot\$", "•"),
        CompiledRule::builtin("stray-one", r"\$1\$", ""),
        CompiledRule::builtin("collaborated", r"Collabo- rated", "Collaborated"),
        // Horizontal whitespace only; line breaks carry structure.
        CompiledRule::builtin("whitespace", r"[^\S\n]+", " "),
    ]
});

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());

/// Raw line count with `\r\n` and lone `\r` treated as line breaks.
pub(crate) fn count_input_lines(text: &str) -> usize {
    LINE_BREAK_RE.replace_all(text, "\n").lines().count()
}

const FOREIGN_BULLETS: [char; 10] = ['●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻'];

/// Text normalizer.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
    extra_rules: Vec<CompiledRule>,
}

impl Normalizer {
    /// Create a normalizer, compiling any extra rules from `options`.
    pub fn new(options: NormalizeOptions) -> Result<Self> {
        let extra_rules = options
            .extra_rules
            .iter()
            .map(RewriteRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            options,
            extra_rules,
        })
    }

    /// Names of the active rules, in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        BUILTIN_RULES
            .iter()
            .chain(self.extra_rules.iter())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Apply the repair rules to `text` without splitting it.
    ///
    /// Passes repeat until the text stops changing, so the result is a
    /// fixpoint of the rule list (bounded by `max_passes`).
    pub fn normalize_text(&self, text: &str) -> String {
        let mut current = LINE_BREAK_RE.replace_all(text, "\n").into_owned();

        for _ in 0..self.options.max_passes {
            let next = self.apply_pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }

        if self.apply_pass(&current) != current {
            log::warn!(
                "Normalizer did not settle after {} passes",
                self.options.max_passes
            );
        }
        current
    }

    /// Normalize `text` into trimmed, non-empty lines.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lines: Vec<String> = self
            .normalize_text(text)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        log::debug!("Normalized into {} lines", lines.len());
        lines
    }

    fn apply_pass(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.options.standardize_bullets {
            result = result
                .chars()
                .map(|c| if FOREIGN_BULLETS.contains(&c) { BULLET } else { c })
                .collect();
        }

        for rule in BUILTIN_RULES.iter().chain(self.extra_rules.iter()) {
            if rule.regex.is_match(&result) {
                log::trace!("Applying rewrite rule '{}'", rule.name);
                result = rule
                    .regex
                    .replace_all(&result, rule.replacement.as_str())
                    .into_owned();
            }
        }

        result
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            options: NormalizeOptions::default(),
            extra_rules: Vec::new(),
        }
    }
}

/// Normalize `text` with the built-in rules.
pub fn normalize(text: &str) -> Vec<String> {
    Normalizer::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_plus() {
        assert_eq!(normalize("Served $100+$ clients"), vec!["Served 100+ clients"]);
    }

    #[test]
    fn test_brand_and_framework_fixes() {
        assert_eq!(
            normalize("Built on retcn.al with NuExt.js"),
            vec!["Built on Fetch.ai with Next.js"]
        );
    }

    #[test]
    fn test_center_dot_and_stray_one() {
        assert_eq!(normalize(r"$\cdot$ Rust $1$"), vec!["• Rust"]);
    }

    #[test]
    fn test_hyphen_split_rejoined() {
        assert_eq!(
            normalize("Collabo- rated with design"),
            vec!["Collaborated with design"]
        );
    }

    #[test]
    fn test_whitespace_collapsed_lines_kept() {
        let text = "  Education \t\n\n\r\nMIT   2020  \r\n   \n";
        assert_eq!(normalize(text), vec!["Education", "MIT 2020"]);
    }

    #[test]
    fn test_rules_chain_in_order() {
        // The hyphen fix only matches after whitespace collapse, which a
        // second pass provides.
        assert_eq!(normalize("Collabo-   rated"), vec!["Collaborated"]);
        // One removal exposes another artifact.
        assert_eq!(normalize("$$1$1$ done"), vec!["done"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Jane Doe, India\n$\\cdot$ Led   $100+$ users\n\n• retcn.al  Collabo- rated";
        let once = normalize(text);
        let twice = normalize(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_empty_lines() {
        for text in ["", "\n\n", " \t ", "$1$", "$1$\n  \n$1$"] {
            assert!(normalize(text).iter().all(|l| !l.is_empty()), "{text:?}");
        }
        assert!(normalize("$1$").is_empty());
    }

    #[test]
    fn test_standardize_bullets_opt_in() {
        assert_eq!(normalize("● Item"), vec!["● Item"]);

        let normalizer =
            Normalizer::new(NormalizeOptions::new().with_standardized_bullets(true)).unwrap();
        assert_eq!(normalizer.normalize("● Item\n▪ Other"), vec!["• Item", "• Other"]);
    }

    #[test]
    fn test_extra_rules_appended() {
        let options = NormalizeOptions::new()
            .with_rule(RewriteRule::literal("typescript", "TypeScrlpt", "TypeScript"))
            .with_rule(RewriteRule::new("years", r"(\d+)\s*yrs\b", "$1 years"));
        let normalizer = Normalizer::new(options).unwrap();

        assert_eq!(
            normalizer.normalize("TypeScrlpt for 3yrs"),
            vec!["TypeScript for 3 years"]
        );
        assert_eq!(normalizer.rule_names().last(), Some(&"years"));
    }

    #[test]
    fn test_literal_rule_escapes_dollar() {
        let options = NormalizeOptions::new().with_rule(RewriteRule::literal("usd", "USD", "$"));
        let normalizer = Normalizer::new(options).unwrap();
        assert_eq!(normalizer.normalize("5 USD"), vec!["5 $"]);
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let options = NormalizeOptions::new().with_rule(RewriteRule::new("bad", "(", ""));
        let err = Normalizer::new(options).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_nfc_stage() {
        let decomposed = "Re\u{0301}sume\u{0301}";
        assert_eq!(normalize(decomposed), vec!["R\u{00e9}sum\u{00e9}"]);
    }
}
