//! Coverage-suppression matchers.
//!
//! A file is flagged when either comment form carries an `istanbul ignore`
//! directive. Both matchers run over the whole file content, case-insensitively.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// `/* istanbul ignore ... */`, stopping at the first closing delimiter.
static BLOCK_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)/\*\s*istanbul\s+ignore.*?\*/").unwrap());

/// `// istanbul ignore`, the marker alone is enough.
static LINE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)//\s*istanbul\s+ignore").unwrap());

/// One form of suppression directive.
pub trait SuppressionMatcher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Byte range of the first directive in `content`, if any.
    fn find(&self, content: &str) -> Option<Range<usize>>;

    fn is_match(&self, content: &str) -> bool {
        self.find(content).is_some()
    }
}

/// Block-comment form. The match ends at the first `*/` after the directive,
/// so later comments in the file never widen it. Unterminated comments do
/// not match.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockCommentMatcher;

impl SuppressionMatcher for BlockCommentMatcher {
    fn name(&self) -> &'static str {
        "block-comment"
    }

    fn find(&self, content: &str) -> Option<Range<usize>> {
        BLOCK_DIRECTIVE.find(content).map(|m| m.range())
    }
}

/// Line-comment form. Only the marker is matched, not the rest of the line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCommentMatcher;

impl SuppressionMatcher for LineCommentMatcher {
    fn name(&self) -> &'static str {
        "line-comment"
    }

    fn find(&self, content: &str) -> Option<Range<usize>> {
        LINE_DIRECTIVE.find(content).map(|m| m.range())
    }
}

/// Logical OR over a set of matchers.
pub struct SuppressionPattern {
    matchers: Vec<Box<dyn SuppressionMatcher>>,
}

impl SuppressionPattern {
    /// Pattern built from the given matchers.
    pub fn new(matchers: Vec<Box<dyn SuppressionMatcher>>) -> Self {
        Self { matchers }
    }

    /// True if any matcher finds a directive.
    pub fn is_match(&self, content: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(content))
    }

    /// Name and range of the first matcher that fires, in matcher order.
    pub fn first_match(&self, content: &str) -> Option<(&'static str, Range<usize>)> {
        self.matchers
            .iter()
            .find_map(|m| m.find(content).map(|range| (m.name(), range)))
    }
}

impl Default for SuppressionPattern {
    fn default() -> Self {
        Self::new(vec![Box::new(BlockCommentMatcher), Box::new(LineCommentMatcher)])
    }
}

impl std::fmt::Debug for SuppressionPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.matchers.iter().map(|m| m.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_directive_detected() {
        assert!(BlockCommentMatcher.is_match("const a = 1;\n/* istanbul ignore next */\nfoo();"));
        assert!(BlockCommentMatcher.is_match("/* istanbul ignore if: unreachable in node */"));
    }

    #[test]
    fn test_block_directive_spans_lines() {
        let src = "/* istanbul ignore next\n   legacy branch,\n   see #412 */\nfunction f() {}";
        assert!(BlockCommentMatcher.is_match(src));
    }

    #[test]
    fn test_block_directive_stops_at_first_terminator() {
        let src = "/* istanbul ignore next */ code(); /* another */";
        let range = BlockCommentMatcher.find(src).unwrap();
        assert_eq!(&src[range], "/* istanbul ignore next */");
    }

    #[test]
    fn test_unterminated_block_does_not_match() {
        assert!(!BlockCommentMatcher.is_match("/* istanbul ignore next\nfoo();"));
    }

    #[test]
    fn test_line_directive_detected() {
        assert!(LineCommentMatcher.is_match("// istanbul ignore else"));
        assert!(LineCommentMatcher.is_match("if (x) { // istanbul ignore next -- trailing words"));
        assert!(LineCommentMatcher.is_match("//istanbul   ignore"));
    }

    #[test]
    fn test_line_directive_matches_marker_only() {
        let src = "x(); // istanbul ignore else because reasons";
        let range = LineCommentMatcher.find(src).unwrap();
        assert_eq!(&src[range], "// istanbul ignore");
    }

    #[test]
    fn test_istanbul_without_ignore() {
        let pattern = SuppressionPattern::default();
        assert!(!pattern.is_match("// istanbul is a tool"));
        assert!(!pattern.is_match("/* istanbul reports coverage */"));
        assert!(!pattern.is_match("// istanbulignore"));
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = SuppressionPattern::default();
        assert!(pattern.is_match("/* ISTANBUL IGNORE NEXT */"));
        assert!(pattern.is_match("// Istanbul Ignore Else"));
    }

    #[test]
    fn test_first_match_reports_form() {
        let pattern = SuppressionPattern::default();
        let (name, _) = pattern.first_match("// istanbul ignore next").unwrap();
        assert_eq!(name, "line-comment");
        let (name, _) = pattern.first_match("/* istanbul ignore next */").unwrap();
        assert_eq!(name, "block-comment");
        assert!(pattern.first_match("export const x = 1;").is_none());
    }
}
