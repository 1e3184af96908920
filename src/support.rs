//! Composed language support objects and the Ruby factory.
//!
//! A [`LanguageSupport`] is the handle a host activates per document. It
//! closes over the process-wide language definition and carries the
//! bracket-matching configuration; the parser itself is built lazily on the
//! first highlight request, so creating a support object does no work.

use crate::brackets::{BracketConfig, BracketMatch};
use crate::comment;
use crate::highlight::{Highlighter, StyledSpan};
use crate::language::{LanguageDefinition, ruby_language};
use crate::Result;
use once_cell::sync::OnceCell;

/// A language definition bundled with editor-facing behaviors.
///
/// Cheap to create, holds no resources, and shares no mutable state with
/// other instances - concurrent factory calls are safe by construction.
pub struct LanguageSupport {
    definition: &'static LanguageDefinition,
    brackets: BracketConfig,
    highlighter: OnceCell<Highlighter>,
}

impl LanguageSupport {
    /// Compose a support object from a definition and a bracket config
    pub fn new(definition: &'static LanguageDefinition, brackets: BracketConfig) -> Self {
        Self {
            definition,
            brackets,
            highlighter: OnceCell::new(),
        }
    }

    /// The shared language definition
    pub fn definition(&self) -> &'static LanguageDefinition {
        self.definition
    }

    /// The bracket-matching configuration
    pub fn brackets(&self) -> &BracketConfig {
        &self.brackets
    }

    /// Whether the lazy parser has been built yet
    pub fn parser_initialized(&self) -> bool {
        self.highlighter.get().is_some()
    }

    fn highlighter(&self) -> Result<&Highlighter> {
        self.highlighter
            .get_or_try_init(|| Highlighter::new(self.definition))
    }

    /// Highlight `source` according to the definition's style table
    pub fn highlight(&self, source: &str) -> Result<Vec<StyledSpan>> {
        self.highlighter()?.highlight(source)
    }

    /// Find the partner of the bracket at `offset`, honoring the restricted
    /// delimiter set
    pub fn matching_bracket(&self, text: &str, offset: usize) -> Option<BracketMatch> {
        self.brackets.matching_bracket(text, offset)
    }

    /// Toggle a line comment using the language's comment token.
    ///
    /// Lines come back unchanged when the language declares no line-comment
    /// token.
    pub fn toggle_line_comment(&self, line: &str) -> String {
        match self.definition.line_comment_token() {
            Some(token) => comment::toggle_line_comment(line, token),
            None => line.to_string(),
        }
    }
}

/// Ruby language support.
///
/// Returns a fresh support object on every call. Bracket matching is limited
/// to braces, the only delimiters the grammar treats as structural brackets.
pub fn ruby() -> LanguageSupport {
    LanguageSupport::new(ruby_language(), BracketConfig::from_chars("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::HighlightTag;

    #[test]
    fn test_factory_yields_distinct_equal_instances() {
        let a = ruby();
        let b = ruby();

        assert!(!std::ptr::eq(&a, &b));
        // same shared definition, same observable configuration
        assert!(std::ptr::eq(a.definition(), b.definition()));
        assert_eq!(a.brackets(), b.brackets());
        assert_eq!(
            a.definition().line_comment_token(),
            b.definition().line_comment_token()
        );
    }

    #[test]
    fn test_factory_does_no_work() {
        let support = ruby();
        assert!(!support.parser_initialized());

        support.highlight("foo = 1").unwrap();
        assert!(support.parser_initialized());
    }

    #[test]
    fn test_bracket_restriction() {
        let support = ruby();
        let text = "items.each(index) { |i| use(i) }";

        let open_paren = text.find('(').unwrap();
        assert_eq!(support.matching_bracket(text, open_paren), None);

        let open_brace = text.find('{').unwrap();
        let close_brace = text.rfind('}').unwrap();
        let m = support.matching_bracket(text, open_brace).unwrap();
        assert_eq!((m.open, m.close), (open_brace, close_brace));
    }

    #[test]
    fn test_comment_toggle_roundtrip() {
        let support = ruby();
        let original = "total += price * quantity";
        let once = support.toggle_line_comment(original);
        assert_eq!(once, "# total += price * quantity");
        assert_eq!(support.toggle_line_comment(&once), original);
    }

    #[test]
    fn test_highlight_through_support() {
        let support = ruby();
        let spans = support.highlight("name = value").unwrap();
        assert!(
            spans
                .iter()
                .any(|s| s.tag == HighlightTag::VariableDefinition)
        );
    }
}
