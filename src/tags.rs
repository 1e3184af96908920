//! Semantic highlighting tags and the node-kind style table.
//!
//! Tags are grammar-independent categories a rendering layer maps to visual
//! styles. The [`StyleTable`] associates named syntax-node kinds with tags
//! declaratively; the highlighter drives behavior from the table, with no
//! per-kind branching code anywhere else.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Semantic highlighting tag.
///
/// Named after the role a node plays, not after the grammar that produced it,
/// so themes can style any language from one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightTag {
    /// Definition of a variable name
    VariableDefinition,
    /// Reference to an already-bound variable
    VariableReference,
    /// Language keyword
    Keyword,
    /// String literal
    String,
    /// Numeric literal
    Number,
    /// Comment text
    Comment,
    /// Constant or constant-like literal
    Constant,
    /// Function or method name
    Function,
    /// Punctuation, delimiters, brackets
    Punctuation,
}

impl HighlightTag {
    /// Get the scope-style name of the tag (e.g. `variable.definition`)
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightTag::VariableDefinition => "variable.definition",
            HighlightTag::VariableReference => "variable.reference",
            HighlightTag::Keyword => "keyword",
            HighlightTag::String => "string",
            HighlightTag::Number => "number",
            HighlightTag::Comment => "comment",
            HighlightTag::Constant => "constant",
            HighlightTag::Function => "function",
            HighlightTag::Punctuation => "punctuation",
        }
    }

    /// Get all highlight tags
    pub fn all() -> &'static [HighlightTag] {
        &[
            HighlightTag::VariableDefinition,
            HighlightTag::VariableReference,
            HighlightTag::Keyword,
            HighlightTag::String,
            HighlightTag::Number,
            HighlightTag::Comment,
            HighlightTag::Constant,
            HighlightTag::Function,
            HighlightTag::Punctuation,
        ]
    }
}

impl FromStr for HighlightTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "variable.definition" | "variable_definition" => Ok(HighlightTag::VariableDefinition),
            "variable.reference" | "variable_reference" | "variable" => {
                Ok(HighlightTag::VariableReference)
            }
            "keyword" => Ok(HighlightTag::Keyword),
            "string" => Ok(HighlightTag::String),
            "number" => Ok(HighlightTag::Number),
            "comment" => Ok(HighlightTag::Comment),
            "constant" => Ok(HighlightTag::Constant),
            "function" | "method" => Ok(HighlightTag::Function),
            "punctuation" | "delimiter" | "bracket" => Ok(HighlightTag::Punctuation),
            _ => Err(Error::UnknownTag(s.to_string())),
        }
    }
}

impl std::fmt::Display for HighlightTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declarative mapping from syntax-node kind names to highlight tags.
///
/// Keys that name no kind in the grammar are inert: the highlighter simply
/// never looks them up, matching how style tables behave in editor
/// frameworks. The table may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    rules: HashMap<String, HighlightTag>,
}

impl StyleTable {
    /// Create an empty style table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, consuming and returning the table for chaining
    pub fn with_rule(mut self, node_kind: &str, tag: HighlightTag) -> Self {
        self.rules.insert(node_kind.to_string(), tag);
        self
    }

    /// Look up the tag for a node kind, if one is declared
    pub fn tag_for(&self, node_kind: &str) -> Option<HighlightTag> {
        self.rules.get(node_kind).copied()
    }

    /// Whether the table declares no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of declared rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterate over `(node_kind, tag)` rules
    pub fn iter(&self) -> impl Iterator<Item = (&str, HighlightTag)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for tag in HighlightTag::all() {
            assert_eq!(tag.as_str().parse::<HighlightTag>().unwrap(), *tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!("sparkle".parse::<HighlightTag>().is_err());
    }

    #[test]
    fn test_style_table_lookup() {
        let table = StyleTable::new()
            .with_rule("identifier", HighlightTag::VariableDefinition)
            .with_rule("comment", HighlightTag::Comment);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.tag_for("identifier"),
            Some(HighlightTag::VariableDefinition)
        );
        // Keys the grammar never produces are simply inert
        assert_eq!(table.tag_for("no_such_kind"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = StyleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.tag_for("identifier"), None);
    }
}
