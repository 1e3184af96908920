//! Language definitions.
//!
//! A [`LanguageDefinition`] is the immutable bundle a host needs to know about
//! a language: the opaque grammar handle, the style table, and the metadata.
//! It is constructed once per process and shared read-only by every
//! [`crate::LanguageSupport`] instance.

use crate::metadata::{CommentConfig, LanguageMetadata};
use crate::tags::{HighlightTag, StyleTable};
use once_cell::sync::Lazy;
use tree_sitter::Language;

/// Immutable language definition.
///
/// Never mutated after construction; lives for the process lifetime when
/// obtained through [`ruby_language`]. The grammar handle is referenced
/// read-only and is not validated here - a broken grammar surfaces when the
/// highlighter first tries to use it.
pub struct LanguageDefinition {
    language: Language,
    styles: StyleTable,
    metadata: LanguageMetadata,
}

impl std::fmt::Debug for LanguageDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the grammar handle is an opaque pointer, not worth printing
        f.debug_struct("LanguageDefinition")
            .field("styles", &self.styles)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl LanguageDefinition {
    /// Define a language from a grammar handle, a style table and metadata
    pub fn define(language: Language, styles: StyleTable, metadata: LanguageMetadata) -> Self {
        Self {
            language,
            styles,
            metadata,
        }
    }

    /// The tree-sitter grammar handle
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The node-kind to highlight-tag table
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// The language metadata
    pub fn metadata(&self) -> &LanguageMetadata {
        &self.metadata
    }

    /// The line-comment token, if the language has one
    pub fn line_comment_token(&self) -> Option<&str> {
        self.metadata.comment.line.as_deref()
    }
}

static RUBY: Lazy<LanguageDefinition> = Lazy::new(|| {
    LanguageDefinition::define(
        tree_sitter_ruby::LANGUAGE.into(),
        StyleTable::new().with_rule("identifier", HighlightTag::VariableDefinition),
        LanguageMetadata::new("ruby", &["rb"], CommentConfig::line("#")),
    )
});

/// The process-wide Ruby language definition.
///
/// Built on first access and shared by every support object; repeated calls
/// return the same reference.
pub fn ruby_language() -> &'static LanguageDefinition {
    &RUBY
}
