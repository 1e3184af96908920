//! # Lang-Ruby - Ruby language support for tree-sitter editors
//!
//! Editor-facing language plugin built on the pre-generated `tree-sitter-ruby`
//! grammar.
//!
//! Lang-Ruby provides:
//! - A process-wide [`LanguageDefinition`] bundling the grammar, a style table
//!   and comment metadata
//! - Semantic highlighting tags applied to syntax-tree nodes via a declarative
//!   node-kind table
//! - Bracket matching restricted to the delimiters the grammar actually uses
//! - Line-comment toggling driven by the language metadata
//! - A zero-argument factory, [`ruby()`], returning a fresh [`LanguageSupport`]
//!   a host activates per document

pub mod tags;
pub mod metadata;
pub mod language;
pub mod highlight;
pub mod brackets;
pub mod comment;
pub mod support;
pub mod registry;

// Re-exports for convenient access
pub use tags::{HighlightTag, StyleTable};
pub use metadata::{CommentConfig, LanguageMetadata};
pub use language::{LanguageDefinition, ruby_language};
pub use highlight::{Highlighter, StyledSpan};
pub use brackets::{BracketConfig, BracketMatch};
pub use support::{LanguageSupport, ruby};
pub use registry::{LanguageRegistry, default_registry};

/// Result type alias for Lang-Ruby operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Lang-Ruby operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Grammar error: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown highlight tag: {0}")]
    UnknownTag(String),

    #[error("Metadata error: {0}")]
    Metadata(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
