//! Language metadata - comment tokens and file associations.
//!
//! Metadata travels with the language definition and is what host features
//! (comment toggling, file-type detection) read. It can be overridden from a
//! TOML file so hosts may adjust file associations without recompiling.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Comment token configuration for a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentConfig {
    /// Line comment prefix (e.g. `#`)
    pub line: Option<String>,
    /// Block comment delimiters (start, end), if the language has them
    #[serde(default)]
    pub block: Option<(String, String)>,
}

impl CommentConfig {
    /// Configuration with only a line-comment token
    pub fn line(token: &str) -> Self {
        Self {
            line: Some(token.to_string()),
            block: None,
        }
    }
}

/// Metadata describing a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMetadata {
    /// Language name (e.g. "ruby")
    pub name: String,
    /// File extensions this language handles, without the dot
    pub extensions: Vec<String>,
    /// Comment token configuration
    #[serde(default)]
    pub comment: CommentConfig,
}

impl LanguageMetadata {
    /// Create new metadata
    pub fn new(name: &str, extensions: &[&str], comment: CommentConfig) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            comment,
        }
    }

    /// Check whether this language handles a file, by extension
    pub fn can_handle(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            self.extensions.iter().any(|e| e == ext)
        } else {
            false
        }
    }

    /// Parse metadata from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load metadata from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ruby_metadata() -> LanguageMetadata {
        LanguageMetadata::new("ruby", &["rb"], CommentConfig::line("#"))
    }

    #[test]
    fn test_can_handle() {
        let meta = ruby_metadata();
        assert!(meta.can_handle(&PathBuf::from("app/models/user.rb")));
        assert!(!meta.can_handle(&PathBuf::from("main.py")));
        assert!(!meta.can_handle(&PathBuf::from("Rakefile")));
    }

    #[test]
    fn test_comment_token() {
        let meta = ruby_metadata();
        assert_eq!(meta.comment.line.as_deref(), Some("#"));
        assert!(meta.comment.block.is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruby.toml");

        let meta = ruby_metadata();
        let contents = toml::to_string_pretty(&meta).unwrap();
        std::fs::write(&path, contents).unwrap();

        let loaded = LanguageMetadata::load(&path).unwrap();
        assert_eq!(loaded, meta);
    }

    #[test]
    fn test_from_toml_defaults() {
        let meta = LanguageMetadata::from_toml_str(
            r#"
            name = "ruby"
            extensions = ["rb"]
            "#,
        )
        .unwrap();
        assert_eq!(meta.name, "ruby");
        assert!(meta.comment.line.is_none());
    }
}
