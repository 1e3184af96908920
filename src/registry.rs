//! Registry of available language supports.
//!
//! Hosts look up a language by file path and get a fresh support object to
//! activate for that document. Each lookup constructs a new instance; the
//! heavy shared state lives in the process-wide language definitions.

use crate::support::{LanguageSupport, ruby};
use std::path::Path;

type SupportFactory = fn() -> LanguageSupport;

struct RegisteredLanguage {
    name: &'static str,
    extensions: &'static [&'static str],
    factory: SupportFactory,
}

/// Registry mapping file types to language support factories.
#[derive(Default)]
pub struct LanguageRegistry {
    languages: Vec<RegisteredLanguage>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language under a set of file extensions
    pub fn register(
        &mut self,
        name: &'static str,
        extensions: &'static [&'static str],
        factory: SupportFactory,
    ) {
        self.languages.push(RegisteredLanguage {
            name,
            extensions,
            factory,
        });
    }

    /// Names of all registered languages
    pub fn language_names(&self) -> Vec<&'static str> {
        self.languages.iter().map(|l| l.name).collect()
    }

    /// Create a support object for a file, if a registered language handles it
    pub fn support_for(&self, path: &Path) -> Option<LanguageSupport> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        self.languages
            .iter()
            .find(|l| l.extensions.contains(&ext))
            .map(|l| (l.factory)())
    }
}

/// Create a registry with all built-in languages
pub fn default_registry() -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    registry.register("ruby", &["rb"], ruby);
    registry
}
