//! Applies the style table to parsed source text.
//!
//! The highlighter is the only place the grammar is actually exercised: it
//! parses a source string and walks the tree, emitting a styled span for every
//! node whose kind the definition's style table declares. Node kinds absent
//! from the table contribute nothing, so table keys that name no kind in the
//! grammar are harmless.

use crate::language::LanguageDefinition;
use crate::tags::HighlightTag;
use crate::{Error, Result};
use std::sync::Mutex;
use tree_sitter::{Node, Parser};

/// A byte range of source text carrying a highlight tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// The syntax-node kind that produced this span
    pub kind: &'static str,
    /// The semantic tag from the style table
    pub tag: HighlightTag,
}

/// Parses source text and tags nodes according to a language definition.
///
/// Holds its own parser instance; the definition is shared read-only.
pub struct Highlighter {
    definition: &'static LanguageDefinition,
    parser: Mutex<Parser>,
}

impl Highlighter {
    /// Create a highlighter for a language definition.
    ///
    /// This is where the grammar handle is first used; a broken grammar
    /// surfaces here as [`Error::Grammar`].
    pub fn new(definition: &'static LanguageDefinition) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(definition.language())?;
        tracing::debug!(language = %definition.metadata().name, "initialized parser");

        Ok(Self {
            definition,
            parser: Mutex::new(parser),
        })
    }

    /// The definition this highlighter applies
    pub fn definition(&self) -> &'static LanguageDefinition {
        self.definition
    }

    /// Parse `source` and return styled spans in document order.
    ///
    /// Spans are emitted for every node (named or anonymous) whose kind
    /// appears in the style table. Parent spans precede child spans.
    pub fn highlight(&self, source: &str) -> Result<Vec<StyledSpan>> {
        let mut parser = self.parser.lock().unwrap_or_else(|e| e.into_inner());
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::Parse("parser returned no tree".to_string()))?;

        let mut spans = Vec::new();
        collect_spans(tree.root_node(), self.definition.styles(), &mut spans);
        Ok(spans)
    }
}

fn collect_spans(node: Node, styles: &crate::tags::StyleTable, spans: &mut Vec<StyledSpan>) {
    if let Some(tag) = styles.tag_for(node.kind()) {
        spans.push(StyledSpan {
            start: node.start_byte(),
            end: node.end_byte(),
            kind: node.kind(),
            tag,
        });
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_spans(child, styles, spans);
    }
}
