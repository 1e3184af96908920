//! Bracket matching over a restricted delimiter set.
//!
//! Hosts usually match `()`, `[]` and `{}` by default. The Ruby support
//! object narrows that to braces only, because the grammar does not treat
//! parentheses or square brackets as structural brackets; matching them would
//! highlight pairs with no syntactic meaning. The narrowing happens through
//! configuration, not by wrapping the matcher.

use std::fmt;

/// The delimiter pairs a bracket matcher should consider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketConfig {
    pairs: Vec<(char, char)>,
}

impl Default for BracketConfig {
    /// The conventional editor default: parentheses, square brackets, braces
    fn default() -> Self {
        Self::from_chars("()[]{}")
    }
}

impl BracketConfig {
    /// Build a config from a string of delimiter characters, taken two at a
    /// time as (open, close) pairs. `"{}"` yields a braces-only config.
    ///
    /// A trailing unpaired character is ignored.
    pub fn from_chars(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        let pairs = chars.chunks_exact(2).map(|c| (c[0], c[1])).collect();
        Self { pairs }
    }

    /// The configured (open, close) pairs
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    fn pair_for_open(&self, c: char) -> Option<(char, char)> {
        self.pairs.iter().copied().find(|&(open, _)| open == c)
    }

    fn pair_for_close(&self, c: char) -> Option<(char, char)> {
        self.pairs.iter().copied().find(|&(_, close)| close == c)
    }

    /// Find the partner of the bracket at byte offset `offset` in `text`.
    ///
    /// `offset` must lie on a character boundary.
    ///
    /// Returns `None` when the character at `offset` is not a configured
    /// delimiter, or when no balanced partner exists. Delimiters outside the
    /// configured set are invisible to the scan, so a braces-only config
    /// never reports parenthesis pairs and nesting of excluded delimiters
    /// cannot disturb brace depth.
    pub fn matching_bracket(&self, text: &str, offset: usize) -> Option<BracketMatch> {
        let at = text[offset..].chars().next()?;

        if let Some((open, close)) = self.pair_for_open(at) {
            let mut depth = 0usize;
            for (i, c) in text[offset..].char_indices() {
                if c == open {
                    depth += 1;
                } else if c == close {
                    depth -= 1;
                    if depth == 0 {
                        return Some(BracketMatch {
                            open: offset,
                            close: offset + i,
                        });
                    }
                }
            }
            None
        } else if let Some((open, close)) = self.pair_for_close(at) {
            let mut depth = 0usize;
            for (i, c) in text[..offset + at.len_utf8()].char_indices().rev() {
                if c == close {
                    depth += 1;
                } else if c == open {
                    depth -= 1;
                    if depth == 0 {
                        return Some(BracketMatch {
                            open: i,
                            close: offset,
                        });
                    }
                }
            }
            None
        } else {
            None
        }
    }
}

impl fmt::Display for BracketConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (open, close) in &self.pairs {
            write!(f, "{open}{close}")?;
        }
        Ok(())
    }
}

/// A matched pair of delimiters, as byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    /// Byte offset of the opening delimiter
    pub open: usize,
    /// Byte offset of the closing delimiter
    pub close: usize,
}
