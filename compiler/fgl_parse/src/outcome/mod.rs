//! Two-way parse outcome for statement productions.
//!
//! | Consumed | Variant | Meaning |
//! |----------|---------|---------|
//! | no | `NotMatched` | The predictive test failed; try the next production |
//! | yes | `Matched` | The production committed and produced a node |
//!
//! A production only reports `NotMatched` from its predictive test, before
//! anything is consumed. Once the leading keyword is taken it always returns
//! `Matched`, carrying whatever errors the malformed tail produced. The
//! dispatch loop relies on this: `NotMatched` means the cursor did not move.

use crate::error::ParseError;
use crate::recovery::TokenSet;

#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// The production committed. `node` may be incomplete; `errors` lists
    /// every problem found while building it.
    Matched { node: T, errors: Vec<ParseError> },

    /// The predictive test failed and no tokens were consumed.
    NotMatched {
        /// Leading tokens this production would have accepted.
        expected: TokenSet,
        /// Byte offset of the token that failed the test.
        position: u32,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn matched(node: T, errors: Vec<ParseError>) -> Self {
        Self::Matched { node, errors }
    }

    #[inline]
    pub fn not_matched(expected: TokenSet, position: u32) -> Self {
        Self::NotMatched { expected, position }
    }

    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Errors reported by a matched production; empty for `NotMatched`.
    pub fn errors(&self) -> &[ParseError] {
        match self {
            Self::Matched { errors, .. } => errors,
            Self::NotMatched { .. } => &[],
        }
    }

    /// The produced node, discarding errors.
    pub fn into_node(self) -> Option<T> {
        match self {
            Self::Matched { node, .. } => Some(node),
            Self::NotMatched { .. } => None,
        }
    }

    /// Transform the node of a matched outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            Self::Matched { node, errors } => ParseOutcome::Matched {
                node: f(node),
                errors,
            },
            Self::NotMatched { expected, position } => {
                ParseOutcome::NotMatched { expected, position }
            }
        }
    }
}
