//! The outcome of one parse.

use super::error::ParseError;
use crate::tree::ParseNode;

/// A parse tree or the errors that prevented one.
///
/// A failed parse never carries a partial tree.
#[derive(Debug)]
pub struct ParseResult {
    outcome: Result<ParseNode, Vec<ParseError>>,
}

impl ParseResult {
    pub(crate) const fn success(root: ParseNode) -> Self {
        Self { outcome: Ok(root) }
    }

    pub(crate) fn failure(errors: Vec<ParseError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            outcome: Err(errors),
        }
    }

    /// The root node, if the parse succeeded.
    #[must_use]
    pub const fn root(&self) -> Option<&ParseNode> {
        match &self.outcome {
            Ok(root) => Some(root),
            Err(_) => None,
        }
    }

    /// The errors, empty if the parse succeeded.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        match &self.outcome {
            Ok(_) => &[],
            Err(errors) => errors.as_slice(),
        }
    }

    /// Returns true if the parse produced a tree.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns every error reported for the input if the parse failed.
    pub fn into_result(self) -> Result<ParseNode, Vec<ParseError>> {
        self.outcome
    }
}
