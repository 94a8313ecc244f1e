//! Fatal parse errors.

use thiserror::Error;

/// The one condition that discards a parse instead of annotating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("nesting exceeds the maximum depth of {max_depth}")]
    RecursionLimitExceeded { max_depth: usize },
}
