//! Parser for embedded JSON.
//!
//! This crate provides an error-tolerant recursive descent parser that
//! turns virtual characters into a lossless syntax tree.
//!
//! ## Error Recovery
//!
//! The parser never gives up on malformed input: missing tokens are
//! synthesized, stray tokens become `Text` nodes, and every problem is
//! reported as a diagnostic on the tree. The only input that yields no
//! tree is one nested deeper than [`MAX_DEPTH`].

mod check;
mod config;
mod error;
mod parser;
mod recovery;

pub use config::{MAX_DEPTH, ParserConfig};
pub use error::ParseError;
pub use parser::Parser;
pub use recovery::{DelimiterKind, DelimiterStack};

use jsonlit_common::VirtualCharSequence;
use jsonlit_syntax::{JsonOptions, Tree};

/// Parse virtual characters into a tree.
///
/// Returns `None` only when nesting exceeds [`MAX_DEPTH`].
pub fn parse(chars: &VirtualCharSequence, options: JsonOptions) -> Option<Tree> {
    try_parse(chars, options).ok()
}

/// Like [`parse`], but says why no tree was produced.
pub fn try_parse(chars: &VirtualCharSequence, options: JsonOptions) -> Result<Tree, ParseError> {
    parse_with_config(chars, &ParserConfig::new().options(options))
}

/// Parse with an explicit configuration.
pub fn parse_with_config(
    chars: &VirtualCharSequence,
    config: &ParserConfig,
) -> Result<Tree, ParseError> {
    Parser::new(chars, config).parse_tree()
}

/// Parse plain text, using UTF-8 byte offsets as source positions.
pub fn parse_str(text: &str, options: JsonOptions) -> Option<Tree> {
    parse(&VirtualCharSequence::from_str(text), options)
}
