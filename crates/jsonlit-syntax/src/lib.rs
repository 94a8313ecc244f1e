//! Lossless syntax tree for embedded JSON.
//!
//! This crate defines the node, token and trivia types produced by the
//! parser, the strictness options, and the structural dump used by tests
//! and tooling.

mod dump;
mod kind;
mod node;
mod options;
mod token;
mod tree;

pub use dump::{dump, dump_diagnostics};
pub use kind::JsonKind;
pub use node::{Node, NodeOrToken};
pub use options::{JsonOptions, UnknownMode};
pub use token::{Token, TokenValue, Trivia};
pub use tree::Tree;
