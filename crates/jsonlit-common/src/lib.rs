//! Common data structures for jsonlit.
//!
//! This crate provides the foundational types used by every other crate:
//! - `Span`: location of text in the original source
//! - `VirtualChar`: a decoded character together with the source span it came from
//! - `VirtualCharSequence`: the character stream the lexer reads

mod span;
mod virtual_char;

pub use span::{BytePos, Span};
pub use virtual_char::{VirtualChar, VirtualCharSequence};
