//! Lexical analysis for embedded JSON.
//! 嵌入式 JSON 的词法分析模块。
//!
//! This crate provides the lexer that converts virtual characters into
//! tokens with attached trivia.
//! 本 crate 提供词法分析器，将虚拟字符转换为附带 trivia 的 token。

mod lexer;
mod number;

pub use lexer::Lexer;
pub use number::is_valid_number;
