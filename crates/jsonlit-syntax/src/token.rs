//! Tokens and trivia.
//! Token 和 trivia。

use crate::JsonKind;
use jsonlit_common::{Span, VirtualChar};

/// Non-significant text (whitespace, line breaks, comments) kept for fidelity.
/// 为保真而保留的非语义文本（空白、换行、注释）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub kind: JsonKind,
    pub chars: Vec<VirtualChar>,
}

impl Trivia {
    pub fn new(kind: JsonKind, chars: Vec<VirtualChar>) -> Self {
        Self { kind, chars }
    }

    pub fn text(&self) -> String {
        VirtualChar::text_of(&self.chars)
    }

    pub fn span(&self) -> Option<Span> {
        VirtualChar::span_of(&self.chars)
    }
}

/// Decoded payload of a literal token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// String body with escapes resolved.
    String(String),
    /// Number text exactly as written; it is never converted.
    Number(String),
}

/// A token with its surrounding trivia.
/// 带有前后 trivia 的 token。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: JsonKind,
    pub leading_trivia: Vec<Trivia>,
    /// Characters owned by the token itself. Empty for missing tokens
    /// and for end-of-file.
    pub chars: Vec<VirtualChar>,
    pub trailing_trivia: Vec<Trivia>,
    pub value: Option<TokenValue>,
    /// Set when the token was synthesized during error recovery.
    pub is_missing: bool,
}

impl Token {
    pub fn new(kind: JsonKind, chars: Vec<VirtualChar>) -> Self {
        Self {
            kind,
            leading_trivia: Vec::new(),
            chars,
            trailing_trivia: Vec::new(),
            value: None,
            is_missing: false,
        }
    }

    /// A zero-width placeholder for required syntax that is absent.
    /// 表示缺失的必需语法的零宽占位 token。
    pub fn missing(kind: JsonKind) -> Self {
        Self {
            is_missing: true,
            ..Self::new(kind, Vec::new())
        }
    }

    pub fn with_kind(mut self, kind: JsonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_leading_trivia(mut self, trivia: Vec<Trivia>) -> Self {
        self.leading_trivia = trivia;
        self
    }

    pub fn with_trailing_trivia(mut self, trivia: Vec<Trivia>) -> Self {
        self.trailing_trivia = trivia;
        self
    }

    /// The token's own text, without trivia.
    pub fn text(&self) -> String {
        VirtualChar::text_of(&self.chars)
    }

    /// Span of the token's own characters, without trivia.
    pub fn span(&self) -> Option<Span> {
        VirtualChar::span_of(&self.chars)
    }

    pub fn first_char(&self) -> Option<VirtualChar> {
        self.chars.first().copied()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == JsonKind::EndOfFile
    }

    /// Every character the token covers: leading trivia, own text, trailing trivia.
    /// token 覆盖的所有字符：前导 trivia、自身文本、尾随 trivia。
    pub fn all_chars(&self) -> impl Iterator<Item = &VirtualChar> {
        self.leading_trivia
            .iter()
            .flat_map(|t| t.chars.iter())
            .chain(self.chars.iter())
            .chain(self.trailing_trivia.iter().flat_map(|t| t.chars.iter()))
    }
}
