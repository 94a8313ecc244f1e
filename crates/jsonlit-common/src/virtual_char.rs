//! Virtual characters.
//! 虚拟字符。
//!
//! A virtual character is a decoded character paired with the span of original
//! source text it came from. When JSON is embedded in a host string literal, an
//! escape such as `\n` in the host source becomes a single virtual character
//! whose span covers both source characters, so every diagnostic can be mapped
//! back to where the user actually typed it.
//! 虚拟字符是一个解码后的字符及其在原始源码中的范围。

use crate::{BytePos, Span};
use std::fmt;
use std::ops::Deref;

/// A single decoded character with its source span.
/// 带有源码范围的单个解码字符。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualChar {
    /// The decoded character value. / 解码后的字符值。
    pub value: char,
    /// Where the character came from in the original source. / 字符在原始源码中的位置。
    pub span: Span,
}

impl VirtualChar {
    pub fn new(value: char, span: Span) -> Self {
        Self { value, span }
    }

    pub fn is_letter_or_digit(&self) -> bool {
        self.value.is_alphanumeric()
    }

    /// The source span covered by a run of virtual characters.
    /// 一段虚拟字符所覆盖的源码范围。
    pub fn span_of(chars: &[VirtualChar]) -> Option<Span> {
        let first = chars.first()?;
        let last = chars.last()?;
        Some(Span::new(first.span.start, last.span.end))
    }

    /// Collect the character values of a run into a `String`.
    /// 将一段虚拟字符的值收集为 `String`。
    pub fn text_of(chars: &[VirtualChar]) -> String {
        chars.iter().map(|vc| vc.value).collect()
    }
}

impl fmt::Debug for VirtualChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.value, self.span)
    }
}

/// An ordered sequence of virtual characters.
/// 有序的虚拟字符序列。
///
/// This is the input to the lexer. Host-language tooling builds it from a
/// string literal; `from_str` builds the identity mapping for plain text,
/// where each character's span is its UTF-8 byte range.
/// 这是词法分析器的输入。
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VirtualCharSequence {
    chars: Vec<VirtualChar>,
    /// Position reported for the end of an empty sequence.
    base: BytePos,
}

impl VirtualCharSequence {
    /// Build an identity sequence whose offsets start at zero.
    /// 构建偏移量从零开始的恒等序列。
    pub fn from_str(text: &str) -> Self {
        Self::from_str_at(text, 0)
    }

    /// Build an identity sequence whose offsets start at `base`.
    /// 构建偏移量从 `base` 开始的恒等序列。
    pub fn from_str_at(text: &str, base: usize) -> Self {
        let chars = text
            .char_indices()
            .map(|(i, ch)| VirtualChar::new(ch, Span::from_len(base + i, ch.len_utf8())))
            .collect();
        Self {
            chars,
            base: BytePos::from(base),
        }
    }

    /// Wrap characters produced by a host-language tokenizer.
    /// 包装由宿主语言词法分析器生成的字符。
    pub fn from_chars(chars: Vec<VirtualChar>) -> Self {
        let base = chars.first().map(|vc| vc.span.start).unwrap_or_default();
        Self { chars, base }
    }

    pub fn as_slice(&self) -> &[VirtualChar] {
        &self.chars
    }

    /// The source position just past the last character.
    /// 最后一个字符之后的源码位置。
    pub fn end_position(&self) -> BytePos {
        self.chars.last().map_or(self.base, |vc| vc.span.end)
    }

    /// The decoded text, without source positions.
    /// 解码后的文本，不含源码位置。
    pub fn text(&self) -> String {
        VirtualChar::text_of(&self.chars)
    }
}

impl Deref for VirtualCharSequence {
    type Target = [VirtualChar];

    fn deref(&self) -> &[VirtualChar] {
        &self.chars
    }
}

impl FromIterator<VirtualChar> for VirtualCharSequence {
    fn from_iter<I: IntoIterator<Item = VirtualChar>>(iter: I) -> Self {
        Self::from_chars(iter.into_iter().collect())
    }
}

impl fmt::Debug for VirtualCharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VirtualCharSequence({:?})", self.text())
    }
}
