//! The jsonlit lexer.
//! jsonlit 词法分析器。

use crate::number::is_valid_number;
use jsonlit_common::{BytePos, Span, VirtualChar, VirtualCharSequence};
use jsonlit_diagnostic::{Diagnostic, ErrorCode};
use jsonlit_syntax::{JsonKind, JsonOptions, Token, TokenValue, Trivia};

/// The jsonlit lexer.
/// jsonlit 词法分析器。
///
/// Converts virtual characters into tokens, each carrying its leading and
/// trailing trivia. Tokens are pulled one at a time by the parser.
/// 将虚拟字符转换为 token，每个 token 携带其前导和尾随 trivia。
pub struct Lexer<'a> {
    /// Characters being scanned
    /// 正在扫描的字符
    text: &'a [VirtualChar],
    /// Source position just past the input
    /// 输入末尾之后的源码位置
    end: BytePos,
    /// Index of the next character to scan
    /// 下一个待扫描字符的索引
    pos: usize,
    /// Grammar profile
    /// 语法配置
    options: JsonOptions,
    /// Collected diagnostics
    /// 收集的诊断信息
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the given characters.
    /// 为给定的字符创建新的词法分析器。
    pub fn new(text: &'a VirtualCharSequence, options: JsonOptions) -> Self {
        Self {
            text: text.as_slice(),
            end: text.end_position(),
            pos: 0,
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input and return tokens and diagnostics.
    /// 对整个输入进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics)
    }

    /// Source position just past the input, used for zero-width diagnostics
    /// at end of input.
    /// 输入末尾之后的源码位置。
    pub fn end_position(&self) -> BytePos {
        self.end
    }

    /// Number of characters consumed so far.
    /// 已消费的字符数。
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Take the diagnostics collected so far.
    /// 取出目前收集到的诊断信息。
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Produce the next token. At end of input this returns `EndOfFile`
    /// carrying any remaining trivia, and keeps returning it.
    /// 生成下一个 token。到达输入末尾时返回携带剩余 trivia 的 `EndOfFile`。
    pub fn next_token(&mut self) -> Token {
        let leading = self.scan_trivia(true);

        if self.at_end() {
            return Token::new(JsonKind::EndOfFile, Vec::new()).with_leading_trivia(leading);
        }

        let token = self.scan_token();
        let trailing = self.scan_trivia(false);
        tracing::trace!(kind = %token.kind, start = ?token.span(), "token");

        token
            .with_leading_trivia(leading)
            .with_trailing_trivia(trailing)
    }

    // ========== Character access ==========

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.text.get(self.pos).map(|vc| vc.value)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.text.get(self.pos + n).map(|vc| vc.value)
    }

    fn chars_from(&self, start: usize) -> Vec<VirtualChar> {
        self.text[start..self.pos].to_vec()
    }

    fn span_from(&self, start: usize) -> Span {
        VirtualChar::span_of(&self.text[start..self.pos]).unwrap_or(Span::empty_at(self.end))
    }

    fn error(&mut self, code: ErrorCode, span: Span) {
        self.diagnostics.push(Diagnostic::new(code, span));
    }

    // ========== Trivia ==========

    /// Scan trivia. Leading trivia takes everything available; trailing
    /// trivia stops after the first end-of-line.
    /// 扫描 trivia。前导 trivia 获取所有可用内容；尾随 trivia 在第一个换行后停止。
    fn scan_trivia(&mut self, leading: bool) -> Vec<Trivia> {
        let mut result = Vec::new();

        while let Some(ch) = self.peek_char() {
            if ch == '/' {
                result.push(self.scan_comment());
            } else if ch == '\r' || ch == '\n' {
                result.push(self.scan_end_of_line());
                if !leading {
                    break;
                }
            } else if is_blank(ch) {
                result.push(self.scan_whitespace());
            } else {
                break;
            }
        }

        result
    }

    fn scan_end_of_line(&mut self) -> Trivia {
        let start = self.pos;
        if self.peek_char() == Some('\r') && self.peek_nth(1) == Some('\n') {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        Trivia::new(JsonKind::EndOfLineTrivia, self.chars_from(start))
    }

    fn scan_whitespace(&mut self) -> Trivia {
        let start = self.pos;
        let mut illegal = None;

        while let Some(ch) = self.peek_char().filter(|&ch| is_blank(ch)) {
            if illegal.is_none() && ch != ' ' && ch != '\t' {
                illegal = Some(self.text[self.pos].span);
            }
            self.pos += 1;
        }

        if self.options.is_strict() {
            if let Some(span) = illegal {
                self.error(ErrorCode::IllegalWhitespaceCharacter, span);
            }
        }

        Trivia::new(JsonKind::WhitespaceTrivia, self.chars_from(start))
    }

    /// Scan a comment starting at `/`.
    /// 扫描以 `/` 开头的注释。
    fn scan_comment(&mut self) -> Trivia {
        let start = self.pos;
        let slash = self.text[start].span;

        let (kind, error) = match self.peek_nth(1) {
            // Line comment: // to end of line - 行注释：// 到行尾
            Some('/') => {
                self.pos += 2;
                while self.peek_char().is_some_and(|ch| ch != '\r' && ch != '\n') {
                    self.pos += 1;
                }
                let error = (self.pos == start + 2 && self.at_end())
                    .then(|| (ErrorCode::UnterminatedComment, self.span_from(start)));
                (JsonKind::SingleLineCommentTrivia, error)
            }
            // Block comment: /* ... */ - 块注释
            Some('*') => {
                self.pos += 2;
                let mut terminated = false;
                while !self.at_end() {
                    if self.peek_char() == Some('*') && self.peek_nth(1) == Some('/') {
                        self.pos += 2;
                        terminated = true;
                        break;
                    }
                    self.pos += 1;
                }
                let error = (!terminated).then_some((ErrorCode::ErrorParsingComment, slash));
                (JsonKind::MultiLineCommentTrivia, error)
            }
            // A lone slash - 单独的斜杠
            _ => {
                self.pos += 1;
                (
                    JsonKind::SingleLineCommentTrivia,
                    Some((ErrorCode::ErrorParsingComment, slash)),
                )
            }
        };

        match error {
            Some((code, span)) => self.error(code, span),
            None if self.options.is_strict() => {
                let span = self.span_from(start);
                self.error(ErrorCode::CommentsNotAllowed, span);
            }
            None => {}
        }

        Trivia::new(kind, self.chars_from(start))
    }

    // ========== Tokens ==========

    fn scan_token(&mut self) -> Token {
        let start = self.pos;
        let Some(ch) = self.peek_char() else {
            return Token::new(JsonKind::EndOfFile, Vec::new());
        };

        let kind = match ch {
            '{' => JsonKind::OpenBraceToken,
            '}' => JsonKind::CloseBraceToken,
            '[' => JsonKind::OpenBracketToken,
            ']' => JsonKind::CloseBracketToken,
            '(' => JsonKind::OpenParenToken,
            ')' => JsonKind::CloseParenToken,
            ',' => JsonKind::CommaToken,
            ':' => JsonKind::ColonToken,
            '"' | '\'' => return self.scan_string(),
            _ => return self.scan_text(),
        };

        self.pos += 1;
        Token::new(kind, self.chars_from(start))
    }

    /// Scan a string literal quoted with `"` or `'`.
    /// 扫描以 `"` 或 `'` 引起的字符串字面量。
    ///
    /// Line breaks do not end a string; only the matching quote or end of
    /// input does. Only the first problem in the body is reported, plus the
    /// quote style in strict mode.
    /// 换行不会结束字符串；只有匹配的引号或输入结束才会。
    fn scan_string(&mut self) -> Token {
        let start = self.pos;
        let quote = self.text[start].value;
        self.pos += 1;

        let mut error: Option<Diagnostic> = None;
        let mut units: Vec<u16> = Vec::new();
        let mut closed = false;

        while let Some(ch) = self.peek_char() {
            self.pos += 1;
            if ch == quote {
                closed = true;
                break;
            }

            if ch == '\\' {
                let escape_start = self.pos - 1;
                let escape_error = self.scan_escape(start, escape_start, &mut units);
                if error.is_none() {
                    error = escape_error;
                }
            } else {
                let mut buf = [0u16; 2];
                units.extend_from_slice(ch.encode_utf16(&mut buf));
            }
        }

        if !closed && error.is_none() {
            error = Some(Diagnostic::new(
                ErrorCode::UnterminatedString,
                self.span_from(start),
            ));
        }

        let chars = self.chars_from(start);
        match error {
            Some(diag) => {
                // The quote style is judged even when the body is broken.
                if self.options.is_strict() && quote == '\'' {
                    let open = self.text[start].span;
                    self.error(ErrorCode::SingleQuotedString, open);
                }
                self.diagnostics.push(diag);
                Token::new(JsonKind::StringToken, chars)
            }
            None => {
                if self.options.is_strict() {
                    if let Some(diag) = check_strict_string(&chars) {
                        self.diagnostics.push(diag);
                    }
                }
                let value = String::from_utf16_lossy(&units);
                Token::new(JsonKind::StringToken, chars).with_value(TokenValue::String(value))
            }
        }
    }

    /// Scan the rest of an escape after its backslash, appending the decoded
    /// UTF-16 units to `units`.
    /// 扫描反斜杠之后的转义序列，并将解码后的 UTF-16 单元追加到 `units`。
    fn scan_escape(
        &mut self,
        string_start: usize,
        escape_start: usize,
        units: &mut Vec<u16>,
    ) -> Option<Diagnostic> {
        let Some(ch) = self.peek_char() else {
            return Some(Diagnostic::new(
                ErrorCode::UnterminatedString,
                self.span_from(string_start),
            ));
        };
        self.pos += 1;

        let decoded = match ch {
            'b' => '\u{0008}',
            't' => '\t',
            'n' => '\n',
            'f' => '\u{000C}',
            'r' => '\r',
            '\\' | '"' | '\'' | '/' => ch,
            'u' => return self.scan_unicode_escape(escape_start, units),
            _ => {
                return Some(Diagnostic::new(
                    ErrorCode::InvalidEscapeSequence,
                    self.span_from(escape_start),
                ));
            }
        };

        units.push(decoded as u16);
        None
    }

    /// `\u` takes up to four following characters, whatever they are.
    /// `\u` 之后最多读取四个字符，无论其内容。
    fn scan_unicode_escape(&mut self, escape_start: usize, units: &mut Vec<u16>) -> Option<Diagnostic> {
        let digits_start = self.pos;
        let mut code: u32 = 0;
        let mut invalid = false;

        while self.pos < digits_start + 4 {
            let Some(ch) = self.peek_char() else { break };
            self.pos += 1;
            match ch.to_digit(16) {
                Some(digit) => code = code * 16 + digit,
                None => invalid = true,
            }
        }

        if invalid || self.pos - digits_start != 4 {
            return Some(Diagnostic::new(
                ErrorCode::InvalidEscapeSequence,
                self.span_from(escape_start),
            ));
        }

        units.push(code as u16);
        None
    }

    /// Scan a greedy run of word characters and classify it.
    /// 扫描连续的单词字符并进行分类。
    fn scan_text(&mut self) -> Token {
        let start = self.pos;
        while self.peek_char().is_some_and(is_text_char) {
            self.pos += 1;
        }

        let text = VirtualChar::text_of(&self.text[start..self.pos]);
        let kind = match text.as_str() {
            "true" => JsonKind::TrueLiteralToken,
            "false" => JsonKind::FalseLiteralToken,
            "null" => JsonKind::NullLiteralToken,
            "undefined" => JsonKind::UndefinedLiteralToken,
            "NaN" => JsonKind::NaNLiteralToken,
            "Infinity" => JsonKind::InfinityLiteralToken,
            "new" => JsonKind::NewKeyword,
            "-Infinity" => {
                // Split so `Infinity` is scanned as its own token next.
                // 拆分，使 `Infinity` 在下一次作为独立 token 被扫描。
                self.pos = start + 1;
                return Token::new(JsonKind::MinusToken, self.chars_from(start));
            }
            _ if starts_number(&text) => return self.number(start, text),
            _ => JsonKind::TextToken,
        };

        Token::new(kind, self.chars_from(start))
    }

    /// A number-shaped run. Malformed runs carry no value; they are only
    /// diagnosed where they are used as a value, since a property name
    /// like `0a` is judged by the property rules instead.
    fn number(&mut self, start: usize, text: String) -> Token {
        let token = Token::new(JsonKind::NumberToken, self.chars_from(start));
        if is_valid_number(&text) {
            token.with_value(TokenValue::Number(text))
        } else {
            token
        }
    }
}

/// Strict rules for a lexically sound string token.
/// 对词法正确的字符串 token 应用严格模式规则。
fn check_strict_string(chars: &[VirtualChar]) -> Option<Diagnostic> {
    let first = chars.first()?;
    if first.value == '\'' {
        return Some(Diagnostic::new(ErrorCode::SingleQuotedString, first.span));
    }

    let body = chars.get(1..chars.len().saturating_sub(1)).unwrap_or_default();

    if let Some(vc) = body.iter().find(|vc| vc.value < ' ') {
        return Some(Diagnostic::new(ErrorCode::IllegalStringCharacter, vc.span));
    }

    // Walk escapes pairwise so `\\'` is not mistaken for `\'`.
    let mut i = 0;
    while i < body.len() {
        if body[i].value == '\\' {
            if let Some(next) = body.get(i + 1) {
                if next.value == '\'' {
                    return Some(Diagnostic::new(
                        ErrorCode::InvalidEscapeSequence,
                        body[i].span.merge(next.span),
                    ));
                }
            }
            i += 1;
        }
        i += 1;
    }

    None
}

/// Whitespace other than line breaks.
/// 除换行之外的空白字符。
fn is_blank(ch: char) -> bool {
    match ch {
        '\r' | '\n' => false,
        '\t' | '\u{000B}' | '\u{000C}' | ' ' | '\u{0085}' | '\u{00A0}' => true,
        _ => ch.is_whitespace(),
    }
}

fn is_text_char(ch: char) -> bool {
    !matches!(
        ch,
        '{' | '}' | '[' | ']' | '(' | ')' | ',' | ':' | '\'' | '"' | '/' | '\r' | '\n'
    ) && !is_blank(ch)
}

fn starts_number(text: &str) -> bool {
    text.starts_with(|ch: char| ch == '-' || ch == '.' || ch.is_ascii_digit())
}
