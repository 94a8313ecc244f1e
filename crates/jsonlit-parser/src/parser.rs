//! The jsonlit parser.
//! jsonlit 语法分析器。

use jsonlit_common::{Span, VirtualCharSequence};
use jsonlit_diagnostic::{Diagnostic, ErrorCode};
use jsonlit_lexer::Lexer;
use jsonlit_syntax::{JsonKind, JsonOptions, Node, NodeOrToken, Token, Tree};
use tracing::{debug, warn};

use crate::check;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::recovery::{DelimiterKind, DelimiterStack};

type ParseResult<T> = Result<T, ParseError>;

/// The jsonlit parser.
/// jsonlit 语法分析器。
///
/// Pulls tokens from the lexer one at a time and builds a lossless tree.
/// Every input yields a tree; nothing is ever skipped. Input the grammar
/// cannot place becomes a `Text` node with a diagnostic.
/// 从词法分析器逐个拉取 token 并构建无损语法树。
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The token under the cursor
    current: Token,
    options: JsonOptions,
    diagnostics: Vec<Diagnostic>,
    /// Delimiters of the enclosing containers
    delimiter_stack: DelimiterStack,
    depth: usize,
    max_depth: usize,
    /// Set while parsing the value of a property, so that a chained
    /// property (`a: b: c`) counts toward the nesting limit.
    in_property_value: bool,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a VirtualCharSequence, config: &ParserConfig) -> Self {
        let mut lexer = Lexer::new(text, config.options);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            options: config.options,
            diagnostics: Vec::new(),
            delimiter_stack: DelimiterStack::new(),
            depth: 0,
            max_depth: config.max_depth,
            in_property_value: false,
        }
    }

    /// Parse the whole input into a tree.
    ///
    /// Fails only when nesting exceeds the configured depth.
    pub fn parse_tree(mut self) -> ParseResult<Tree> {
        let sequence = self.parse_sequence(false)?;
        let eof = self.consume();
        let root = Node::new(JsonKind::CompilationUnit, vec![sequence.into(), eof.into()]);

        let mut diagnostics = self.lexer.take_diagnostics();
        diagnostics.append(&mut self.diagnostics);
        diagnostics.extend(check::check(&root, self.options));
        let diagnostics = normalize(diagnostics);

        debug!(
            mode = %self.options,
            chars = self.lexer.position(),
            diagnostics = diagnostics.len(),
            "parsed"
        );
        Ok(Tree::new(root, diagnostics, self.options))
    }

    // ========== Values ==========

    fn parse_value(&mut self) -> ParseResult<Node> {
        match self.current.kind {
            JsonKind::OpenBraceToken => self.parse_object(),
            JsonKind::OpenBracketToken => self.parse_array(),
            JsonKind::CommaToken => Ok(comma_value(self.consume())),
            _ => {
                let token = self.consume();
                if self.current.kind == JsonKind::ColonToken {
                    self.parse_property(token)
                } else {
                    self.parse_literal_or_text(token)
                }
            }
        }
    }

    fn parse_literal_or_text(&mut self, token: Token) -> ParseResult<Node> {
        match token.kind {
            kind if kind.is_literal_token() => Ok(Node::new(JsonKind::Literal, vec![token.into()])),
            JsonKind::NewKeyword => self.parse_constructor(token),
            JsonKind::MinusToken if self.current.kind == JsonKind::InfinityLiteralToken => {
                let infinity = self.consume();
                Ok(Node::new(
                    JsonKind::NegativeLiteral,
                    vec![token.into(), infinity.into()],
                ))
            }
            _ => Ok(self.text_node(token)),
        }
    }

    /// Wrap a token no production accepts.
    fn text_node(&mut self, token: Token) -> Node {
        if let Some(first) = token.first_char() {
            self.diagnostics
                .push(Diagnostic::unexpected(first.value, first.span));
        }
        Node::new(
            JsonKind::Text,
            vec![token.with_kind(JsonKind::TextToken).into()],
        )
    }

    /// A name that is not a string is bare text, whatever it lexed as.
    fn parse_property(&mut self, name: Token) -> ParseResult<Node> {
        let name = match name.kind {
            JsonKind::StringToken => name,
            _ => name.with_kind(JsonKind::TextToken),
        };
        if self.in_property_value {
            self.nested(None, |p| p.parse_property_body(name))
        } else {
            self.parse_property_body(name)
        }
    }

    fn parse_property_body(&mut self, name: Token) -> ParseResult<Node> {
        let colon = self.consume();

        let value = match self.current.kind {
            JsonKind::CommaToken => comma_value(Token::missing(JsonKind::CommaToken)),
            JsonKind::EndOfFile => {
                let span = self.position_span();
                self.diagnostics
                    .push(Diagnostic::new(ErrorCode::MissingPropertyValue, span));
                comma_value(Token::missing(JsonKind::CommaToken))
            }
            _ => {
                let saved = std::mem::replace(&mut self.in_property_value, true);
                let value = self.parse_value();
                self.in_property_value = saved;
                let value = value?;
                if let Some(span) = value.colon_token().and_then(Token::span) {
                    self.diagnostics
                        .push(Diagnostic::new(ErrorCode::NestedProperty, span));
                }
                value
            }
        };

        Ok(Node::new(
            JsonKind::Property,
            vec![name.into(), colon.into(), value.into()],
        ))
    }

    // ========== Containers ==========

    fn parse_object(&mut self) -> ParseResult<Node> {
        self.nested(Some(DelimiterKind::Brace), |p| {
            let open = p.consume();
            let sequence = p.parse_separated_sequence()?;
            let close = p.expect(JsonKind::CloseBraceToken, "}");
            Ok(Node::new(
                JsonKind::Object,
                vec![open.into(), sequence.into(), close.into()],
            ))
        })
    }

    fn parse_array(&mut self) -> ParseResult<Node> {
        self.nested(Some(DelimiterKind::Bracket), |p| {
            let open = p.consume();
            let sequence = p.parse_sequence(true)?;
            let close = p.expect(JsonKind::CloseBracketToken, "]");
            Ok(Node::new(
                JsonKind::Array,
                vec![open.into(), sequence.into(), close.into()],
            ))
        })
    }

    /// `new Name(args)`; the `new` keyword has already been consumed.
    fn parse_constructor(&mut self, new_keyword: Token) -> ParseResult<Node> {
        self.nested(Some(DelimiterKind::Paren), |p| {
            let name = if p.current.kind.is_word_token() {
                p.consume().with_kind(JsonKind::TextToken)
            } else {
                let span = p.position_span();
                p.diagnostics
                    .push(Diagnostic::new(ErrorCode::NameExpected, span));
                Token::missing(JsonKind::TextToken)
            };
            let open = p.expect(JsonKind::OpenParenToken, "(");
            let arguments = p.parse_sequence(true)?;
            let close = p.expect(JsonKind::CloseParenToken, ")");
            Ok(Node::new(
                JsonKind::Constructor,
                vec![
                    new_keyword.into(),
                    name.into(),
                    open.into(),
                    arguments.into(),
                    close.into(),
                ],
            ))
        })
    }

    // ========== Sequences ==========

    /// Values of an array, a constructor or the top level. Commas are
    /// values here (`CommaValue`), so adjacent non-comma values mean a
    /// comma is missing between them.
    fn parse_sequence(&mut self, expect_commas: bool) -> ParseResult<Node> {
        let mut values: Vec<NodeOrToken> = Vec::new();
        let mut after_value = false;

        while self.should_consume_sequence_element() {
            let value = self.parse_value()?;
            let is_value = value.kind != JsonKind::CommaValue;
            if expect_commas && is_value && after_value {
                if let Some(span) = value.first_present_token().and_then(Token::span) {
                    self.diagnostics.push(Diagnostic::expected(",", span));
                }
            }
            after_value = is_value;
            values.push(value.into());
        }

        Ok(Node::new(JsonKind::Sequence, values))
    }

    /// Members of an object: values separated by bare comma tokens.
    fn parse_separated_sequence(&mut self) -> ParseResult<Node> {
        let mut items: Vec<NodeOrToken> = Vec::new();

        while self.should_consume_sequence_element() {
            items.push(self.parse_value()?.into());

            if self.current.kind == JsonKind::CommaToken {
                items.push(self.consume().into());
            } else if self.should_consume_sequence_element() {
                let span = self.position_span();
                self.diagnostics.push(Diagnostic::expected(",", span));
                items.push(Token::missing(JsonKind::CommaToken).into());
            }
        }

        Ok(Node::new(JsonKind::Sequence, items))
    }

    /// A closer ends the sequence only when an enclosing construct opened
    /// it; otherwise it becomes a stray `Text` value.
    fn should_consume_sequence_element(&self) -> bool {
        match self.current.kind {
            JsonKind::EndOfFile => false,
            kind => !self.delimiter_stack.closes_enclosing(kind),
        }
    }

    // ========== Nesting ==========

    /// Run `f` one level deeper. A container pushes its delimiter and
    /// starts outside any property value.
    fn nested<T>(
        &mut self,
        delimiter: Option<DelimiterKind>,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            warn!(max_depth = self.max_depth, "nesting limit exceeded, abandoning parse");
            return Err(ParseError::RecursionLimitExceeded {
                max_depth: self.max_depth,
            });
        }

        self.depth += 1;
        let saved = self.in_property_value;
        if let Some(delimiter) = delimiter {
            self.delimiter_stack.push(delimiter);
            self.in_property_value = false;
        }

        let result = f(self);

        if delimiter.is_some() {
            self.delimiter_stack.pop();
        }
        self.in_property_value = saved;
        self.depth -= 1;
        result
    }

    // ========== Helpers ==========

    /// Take the current token and pull the next one from the lexer.
    fn consume(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consume a token of `kind`, or synthesize a missing one and report
    /// `'text' expected` where it should have been.
    fn expect(&mut self, kind: JsonKind, text: &str) -> Token {
        if self.current.kind == kind {
            self.consume()
        } else {
            let span = self.position_span();
            self.diagnostics.push(Diagnostic::expected(text, span));
            Token::missing(kind)
        }
    }

    /// Zero-width span where the current token starts.
    fn position_span(&self) -> Span {
        match self.current.first_char() {
            Some(first) => Span::empty_at(first.span.start),
            None => Span::empty_at(self.lexer.end_position()),
        }
    }
}

fn comma_value(comma: Token) -> Node {
    Node::new(JsonKind::CommaValue, vec![comma.into()])
}

/// Sort by start offset, keeping report order for ties, and drop exact
/// duplicates.
fn normalize(mut diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    diagnostics.sort_by_key(|diag| diag.span.start);
    let mut seen = std::collections::HashSet::new();
    diagnostics.retain(|diag| seen.insert((diag.span, diag.message.clone())));
    diagnostics
}
