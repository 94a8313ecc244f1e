//! Mode and shape checks over a finished tree.
//! 对完成的语法树进行模式和结构检查。
//!
//! The parser accepts anything structurally; what a given mode forbids is
//! decided here so that loose and strict parses of the same input produce
//! the same tree.

use jsonlit_common::{Span, VirtualChar};
use jsonlit_diagnostic::{Diagnostic, ErrorCode};
use jsonlit_lexer::is_valid_number;
use jsonlit_syntax::{JsonKind, JsonOptions, Node, NodeOrToken, Token};

pub(crate) fn check(root: &Node, options: JsonOptions) -> Vec<Diagnostic> {
    let mut checker = Checker {
        options,
        diagnostics: Vec::new(),
    };
    checker.check_compilation_unit(root);
    checker.diagnostics
}

struct Checker {
    options: JsonOptions,
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    fn strict(&self) -> bool {
        self.options.is_strict()
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn check_compilation_unit(&mut self, root: &Node) {
        let Some(sequence) = root.sequence() else {
            return;
        };

        if sequence.children.is_empty() {
            self.check_blank_input(root);
        }

        for (index, value) in sequence.children.iter().enumerate() {
            let Some(value) = value.as_node() else {
                continue;
            };
            if value.kind == JsonKind::Property {
                if let Some(colon) = value.colon_token() {
                    self.report_unexpected(colon);
                }
            }
            // Text already reported itself as unexpected.
            if index == 1 && value.kind != JsonKind::Text {
                if let Some(token) = value.first_present_token() {
                    self.report_unexpected(token);
                }
            }
        }

        self.check_node(sequence);
    }

    /// Input made of nothing but whitespace and line breaks.
    fn check_blank_input(&mut self, root: &Node) {
        let mut chars: Vec<VirtualChar> = Vec::new();
        let mut blank = true;
        root.walk_tokens(&mut |token| {
            for trivia in token.leading_trivia.iter().chain(&token.trailing_trivia) {
                blank &= !trivia.kind.is_comment();
                chars.extend(&trivia.chars);
            }
        });

        if blank {
            if let Some(span) = VirtualChar::span_of(&chars) {
                self.report(Diagnostic::new(ErrorCode::SyntaxError, span));
            }
        }
    }

    fn check_node(&mut self, node: &Node) {
        match node.kind {
            JsonKind::Object => self.check_object(node),
            JsonKind::Array => self.check_array(node),
            JsonKind::Constructor => self.check_constructor(node),
            JsonKind::Property => self.check_property(node),
            JsonKind::Literal => self.check_literal(node),
            JsonKind::NegativeLiteral => self.check_negative_literal(node),
            _ => {}
        }

        for child in node.children.iter().filter_map(NodeOrToken::as_node) {
            self.check_node(child);
        }
    }

    fn check_literal(&mut self, node: &Node) {
        let Some(token) = node.child_token(0) else {
            return;
        };
        let Some(span) = token.span() else {
            return;
        };

        if token.kind == JsonKind::NumberToken && !is_valid_number(&token.text()) {
            self.report(Diagnostic::new(ErrorCode::InvalidNumber, span));
        } else if self.strict() && token.kind.is_loose_only_literal() {
            self.report(Diagnostic::literal_not_allowed(&token.text(), span));
        }
    }

    fn check_negative_literal(&mut self, node: &Node) {
        if !self.strict() {
            return;
        }
        let spans: Vec<Span> = node.tokens().into_iter().filter_map(Token::span).collect();
        if let (Some(first), Some(last)) = (spans.first(), spans.last()) {
            self.report(Diagnostic::literal_not_allowed(
                "-Infinity",
                first.merge(*last),
            ));
        }
    }

    fn check_object(&mut self, node: &Node) {
        let Some(sequence) = node.sequence() else {
            return;
        };
        let closed = is_closed(node);

        for (index, item) in sequence.children.iter().enumerate() {
            match item {
                NodeOrToken::Node(member) => self.check_object_member(member),
                NodeOrToken::Token(comma) => {
                    let trailing = index + 1 == sequence.children.len();
                    if trailing && !comma.is_missing && (self.strict() || !closed) {
                        if let Some(span) = comma.span() {
                            self.report(Diagnostic::new(ErrorCode::TrailingComma, span));
                        }
                    }
                }
            }
        }
    }

    fn check_object_member(&mut self, member: &Node) {
        match member.kind {
            JsonKind::Property | JsonKind::Text => {}
            JsonKind::Literal
                if member
                    .child_token(0)
                    .is_some_and(|token| token.kind == JsonKind::StringToken) =>
            {
                if let Some(span) = member.child_token(0).and_then(Token::span) {
                    self.report(Diagnostic::new(ErrorCode::MissingColon, span));
                }
            }
            _ => {
                if let Some(span) = member.first_present_token().and_then(Token::span) {
                    self.report(Diagnostic::new(ErrorCode::NonPropertyInObject, span));
                }
            }
        }
    }

    fn check_array(&mut self, node: &Node) {
        if let Some(sequence) = node.sequence() {
            self.check_value_sequence(sequence, is_closed(node));
        }
    }

    fn check_constructor(&mut self, node: &Node) {
        if self.strict() {
            if let Some(span) = node.child_token(0).and_then(Token::span) {
                self.report(Diagnostic::new(ErrorCode::ConstructorsNotAllowed, span));
            }
        }

        if let Some(name) = node.name_token() {
            let valid = name.chars.iter().all(VirtualChar::is_letter_or_digit);
            if let (false, Some(span)) = (valid, name.span()) {
                self.report(Diagnostic::new(ErrorCode::InvalidConstructorName, span));
            }
        }

        if let Some(sequence) = node.sequence() {
            self.check_value_sequence(sequence, is_closed(node));
        }
    }

    /// Elements of an array or constructor argument list.
    ///
    /// Loose mode tolerates holes and trailing commas, but only inside a
    /// container that was actually closed.
    fn check_value_sequence(&mut self, sequence: &Node, closed: bool) {
        let lenient = !self.strict() && closed;
        let values: Vec<&Node> = sequence
            .children
            .iter()
            .filter_map(NodeOrToken::as_node)
            .collect();

        for (index, value) in values.iter().enumerate() {
            match value.kind {
                JsonKind::Property => {
                    if let Some(span) = value.colon_token().and_then(Token::span) {
                        self.report(Diagnostic::new(ErrorCode::PropertyInArray, span));
                    }
                }
                JsonKind::CommaValue if !lenient => {
                    let Some(span) = value.child_token(0).and_then(Token::span) else {
                        continue;
                    };
                    let previous = index.checked_sub(1).map(|i| values[i].kind);
                    if matches!(previous, None | Some(JsonKind::CommaValue)) {
                        self.report(Diagnostic::new(ErrorCode::CommaUnexpected, span));
                    } else if index + 1 == values.len() {
                        self.report(Diagnostic::new(ErrorCode::TrailingComma, span));
                    }
                }
                _ => {}
            }
        }
    }

    fn check_property(&mut self, node: &Node) {
        let Some(name) = node.name_token() else {
            return;
        };

        if self.strict() {
            if name.kind != JsonKind::StringToken {
                if let Some(span) = name.span() {
                    self.report(Diagnostic::new(ErrorCode::PropertyNameNotString, span));
                }
            }
            let value_missing = node
                .value()
                .is_some_and(|value| value.kind == JsonKind::CommaValue);
            if value_missing {
                if let Some(colon) = node.colon_token().and_then(Token::span) {
                    self.report(Diagnostic::new(
                        ErrorCode::ValueRequired,
                        Span::empty_at(colon.end),
                    ));
                }
            }
        } else if name.kind != JsonKind::StringToken && !name.chars.iter().all(is_name_char) {
            if let Some(span) = name.span() {
                self.report(Diagnostic::new(ErrorCode::InvalidPropertyName, span));
            }
        }
    }

    /// `'X' unexpected` on the first character of `token`, spanning the token.
    fn report_unexpected(&mut self, token: &Token) {
        if let (Some(first), Some(span)) = (token.first_char(), token.span()) {
            self.report(Diagnostic::unexpected(first.value, span));
        }
    }
}

fn is_closed(node: &Node) -> bool {
    node.close_token().is_some_and(|close| !close.is_missing)
}

/// Characters allowed in an unquoted property name.
fn is_name_char(vc: &VirtualChar) -> bool {
    vc.is_letter_or_digit() || vc.value == '_' || vc.value == '$'
}
