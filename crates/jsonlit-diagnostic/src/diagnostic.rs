//! Diagnostic types and builders.

use crate::ErrorCode;
use jsonlit_common::Span;
use serde::{Serialize, Serializer};

/// Kind of diagnostic for categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Malformed strings, comments, whitespace or numbers.
    Lexical,
    /// A token no production accepts at this position.
    Unexpected,
    /// A required token or value is absent.
    Missing,
    /// Valid in loose mode, forbidden in strict mode.
    Mode,
    /// Parses, but breaks object/array placement rules.
    Shape,
}

/// A positioned diagnostic attached to a parse tree.
///
/// The span is in original source coordinates, never virtual-char indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    /// A diagnostic carrying the fixed message of `code`.
    pub fn new(code: ErrorCode, span: Span) -> Self {
        Self::with_message(code, span, code.message())
    }

    pub fn with_message(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: code.kind(),
            code,
            message: message.into(),
            span,
        }
    }

    /// `'X' unexpected`
    pub fn unexpected(ch: char, span: Span) -> Self {
        Self::with_message(ErrorCode::Unexpected, span, format!("'{ch}' unexpected"))
    }

    /// `'X' expected`
    pub fn expected(text: &str, span: Span) -> Self {
        Self::with_message(ErrorCode::Expected, span, format!("'{text}' expected"))
    }

    /// `'X' literal not allowed`
    pub fn literal_not_allowed(text: &str, span: Span) -> Self {
        Self::with_message(
            ErrorCode::LiteralNotAllowed,
            span,
            format!("'{text}' literal not allowed"),
        )
    }

    pub fn start(&self) -> usize {
        usize::from(self.span.start)
    }

    pub fn length(&self) -> usize {
        self.span.len()
    }
}

/// Wire shape shared with editors and test harnesses.
#[derive(Serialize)]
struct WireDiagnostic<'a> {
    message: &'a str,
    start: usize,
    length: usize,
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireDiagnostic {
            message: &self.message,
            start: self.start(),
            length: self.length(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_message() {
        let diag = Diagnostic::new(ErrorCode::TrailingComma, Span::from_len(14, 1));
        assert_eq!(diag.message, "Trailing comma not allowed");
        assert_eq!(diag.kind, DiagnosticKind::Mode);
        assert_eq!(diag.start(), 14);
        assert_eq!(diag.length(), 1);
    }

    #[test]
    fn test_templated_messages() {
        let span = Span::from_len(0, 1);
        assert_eq!(Diagnostic::unexpected('}', span).message, "'}' unexpected");
        assert_eq!(Diagnostic::expected("]", span).message, "']' expected");
        assert_eq!(
            Diagnostic::literal_not_allowed("-Infinity", span).message,
            "'-Infinity' literal not allowed"
        );
    }

    #[test]
    fn test_wire_shape() {
        let diag = Diagnostic::new(ErrorCode::InvalidNumber, Span::from_len(9, 2));
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Invalid number", "start": 9, "length": 2 })
        );
    }
}
