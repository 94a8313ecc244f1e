//! Error recovery state for the parser.
//!
//! A closing delimiter ends a sequence only when some enclosing construct
//! opened that delimiter. Any other closer is consumed as a stray `Text`
//! value, so `[}` keeps parsing inside the array while `{ [ }` abandons the
//! array and lets the object close.

use jsonlit_syntax::JsonKind;

/// Delimiter kinds tracked during recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Paren,   // )
    Bracket, // ]
    Brace,   // }
}

impl DelimiterKind {
    /// The delimiter a closing token belongs to.
    pub fn from_closing(kind: JsonKind) -> Option<DelimiterKind> {
        match kind {
            JsonKind::CloseParenToken => Some(DelimiterKind::Paren),
            JsonKind::CloseBracketToken => Some(DelimiterKind::Bracket),
            JsonKind::CloseBraceToken => Some(DelimiterKind::Brace),
            _ => None,
        }
    }
}

/// Tracks the delimiters of the constructs currently being parsed.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    stack: Vec<DelimiterKind>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DelimiterKind) {
        self.stack.push(kind);
    }

    pub fn pop(&mut self) -> Option<DelimiterKind> {
        self.stack.pop()
    }

    /// Check if we're inside a specific delimiter.
    pub fn inside(&self, kind: DelimiterKind) -> bool {
        self.stack.contains(&kind)
    }

    /// Does `token` close one of the enclosing constructs?
    pub fn closes_enclosing(&self, token: JsonKind) -> bool {
        DelimiterKind::from_closing(token).is_some_and(|kind| self.inside(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_stack() {
        let mut stack = DelimiterStack::new();
        assert!(!stack.inside(DelimiterKind::Brace));

        stack.push(DelimiterKind::Brace);
        stack.push(DelimiterKind::Bracket);
        assert!(stack.inside(DelimiterKind::Brace));
        assert!(!stack.inside(DelimiterKind::Paren));

        assert_eq!(stack.pop(), Some(DelimiterKind::Bracket));
        assert!(!stack.inside(DelimiterKind::Bracket));
        assert_eq!(stack.pop(), Some(DelimiterKind::Brace));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_closes_enclosing() {
        let mut stack = DelimiterStack::new();
        assert!(!stack.closes_enclosing(JsonKind::CloseBraceToken));

        stack.push(DelimiterKind::Brace);
        stack.push(DelimiterKind::Bracket);
        // Any enclosing level counts, not just the innermost one.
        assert!(stack.closes_enclosing(JsonKind::CloseBraceToken));
        assert!(stack.closes_enclosing(JsonKind::CloseBracketToken));
        assert!(!stack.closes_enclosing(JsonKind::CloseParenToken));
        assert!(!stack.closes_enclosing(JsonKind::CommaToken));
    }

    #[test]
    fn test_from_closing() {
        assert_eq!(
            DelimiterKind::from_closing(JsonKind::CloseParenToken),
            Some(DelimiterKind::Paren)
        );
        assert_eq!(DelimiterKind::from_closing(JsonKind::OpenBraceToken), None);
    }
}
