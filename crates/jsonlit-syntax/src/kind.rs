//! Syntax kinds shared by nodes, tokens and trivia.
//! 节点、token 和 trivia 共用的语法类型。

use std::fmt;

/// The kind of a node, token or trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    // Nodes
    CompilationUnit,
    Sequence,
    Object,
    Array,
    Property,
    Constructor,
    Literal,
    NegativeLiteral,
    /// A comma with no operand: array holes, trailing commas, absent values.
    CommaValue,
    /// Content no production accepts.
    Text,

    // Tokens
    EndOfFile,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    OpenParenToken,
    CloseParenToken,
    CommaToken,
    ColonToken,
    StringToken,
    NumberToken,
    TextToken,
    TrueLiteralToken,
    FalseLiteralToken,
    NullLiteralToken,
    UndefinedLiteralToken,
    NaNLiteralToken,
    InfinityLiteralToken,
    MinusToken,
    NewKeyword,

    // Trivia
    WhitespaceTrivia,
    EndOfLineTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
}

impl JsonKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            JsonKind::WhitespaceTrivia
                | JsonKind::EndOfLineTrivia
                | JsonKind::SingleLineCommentTrivia
                | JsonKind::MultiLineCommentTrivia
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            JsonKind::SingleLineCommentTrivia | JsonKind::MultiLineCommentTrivia
        )
    }

    /// Literal tokens recognised from keywords.
    pub fn is_keyword_literal(self) -> bool {
        matches!(
            self,
            JsonKind::TrueLiteralToken
                | JsonKind::FalseLiteralToken
                | JsonKind::NullLiteralToken
                | JsonKind::UndefinedLiteralToken
                | JsonKind::NaNLiteralToken
                | JsonKind::InfinityLiteralToken
        )
    }

    /// Tokens that form a `Literal` node.
    pub fn is_literal_token(self) -> bool {
        matches!(self, JsonKind::StringToken | JsonKind::NumberToken) || self.is_keyword_literal()
    }

    /// Tokens made of a greedy run of word characters.
    pub fn is_word_token(self) -> bool {
        matches!(
            self,
            JsonKind::TextToken | JsonKind::NumberToken | JsonKind::NewKeyword
        ) || self.is_keyword_literal()
    }

    /// Literal keywords that only loose mode accepts.
    pub fn is_loose_only_literal(self) -> bool {
        matches!(
            self,
            JsonKind::UndefinedLiteralToken | JsonKind::NaNLiteralToken | JsonKind::InfinityLiteralToken
        )
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_variant_name() {
        assert_eq!(JsonKind::CommaValue.to_string(), "CommaValue");
        assert_eq!(JsonKind::NaNLiteralToken.to_string(), "NaNLiteralToken");
    }

    #[test]
    fn test_categories() {
        assert!(JsonKind::MultiLineCommentTrivia.is_trivia());
        assert!(JsonKind::MultiLineCommentTrivia.is_comment());
        assert!(!JsonKind::WhitespaceTrivia.is_comment());
        assert!(JsonKind::StringToken.is_literal_token());
        assert!(!JsonKind::TextToken.is_literal_token());
        assert!(JsonKind::NewKeyword.is_word_token());
        assert!(JsonKind::NaNLiteralToken.is_loose_only_literal());
        assert!(!JsonKind::NullLiteralToken.is_loose_only_literal());
    }
}
