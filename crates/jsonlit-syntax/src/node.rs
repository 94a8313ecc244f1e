//! Syntax tree nodes.
//! 语法树节点。

use crate::{JsonKind, Token};

/// A child of a node: either another node or a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOrToken {
    Node(Node),
    Token(Token),
}

impl NodeOrToken {
    pub fn kind(&self) -> JsonKind {
        match self {
            NodeOrToken::Node(node) => node.kind,
            NodeOrToken::Token(token) => token.kind,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            NodeOrToken::Token(token) => Some(token),
            NodeOrToken::Node(_) => None,
        }
    }

    /// First token in document order that owns characters.
    pub fn first_present_token(&self) -> Option<&Token> {
        match self {
            NodeOrToken::Node(node) => node.first_present_token(),
            NodeOrToken::Token(token) if !token.is_missing && !token.chars.is_empty() => Some(token),
            NodeOrToken::Token(_) => None,
        }
    }
}

impl From<Node> for NodeOrToken {
    fn from(node: Node) -> Self {
        NodeOrToken::Node(node)
    }
}

impl From<Token> for NodeOrToken {
    fn from(token: Token) -> Self {
        NodeOrToken::Token(token)
    }
}

/// An immutable syntax node: a kind and its ordered children.
///
/// Shapes by kind:
/// - `CompilationUnit`: `Sequence`, `EndOfFile`
/// - `Object`: `{`, `Sequence`, `}`
/// - `Array`: `[`, `Sequence`, `]`
/// - `Constructor`: `new`, name, `(`, `Sequence`, `)`
/// - `Property`: name, `:`, value
/// - `Literal`, `Text`, `CommaValue`: one token
/// - `NegativeLiteral`: `-`, `Infinity`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: JsonKind,
    pub children: Vec<NodeOrToken>,
}

impl Node {
    pub fn new(kind: JsonKind, children: Vec<NodeOrToken>) -> Self {
        Self { kind, children }
    }

    pub fn child_node(&self, index: usize) -> Option<&Node> {
        self.children.get(index).and_then(NodeOrToken::as_node)
    }

    pub fn child_token(&self, index: usize) -> Option<&Token> {
        self.children.get(index).and_then(NodeOrToken::as_token)
    }

    /// The `Sequence` child of a container or compilation unit.
    pub fn sequence(&self) -> Option<&Node> {
        self.children
            .iter()
            .filter_map(NodeOrToken::as_node)
            .find(|node| node.kind == JsonKind::Sequence)
    }

    /// The closing token of an object, array or constructor.
    pub fn close_token(&self) -> Option<&Token> {
        match self.kind {
            JsonKind::Object | JsonKind::Array | JsonKind::Constructor => {
                self.children.last().and_then(NodeOrToken::as_token)
            }
            _ => None,
        }
    }

    /// Name token of a property or constructor.
    pub fn name_token(&self) -> Option<&Token> {
        match self.kind {
            JsonKind::Property => self.child_token(0),
            JsonKind::Constructor => self.child_token(1),
            _ => None,
        }
    }

    pub fn colon_token(&self) -> Option<&Token> {
        match self.kind {
            JsonKind::Property => self.child_token(1),
            _ => None,
        }
    }

    /// Value of a property.
    pub fn value(&self) -> Option<&Node> {
        match self.kind {
            JsonKind::Property => self.child_node(2),
            _ => None,
        }
    }

    /// First token in document order that owns characters.
    pub fn first_present_token(&self) -> Option<&Token> {
        self.children.iter().find_map(NodeOrToken::first_present_token)
    }

    /// Visit every token in document order.
    /// 按文档顺序访问每个 token。
    pub fn walk_tokens<'a>(&'a self, f: &mut impl FnMut(&'a Token)) {
        for child in &self.children {
            match child {
                NodeOrToken::Node(node) => node.walk_tokens(f),
                NodeOrToken::Token(token) => f(token),
            }
        }
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.walk_tokens(&mut |token| tokens.push(token));
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlit_common::VirtualCharSequence;

    fn token(kind: JsonKind, text: &str, base: usize) -> Token {
        Token::new(kind, VirtualCharSequence::from_str_at(text, base).to_vec())
    }

    fn sample_property() -> Node {
        let value = Node::new(
            JsonKind::Literal,
            vec![token(JsonKind::NumberToken, "0", 4).into()],
        );
        Node::new(
            JsonKind::Property,
            vec![
                token(JsonKind::StringToken, "'a'", 0).into(),
                token(JsonKind::ColonToken, ":", 3).into(),
                value.into(),
            ],
        )
    }

    #[test]
    fn test_property_accessors() {
        let property = sample_property();
        assert_eq!(property.name_token().map(Token::text), Some("'a'".to_string()));
        assert_eq!(property.colon_token().map(|t| t.kind), Some(JsonKind::ColonToken));
        assert_eq!(property.value().map(|v| v.kind), Some(JsonKind::Literal));
        assert_eq!(property.close_token(), None);
    }

    #[test]
    fn test_tokens_in_order() {
        let property = sample_property();
        let texts: Vec<String> = property.tokens().into_iter().map(Token::text).collect();
        assert_eq!(texts, ["'a'", ":", "0"]);
    }

    #[test]
    fn test_first_present_token_skips_missing() {
        let node = Node::new(
            JsonKind::Sequence,
            vec![
                Node::new(
                    JsonKind::CommaValue,
                    vec![Token::missing(JsonKind::CommaToken).into()],
                )
                .into(),
                token(JsonKind::TextToken, "x", 0).into(),
            ],
        );
        assert_eq!(node.first_present_token().map(Token::text), Some("x".to_string()));
    }
}
