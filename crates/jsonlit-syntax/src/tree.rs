//! The parse result.
//! 解析结果。

use crate::{JsonKind, JsonOptions, Node, Token};
use jsonlit_common::VirtualChar;
use jsonlit_diagnostic::Diagnostic;

/// A lossless syntax tree plus its diagnostics.
///
/// The root is always a `CompilationUnit` whose children are a `Sequence`
/// and the `EndOfFile` token. Concatenating every trivia and token in
/// document order reproduces the parsed characters exactly.
/// 无损语法树及其诊断信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
    diagnostics: Vec<Diagnostic>,
    options: JsonOptions,
}

impl Tree {
    pub fn new(root: Node, diagnostics: Vec<Diagnostic>, options: JsonOptions) -> Self {
        Self {
            root,
            diagnostics,
            options,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Diagnostics sorted by start offset.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// The diagnostic an editor would surface first.
    pub fn first_diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Top-level values.
    pub fn values(&self) -> &[crate::NodeOrToken] {
        self.root
            .sequence()
            .map(|sequence| sequence.children.as_slice())
            .unwrap_or_default()
    }

    pub fn end_of_file(&self) -> Option<&Token> {
        self.root
            .children
            .last()
            .and_then(crate::NodeOrToken::as_token)
            .filter(|token| token.kind == JsonKind::EndOfFile)
    }

    /// Every virtual character in document order.
    /// 按文档顺序排列的所有虚拟字符。
    pub fn virtual_chars(&self) -> Vec<VirtualChar> {
        let mut chars = Vec::new();
        self.root
            .walk_tokens(&mut |token| chars.extend(token.all_chars().copied()));
        chars
    }

    /// The text the tree was parsed from.
    pub fn to_text(&self) -> String {
        self.virtual_chars().iter().map(|vc| vc.value).collect()
    }
}
