//! Structural dump of trees and diagnostics.
//! 语法树和诊断信息的结构化输出。
//!
//! Produces the XML-like text used for golden comparisons:
//! 生成用于黄金文件比较的类 XML 文本：
//!
//! ```text
//! <Tree>
//!   <CompilationUnit>
//!     <Sequence>
//!       <Literal>
//!         <NumberToken>1</NumberToken>
//!       </Literal>
//!     </Sequence>
//!     <EndOfFile />
//!   </CompilationUnit>
//! </Tree>
//! ```

use crate::{Node, NodeOrToken, Token, Tree, Trivia};
use jsonlit_diagnostic::Diagnostic;

/// Indenting line writer.
/// 带缩进的行写入器。
struct Printer {
    /// Output buffer. / 输出缓冲区。
    output: String,
    /// Current indentation level. / 当前缩进级别。
    indent_level: usize,
    /// Whether we're at the start of a line. / 是否在行首。
    at_line_start: bool,
}

impl Printer {
    const INDENT: &'static str = "  ";

    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Get the output without the final newline.
    /// 获取输出（去掉末尾换行）。
    fn finish(mut self) -> String {
        while self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }

    fn write(&mut self, s: &str) {
        if self.at_line_start && !s.is_empty() {
            self.output.push_str(&Self::INDENT.repeat(self.indent_level));
            self.at_line_start = false;
        }
        self.output.push_str(s);
    }

    fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

/// Render a tree as an indented element dump.
/// 将语法树渲染为缩进的元素输出。
pub fn dump(tree: &Tree) -> String {
    let mut printer = Printer::new();
    printer.writeln("<Tree>");
    printer.indent();
    dump_node(&mut printer, tree.root());
    printer.dedent();
    printer.writeln("</Tree>");
    printer.finish()
}

/// Render diagnostics; empty when there are none.
/// 渲染诊断信息；没有诊断时返回空字符串。
pub fn dump_diagnostics(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let mut printer = Printer::new();
    printer.writeln("<Diagnostics>");
    printer.indent();
    for diag in diagnostics {
        printer.writeln(&format!(
            "<Diagnostic Message=\"{}\" Start=\"{}\" Length=\"{}\" />",
            escape_attribute(&diag.message),
            diag.start(),
            diag.length()
        ));
    }
    printer.dedent();
    printer.writeln("</Diagnostics>");
    printer.finish()
}

fn dump_node(printer: &mut Printer, node: &Node) {
    if node.children.is_empty() {
        printer.writeln(&format!("<{} />", node.kind));
        return;
    }

    printer.writeln(&format!("<{}>", node.kind));
    printer.indent();
    for child in &node.children {
        match child {
            NodeOrToken::Node(child) => dump_node(printer, child),
            NodeOrToken::Token(token) => dump_token(printer, token),
        }
    }
    printer.dedent();
    printer.writeln(&format!("</{}>", node.kind));
}

fn dump_token(printer: &mut Printer, token: &Token) {
    let mut inline = escape_text(&token.text());
    if !token.trailing_trivia.is_empty() {
        inline.push_str(&inline_trivia(&token.trailing_trivia));
    }

    if token.leading_trivia.is_empty() {
        if inline.is_empty() {
            printer.writeln(&format!("<{} />", token.kind));
        } else {
            printer.writeln(&format!("<{kind}>{inline}</{kind}>", kind = token.kind));
        }
        return;
    }

    // Leading trivia goes on its own lines; the token text follows the
    // closing `</Trivia>` on the same line.
    printer.writeln(&format!("<{}>", token.kind));
    printer.indent();
    printer.writeln("<Trivia>");
    printer.indent();
    for trivia in &token.leading_trivia {
        printer.writeln(&trivia_element(trivia));
    }
    printer.dedent();
    if inline.is_empty() {
        printer.writeln("</Trivia>");
        printer.dedent();
        printer.writeln(&format!("</{}>", token.kind));
    } else {
        printer.write("</Trivia>");
        printer.write(&inline);
        printer.dedent();
        printer.writeln(&format!("</{}>", token.kind));
    }
}

fn inline_trivia(trivia: &[Trivia]) -> String {
    let mut out = String::from("<Trivia>");
    for item in trivia {
        out.push_str(&trivia_element(item));
    }
    out.push_str("</Trivia>");
    out
}

fn trivia_element(trivia: &Trivia) -> String {
    format!(
        "<{kind}>{text}</{kind}>",
        kind = trivia.kind,
        text = escape_text(&trivia.text())
    )
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attribute(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
