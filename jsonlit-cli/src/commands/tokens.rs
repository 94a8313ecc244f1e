//! The `jsonlit tokens` command.
//! `jsonlit tokens` 命令。

use super::{Settings, load};
use crate::error::CliError;
use jsonlit_syntax::{Token, Tree};

/// Print one line per token in document order.
/// 按文档顺序每行打印一个 token。
pub fn run(file: &str, settings: &Settings) -> Result<(), CliError> {
    let (_, tree) = load(file, settings)?;
    println!("{}", render(&tree));
    Ok(())
}

pub fn render(tree: &Tree) -> String {
    tree.root()
        .tokens()
        .into_iter()
        .map(token_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn token_line(token: &Token) -> String {
    let span = match token.span() {
        Some(span) => format!("{}..{}", span.start.0, span.end.0),
        None => "-".to_string(),
    };
    let missing = if token.is_missing { " (missing)" } else { "" };
    format!("{:<22} {:<10} {:?}{}", token.kind.to_string(), span, token.text(), missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlit_syntax::JsonOptions;

    #[test]
    fn test_render_tokens() {
        let tree = jsonlit_parser::parse_str("[1", JsonOptions::Loose).expect("tree");
        let lines: Vec<String> = render(&tree)
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        assert_eq!(
            lines,
            [
                "OpenBracketToken 0..1 \"[\"",
                "NumberToken 1..2 \"1\"",
                "CloseBracketToken - \"\" (missing)",
                "EndOfFile - \"\"",
            ]
        );
    }
}
