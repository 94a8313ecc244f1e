//! The `jsonlit check` command.
//! `jsonlit check` 命令。

use super::{Settings, display_name, load};
use crate::OutputFormat;
use crate::error::CliError;
use crate::output;
use jsonlit_diagnostic::emit;
use jsonlit_syntax::Tree;

/// Report the diagnostics of a file. Fails when there are any.
/// 报告文件的诊断信息；存在诊断时返回错误。
pub fn run(file: &str, format: OutputFormat, settings: &Settings) -> Result<(), CliError> {
    let (source, tree) = load(file, settings)?;
    let diagnostics = tree.diagnostics();

    match format {
        OutputFormat::Json => println!("{}", render_json(&tree)?),
        OutputFormat::Text => {
            for diag in diagnostics {
                emit(&source, display_name(file), diag);
            }
        }
    }

    if !diagnostics.is_empty() {
        return Err(CliError::HasDiagnostics {
            count: diagnostics.len(),
        });
    }

    if format == OutputFormat::Text && !settings.quiet {
        output::success("OK - No errors found");
    }
    Ok(())
}

/// Diagnostics as a JSON array of `{message, start, length}`.
pub fn render_json(tree: &Tree) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(tree.diagnostics())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlit_syntax::JsonOptions;

    #[test]
    fn test_render_json() {
        let tree = jsonlit_parser::parse_str("[1,]", JsonOptions::Strict).expect("tree");
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&tree).expect("json")).expect("valid json");
        assert_eq!(
            value,
            serde_json::json!([
                { "message": "Trailing comma not allowed", "start": 2, "length": 1 }
            ])
        );
    }

    #[test]
    fn test_render_json_empty() {
        let tree = jsonlit_parser::parse_str("{}", JsonOptions::Strict).expect("tree");
        assert_eq!(render_json(&tree).expect("json"), "[]");
    }
}
