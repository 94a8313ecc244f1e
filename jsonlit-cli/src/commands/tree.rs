//! The `jsonlit tree` command.
//! `jsonlit tree` 命令。

use super::{Settings, load};
use crate::error::CliError;
use jsonlit_syntax::{Tree, dump, dump_diagnostics};

/// Print the structural dump of a file, followed by its diagnostics.
/// 打印文件的结构化输出及其诊断信息。
pub fn run(file: &str, settings: &Settings) -> Result<(), CliError> {
    let (_, tree) = load(file, settings)?;
    println!("{}", render(&tree));
    Ok(())
}

pub fn render(tree: &Tree) -> String {
    let mut out = dump(tree);
    let diagnostics = dump_diagnostics(tree.diagnostics());
    if !diagnostics.is_empty() {
        out.push('\n');
        out.push_str(&diagnostics);
    }
    out
}
