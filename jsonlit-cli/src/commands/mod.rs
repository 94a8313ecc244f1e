//! CLI command implementations.

pub mod check;
pub mod tokens;
pub mod tree;

use crate::error::CliError;
use crate::output;
use jsonlit_common::VirtualCharSequence;
use jsonlit_parser::try_parse;
use jsonlit_syntax::{JsonOptions, Tree};
use std::io::Read;

/// Settings shared by every command.
/// 所有命令共享的设置。
pub struct Settings {
    pub options: JsonOptions,
    pub verbose: bool,
    pub quiet: bool,
}

/// Read a file, or stdin when `file` is `-`.
/// 读取文件；`file` 为 `-` 时读取标准输入。
pub fn read_input(file: &str) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: display_name(file).to_string(),
        source,
    };

    if file == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        Ok(source)
    } else {
        std::fs::read_to_string(file).map_err(read_error)
    }
}

/// Read and parse an input, using byte offsets as source positions.
/// 读取并解析输入，以字节偏移作为源码位置。
pub fn load(file: &str, settings: &Settings) -> Result<(String, Tree), CliError> {
    tracing::debug!(input = display_name(file), mode = %settings.options, "loading input");
    let source = read_input(file)?;
    let chars = VirtualCharSequence::from_str(&source);
    let tree = try_parse(&chars, settings.options).map_err(|source| CliError::Parse {
        path: display_name(file).to_string(),
        source,
    })?;

    if settings.verbose {
        output::info(&format!(
            "parsed {} chars in {} mode, {} diagnostic(s)",
            chars.len(),
            settings.options,
            tree.diagnostics().len()
        ));
    }
    Ok((source, tree))
}

/// Name used for an input in messages.
pub fn display_name(file: &str) -> &str {
    if file == "-" { "<stdin>" } else { file }
}
