//! CLI errors.
//! CLI 错误。

use jsonlit_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot serialize diagnostics: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} diagnostic(s) found")]
    HasDiagnostics { count: usize },
}
