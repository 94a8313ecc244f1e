//! Grammar strictness options.
//! 语法严格程度选项。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which grammar profile to parse with.
/// 解析所使用的语法配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonOptions {
    /// JSON.NET-style superset: comments, single quotes, unquoted names,
    /// constructors, `NaN`/`Infinity`/`undefined`, holes and trailing commas.
    /// JSON.NET 风格的超集。
    #[default]
    Loose,
    /// Close to ECMA-404 JSON.
    /// 接近 ECMA-404 的 JSON。
    Strict,
}

impl JsonOptions {
    pub fn is_strict(self) -> bool {
        self == JsonOptions::Strict
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonOptions::Loose => "loose",
            JsonOptions::Strict => "strict",
        }
    }
}

impl fmt::Display for JsonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown JSON mode '{0}' (expected 'loose' or 'strict')")]
pub struct UnknownMode(pub String);

impl FromStr for JsonOptions {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loose" => Ok(JsonOptions::Loose),
            "strict" => Ok(JsonOptions::Strict),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loose() {
        assert_eq!(JsonOptions::default(), JsonOptions::Loose);
        assert!(!JsonOptions::default().is_strict());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("strict".parse(), Ok(JsonOptions::Strict));
        assert_eq!(" Loose ".parse(), Ok(JsonOptions::Loose));
        assert_eq!(
            "json5".parse::<JsonOptions>(),
            Err(UnknownMode("json5".to_string()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&JsonOptions::Strict).unwrap(), "\"strict\"");
        let mode: JsonOptions = serde_json::from_str("\"loose\"").unwrap();
        assert_eq!(mode, JsonOptions::Loose);
    }
}
