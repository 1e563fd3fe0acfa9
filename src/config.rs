use std::env;
use std::path::PathBuf;

use anyhow::bail;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl ExportConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            env::var("SCHEMA_OUTPUT").ok(),
            env::var("SCHEMA_PRETTY").ok(),
        )
    }

    pub fn from_vars(output: Option<String>, pretty: Option<String>) -> anyhow::Result<Self> {
        let output = output
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty() && o != "-")
            .map(PathBuf::from);
        let pretty = match pretty.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(v) => parse_flag(v)?,
        };
        Ok(Self { output, pretty })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("SCHEMA_PRETTY must be a boolean, got {other:?}"),
    }
}
