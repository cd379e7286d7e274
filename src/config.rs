use std::{fs, path::Path};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

use crate::core::{AccountId, Ledger};
use crate::report::ReportFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TellerConfig {
    /// Identifier handed to the first account opened
    pub first_account_id: AccountId,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
    pub report: ReportFormat
}

impl Default for TellerConfig {
    fn default() -> Self {
        TellerConfig {
            first_account_id: Ledger::FIRST_ACCOUNT_ID,
            log_filter: String::from("info"),
            report: ReportFormat::Text
        }
    }
}

impl TellerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(&filepath)
            .with_context(|| format!("failed to read config file {}", filepath.as_ref().display()))?;
        Self::parse(&file_content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Reads the file when one is given, defaults otherwise.
    pub fn load(filepath: Option<&Path>) -> anyhow::Result<Self> {
        match filepath {
            Some(path) => Self::read(path),
            None => Ok(Self::default())
        }
    }

    pub fn build_ledger(&self) -> Ledger {
        Ledger::with_first_id(self.first_account_id)
    }
}


#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::TellerConfig;
    use crate::report::ReportFormat;

    #[test]
    fn empty_file_gives_defaults() {
        let config = TellerConfig::parse("").unwrap();
        assert_eq!(config, TellerConfig::default());
        assert_eq!(config.first_account_id, 1000);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn full_file() {
        let config = TellerConfig::parse(r#"
            first_account_id = 5000
            log_filter = "teller=debug"
            report = "json"
        "#).unwrap();

        assert_eq!(config.first_account_id, 5000);
        assert_eq!(config.log_filter, "teller=debug");
        assert_eq!(config.report, ReportFormat::Json);
    }

    #[test]
    fn bad_value_is_an_error() {
        let err = TellerConfig::parse("first_account_id = \"many\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = TellerConfig::load(Some(Path::new("/nonexistent/teller.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn no_file_gives_defaults() {
        assert_eq!(TellerConfig::load(None).unwrap(), TellerConfig::default());
    }

    #[test]
    fn ledger_starts_at_configured_id() {
        let config = TellerConfig { first_account_id: 42, ..TellerConfig::default() };
        let mut ledger = config.build_ledger();
        assert_eq!(ledger.open_account("Alice").unwrap().id(), 42);
    }
}
