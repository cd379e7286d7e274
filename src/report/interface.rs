use clap::ValueEnum;
use serde::{Serialize, Deserialize};

use crate::core::Account;

/// Renders a snapshot of accounts for display.
pub trait AccountReport {
    fn render(&self, accounts: &[&Account]) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json
}

impl ReportFormat {
    pub fn renderer(self) -> Box<dyn AccountReport> {
        match self {
            ReportFormat::Text => Box::new(super::TextReport),
            ReportFormat::Json => Box::new(super::JsonReport)
        }
    }
}
