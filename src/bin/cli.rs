use teller::{TellerConfig, menu::Menu, report::ReportFormat};

use std::io;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Identifier given to the first account opened
    #[clap(long, value_parser)]
    first_id: Option<u32>,

    /// How to render the account listing
    #[clap(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Log filter, e.g. "teller=debug" (RUST_LOG takes precedence)
    #[clap(long, value_parser)]
    log: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<TellerConfig> {
        let mut config = TellerConfig::load(self.config.as_deref())?;
        if let Some(first_id) = self.first_id {
            config.first_account_id = first_id;
        }
        if let Some(format) = self.format {
            config.report = format;
        }
        if let Some(filter) = &self.log {
            config.log_filter = filter.clone();
        }
        Ok(config)
    }
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = args.resolve_config()?;
    init_logging(&config.log_filter);
    info!("starting with first account id {}", config.first_account_id);

    let stdin = io::stdin();
    let mut menu = Menu::new(
        config.build_ledger(),
        config.report.renderer(),
        stdin.lock(),
        io::stdout());
    menu.run().with_context(|| "terminal I/O failed")?;

    info!("closing with {} account(s)", menu.ledger().len());
    Ok(())
}
