//! Neraca report CLI
//!
//! Loads a ledger snapshot, derives the financial statements and prints them
//! as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neraca_core::reports::{ReportGenerator, ReportOptions};
use neraca_shared::{AppConfig, UnmatchedPolicy};
use neraca_store::MemoryStore;

#[derive(Parser, Debug)]
#[command(name = "neraca", version, about = "Financial reports from a ledger snapshot")]
struct Cli {
    /// Snapshot file to read (defaults to `store.snapshot_path` from config)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Fail when journal entries reference accounts missing from the chart
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-account debit, credit and net balances with grand totals
    TrialBalance,

    /// Revenues, expenses and net income
    IncomeStatement,

    /// Assets, liabilities and equity including net income
    BalanceSheet,

    /// Account and entry counts with overall debit/credit totals
    Summary,

    /// Trial balance, income statement and balance sheet together
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neraca=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("loading configuration")?;

    let path = cli
        .snapshot
        .unwrap_or_else(|| PathBuf::from(&config.store.snapshot_path));
    let store = MemoryStore::open(&path, &config.store)
        .await
        .with_context(|| format!("opening snapshot {}", path.display()))?;
    info!(path = %path.display(), "Snapshot loaded");

    let mut options = ReportOptions::from(&config.reports);
    if cli.strict {
        options.unmatched_policy = UnmatchedPolicy::Reject;
    }
    let generator = ReportGenerator::new(Arc::new(store), options);

    match cli.command {
        Command::TrialBalance => print_json(&generator.generate().await?.trial_balance),
        Command::IncomeStatement => print_json(&generator.generate().await?.income_statement),
        Command::BalanceSheet => print_json(&generator.generate().await?.balance_sheet),
        Command::Summary => print_json(&generator.summary().await?),
        Command::All => print_json(&generator.generate().await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("rendering report")?;
    println!("{rendered}");
    Ok(())
}
