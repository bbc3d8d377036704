use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;

use oic_cli::{app, logging, report};

// ─── CLI definition ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// Offer-in-Compromise minimum offer calculator for Forms 433-A, 433-B and 656.
///
/// Reads a case file, computes the box ladder and the minimum offer, derives
/// the payment schedule and cross-checks any offer terms entered.
#[derive(Debug, Parser)]
#[command(name = "oic-calc", version, about, long_about = None)]
struct Cli {
    /// Case file (TOML) with assets, income, expenses and offer terms.
    #[arg(short, long)]
    case: PathBuf,

    /// Extra asset schedule (CSV) appended to the case file's assets.
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Engine settings (TOML) overriding the default multiplier tables.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output format for the calculation summary.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level or filter directive; overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let settings = app::load_settings(cli.settings.as_deref())?;
    let case = app::load_case(&cli.case, cli.assets.as_deref())?;
    debug!(form = case.variant.as_str(), "case loaded");

    let assessment = app::assess(&case, &settings)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_text(&assessment)?),
        OutputFormat::Toml => print!("{}", report::render_toml(&assessment)?),
    }

    if assessment.terms_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
