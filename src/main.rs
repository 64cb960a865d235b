use clap::{Parser, ValueEnum};
use escrow_split::application::engine::EscrowEngine;
use escrow_split::config::Settings;
use escrow_split::domain::breakdown::Rounding;
use escrow_split::domain::ports::PaymentStoreBox;
use escrow_split::infrastructure::in_memory::InMemoryPaymentStore;
use escrow_split::interfaces::csv::breakdown_writer::BreakdownWriter;
use escrow_split::interfaces::csv::event_reader::PaymentEventReader;
use escrow_split::interfaces::json;
use escrow_split::logging;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment events CSV file
    input: PathBuf,

    /// TOML file with a [fees] section
    #[arg(long)]
    config: Option<PathBuf>,

    /// Platform fee as a fraction of the service amount (e.g. 0.15)
    #[arg(long)]
    fee_rate: Option<Decimal>,

    /// How fee and payout midpoints are rounded to cents
    #[arg(long, value_enum)]
    rounding: Option<Rounding>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path).into_diagnostic()?,
        None => Settings::default(),
    }
    .with_overrides(cli.fee_rate, cli.rounding)
    .into_diagnostic()?;
    tracing::info!(
        fee_rate = %settings.fee_rate.value(),
        rounding = ?settings.rounding,
        "Processing payment events"
    );

    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let engine = EscrowEngine::new(store, settings.calculator());

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentEventReader::new(file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Err(e) = engine.process_event(event).await {
                    tracing::warn!(error = %e, "Error processing payment event");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error reading payment event");
            }
        }
    }

    let records = engine.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => BreakdownWriter::new(stdout.lock())
            .write_records(&records)
            .into_diagnostic()?,
        OutputFormat::Json => json::write_breakdowns(stdout.lock(), &records).into_diagnostic()?,
    }

    Ok(())
}
