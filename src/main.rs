use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payswitch::application::checkout::Checkout;
use payswitch::domain::provider::Provider;
use payswitch::interfaces::csv::outcome_writer::OutcomeWriter;
use payswitch::interfaces::csv::request_reader::ChargeReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input charges CSV file
    input: PathBuf,

    /// Provider used for rows that leave the provider column empty
    #[arg(long)]
    provider: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "payswitch=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut checkout = match cli.provider.as_deref() {
        Some(name) => Checkout::with_default_provider(name.parse::<Provider>().into_diagnostic()?),
        None => Checkout::new(),
    };

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ChargeReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    for record in reader.records() {
        match record {
            Ok(record) => {
                let outcome = checkout.process(record);
                writer.write_outcome(&outcome).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading charge: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
