//! topsis-ranker command line.
//!
//! Reads a CSV decision matrix, ranks it and prints the result. With
//! `--email` the CSV result is also sent through Resend; a failed send is
//! reported on stderr without affecting the exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use topsis_ranker::adapters::{
    exporter_for, notifier_from_config, CsvResultExporter, CsvTableReader,
};
use topsis_ranker::application::{
    DeliveryStatus, RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
};
use topsis_ranker::config::{AppConfig, LoggingConfig};
use topsis_ranker::ports::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "topsis-ranker")]
#[command(about = "Rank alternatives on multiple criteria with TOPSIS")]
struct Args {
    /// CSV file: identifier column followed by numeric criterion columns
    file: PathBuf,

    /// Comma-separated criterion weights, e.g. "1,1,2"
    #[arg(long, allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' to maximize and '-' to minimize, e.g. "+,-,+"
    #[arg(long, allow_hyphen_values = true)]
    impacts: String,

    /// Email the CSV result to this address
    #[arg(long)]
    email: Option<String>,

    /// Output format: csv, html or json
    #[arg(long, default_value = "csv")]
    format: ExportFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("error: invalid configuration: {}", err);
        return ExitCode::from(2);
    }

    init_tracing(&config.logging);

    let table = match CsvTableReader::from_path(&args.file) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    let notifier = notifier_from_config(&config.email);
    let handler = RankAlternativesHandler::new(Arc::new(CsvResultExporter::default()), notifier);
    let command = RankAlternativesCommand {
        table,
        weights: args.weights,
        impacts: args.impacts,
        recipient: args.email,
    };

    let result = match handler.handle(command).await {
        Ok(result) => result,
        Err(RankAlternativesError::Validation(err)) => {
            eprintln!("error [{}]: {}", err.code(), err);
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(1);
        }
    };

    let output = if args.format == ExportFormat::Csv {
        Ok(result.attachment.clone())
    } else {
        exporter_for(args.format).export(&result.table)
    };
    match output {
        Ok(exported) => print!("{}", exported.content),
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(1);
        }
    }

    match &result.delivery {
        DeliveryStatus::Delivered { .. } => eprintln!("Result sent to email"),
        DeliveryStatus::Failed { warning } => eprintln!("warning: result not delivered: {}", warning),
        DeliveryStatus::Skipped => {}
    }

    ExitCode::SUCCESS
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
