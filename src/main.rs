// Cross-document consistency checker.
// Reads a document set as JSON and prints a verification report.

use chrono::Local;
use clap::{Parser, ValueEnum};
use crossdoc::{
    models::ValidatorConfig,
    processing::load_document_set,
    report::{render_html, render_text},
    utils::{CrossDocError, LogSink},
    DocumentSetValidator, VerificationResult,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser)]
#[command(name = "crossdoc")]
#[command(about = "Check a set of extracted identity and financial documents for consistency", long_about = None)]
struct Cli {
    /// JSON file holding the document set
    file: PathBuf,

    /// JSON file overriding the similarity thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn run(cli: &Cli) -> Result<VerificationResult, CrossDocError> {
    let config = match &cli.config {
        Some(path) => ValidatorConfig::from_file(path)?,
        None => ValidatorConfig::default(),
    };

    let documents = load_document_set(&cli.file)?;
    log::info!("Loaded {} document(s) from {:?}", documents.len(), cli.file);

    let validator = DocumentSetValidator::with_config(&config).with_sink(Arc::new(LogSink));
    let result = validator.validate(&documents);

    match cli.format {
        OutputFormat::Text => {
            print!("{}", render_text(&result));
            println!("\nGenerated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        }
        OutputFormat::Html => print!("{}", render_html(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(result)
}

/// 0 when the set is consistent, 1 when it is not, 2 when it could not be read.
fn exit_status(outcome: &Result<VerificationResult, CrossDocError>) -> u8 {
    match outcome {
        Ok(result) if result.is_valid => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = run(&cli);
    if let Err(err) = &outcome {
        eprintln!("Error validating document set: {}", err);
    }
    ExitCode::from(exit_status(&outcome))
}
