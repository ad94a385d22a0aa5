//! CLI for masking text from the terminal
//!
//! Runs the same analyzer as the HTTP server, reading text from the
//! argument list or stdin. `--samples` runs the built-in sample texts.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use masking::ai::OllamaGenerator;
use masking::{analyze_offline, AnalysisResult, Analyzer, ExtractionSource};
use server_core::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_TEXTS: [&str; 4] = [
    "Elon Musk is the CEO of Tesla, which is based in Austin, Texas.",
    "My name is John Doe and my email is john.doe@example.com. My SSN is 123-45-6789.",
    "Please contact me at 555-123-4567 or visit our office at 123 Main Street, New York, NY 10001.",
    "The server IP is 192.168.1.1 and my credit card number is 4111111111111111.",
];

#[derive(Parser)]
#[command(name = "mask_cli")]
#[command(about = "Mask names, locations and identifiers in text")]
struct Cli {
    /// Text to analyze (read from stdin when omitted)
    text: Option<String>,

    /// Use the pattern rules only; never contact the inference service
    #[arg(long)]
    offline: bool,

    /// Analyze the built-in sample texts
    #[arg(long, conflicts_with = "text")]
    samples: bool,

    /// Print each result as JSON
    #[arg(long)]
    json: bool,

    /// Override OLLAMA_MODEL
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let texts: Vec<String> = if cli.samples {
        SAMPLE_TEXTS.iter().map(|s| s.to_string()).collect()
    } else {
        vec![read_input(cli.text.clone())?]
    };

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(model) = cli.model.clone() {
        config.ollama_model = model;
    }

    let analyzer = if cli.offline {
        None
    } else {
        let generator = OllamaGenerator::from_config(&config.inference())
            .context("Failed to create inference client")?;
        Some(Analyzer::with_config(generator, config.analyzer()))
    };

    for (i, text) in texts.iter().enumerate() {
        let result = match &analyzer {
            Some(analyzer) => analyzer.analyze(text).await,
            None => analyze_offline(text),
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            if texts.len() > 1 {
                println!("{}", format!("=== Sample {} ===", i + 1).bright_blue().bold());
            }
            print_report(text, &result);
        }
    }

    Ok(())
}

fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

fn print_report(original: &str, result: &AnalysisResult) {
    println!("{}", "Original text:".bright_yellow());
    println!("{}", original.trim_end());
    println!();

    let source = match result.source {
        ExtractionSource::Model => "model".green(),
        ExtractionSource::Fallback => "fallback patterns".yellow(),
        ExtractionSource::None => "none".red(),
    };
    println!("{} {}", "Source:".bright_yellow(), source);

    if let Some(error) = &result.error {
        println!("{} {}", "Error:".red().bold(), error);
    }
    println!();

    println!("{}", "Masking table:".bright_yellow());
    println!("{}", result.table_markdown.trim_end());
    println!();

    println!("{}", "Masked text:".bright_yellow());
    println!("{}", result.masked_text.trim_end());
    println!();
}
