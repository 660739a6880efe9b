//! Complexity Lens CLI
//!
//! Offline Big-O estimation and syntax highlighting for Python-like snippets.
//!
//! # Usage
//!
//! ```bash
//! # Estimate a file (or stdin when FILE is omitted or `-`)
//! cargo run --bin complexity-lens -- estimate snippet.py --explain
//!
//! # Highlight as HTML with prefixed classes
//! cargo run --bin complexity-lens -- highlight snippet.py --class-prefix tok-
//!
//! # Parse an analysis report
//! cargo run --bin complexity-lens -- report analysis.md --format html
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use complexity_core::config::Validatable;
use complexity_core::{AnalysisReport, CostAnalyzer, EstimatorConfig, Highlighter, Result};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "complexity-lens")]
#[command(about = "Offline Big-O estimation and syntax highlighting", long_about = None)]
struct Cli {
    /// YAML configuration file (schema v1)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the time complexity of a snippet
    Estimate {
        /// Input file, stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Name the rule that produced the estimate
        #[arg(long)]
        explain: bool,

        #[arg(long, value_enum, default_value_t = EstimateFormat::Text)]
        format: EstimateFormat,
    },

    /// Print a snippet as highlighted HTML
    Highlight {
        /// Input file, stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Prefix for token class names (overrides the config file)
        #[arg(long)]
        class_prefix: Option<String>,
    },

    /// Parse a free-text analysis report
    Report {
        /// Input file, stdin when omitted or `-`
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EstimateFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Json,
    Html,
}

#[derive(Serialize)]
struct EstimateOutput {
    complexity: &'static str,
    rule: &'static str,
    max_depth: usize,
    slow: bool,
    explanation: String,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => EstimatorConfig::from_yaml(path)?,
        None => EstimatorConfig::default(),
    };

    match cli.command {
        Commands::Estimate {
            file,
            explain,
            format,
        } => run_estimate(&config, file.as_deref(), explain, format)?,
        Commands::Highlight { file, class_prefix } => {
            run_highlight(&config, file.as_deref(), class_prefix)?
        }
        Commands::Report { file, format } => run_report(&config, file.as_deref(), format)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("Reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run_estimate(
    config: &EstimatorConfig,
    file: Option<&Path>,
    explain: bool,
    format: EstimateFormat,
) -> Result<()> {
    let code = read_input(file)?;
    let estimate = CostAnalyzer::new(config).analyze(&code);

    match format {
        EstimateFormat::Text if explain => println!("{}", estimate.explanation()),
        EstimateFormat::Text => println!("{}", estimate.label()),
        EstimateFormat::Json => {
            let output = EstimateOutput {
                complexity: estimate.label(),
                rule: estimate.rule.as_str(),
                max_depth: estimate.max_depth,
                slow: estimate.is_slow(),
                explanation: estimate.explanation(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn run_highlight(
    config: &EstimatorConfig,
    file: Option<&Path>,
    class_prefix: Option<String>,
) -> Result<()> {
    let mut highlight = config.highlight.clone();
    if let Some(prefix) = class_prefix {
        highlight = highlight.class_prefix(prefix);
        highlight.validate()?;
    }

    let code = read_input(file)?;
    print!("{}", Highlighter::from_config(&highlight).render(&code));
    Ok(())
}

fn run_report(config: &EstimatorConfig, file: Option<&Path>, format: ReportFormat) -> Result<()> {
    let text = read_input(file)?;
    let report = AnalysisReport::parse(&text);

    if report.is_empty() {
        tracing::warn!("No report fields or code blocks recognized");
    }

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Html => {
            print!(
                "{}",
                report.render_html(&Highlighter::from_config(&config.highlight))
            )
        }
    }

    Ok(())
}
