mod config;
mod logging;
mod report;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;

use assetseed_core::{Document, region_codes};
use assetseed_generate::{
    Facet, GenerateOptions, GenerationEngine, GenerationError, GenerationResult, facet_counts,
    list_document_files, read_document,
};
use config::{ConfigError, GenerateConfig};
use logging::{LogFormat, LoggingError, init_logging};
use report::write_json_atomic;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "assetseed",
    version,
    about = "Generate synthetic asset documents for seeding a search index"
)]
struct Cli {
    /// Console log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Also append JSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Defaults to `generate` with built-in settings.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one JSON file per generated document.
    Generate(GenerateArgs),
    /// Count documents of an existing directory by facet.
    Stats(StatsArgs),
    /// Print the JSON schema of a document.
    Schema,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Number of documents to write.
    #[arg(long)]
    count: Option<usize>,
    /// Output directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Number of region codes to draw from.
    #[arg(long)]
    regions: Option<usize>,
    /// RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with generation settings; flags override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Write the run report as JSON to this path.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Directory of generated documents.
    #[arg(long, default_value = "data/semantic")]
    dir: PathBuf,
    /// Attribute to count by.
    #[arg(long, value_enum, default_value_t = FacetArg::Region)]
    facet: FacetArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FacetArg {
    Region,
    AssetType,
    Manufacturer,
    Location,
}

impl From<FacetArg> for Facet {
    fn from(value: FacetArg) -> Self {
        match value {
            FacetArg::Region => Facet::Region,
            FacetArg::AssetType => Facet::AssetType,
            FacetArg::Manufacturer => Facet::Manufacturer,
            FacetArg::Location => Facet::Location,
        }
    }
}

#[derive(Debug, Serialize)]
struct FacetStats {
    facet: Facet,
    documents: usize,
    counts: BTreeMap<String, u64>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_file.as_deref())?;

    match cli.command {
        None => run_generate(GenerateArgs::default()).map(|_| ()),
        Some(Command::Generate(args)) => run_generate(args).map(|_| ()),
        Some(Command::Stats(args)) => run_stats(args),
        Some(Command::Schema) => run_schema(),
    }
}

fn resolve_options(args: &GenerateArgs) -> Result<GenerateOptions, CliError> {
    let file = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            GenerateConfig::load(path)?
        }
        None => GenerateConfig::default(),
    };
    let flags = GenerateConfig {
        out_dir: args.out.clone(),
        count: args.count,
        region_count: args.regions,
        seed: args.seed,
    };
    Ok(file.merge(flags).into_options())
}

/// First summary line, built from the validated region range.
fn start_line(options: &GenerateOptions) -> Result<String, CliError> {
    let regions = region_codes(options.region_count)
        .map_err(|err| GenerationError::InvalidOptions(err.to_string()))?;
    let first = regions.first().map(String::as_str).unwrap_or_default();
    let last = regions.last().map(String::as_str).unwrap_or_default();
    Ok(format!(
        "Generating {} documents in {} with regions {first} to {last}...",
        options.count,
        options.out_dir.display()
    ))
}

fn finish_line(result: &GenerationResult) -> String {
    format!(
        "Successfully generated {} individual JSON files in {}",
        result.report.documents_written,
        result.out_dir.display()
    )
}

/// The report may not land among the documents it describes.
fn check_report_path(report: &Path, out_dir: &Path) -> Result<(), CliError> {
    let parent = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if std::path::absolute(parent)? == std::path::absolute(out_dir)? {
        return Err(CliError::InvalidConfig(format!(
            "report path {} must be outside the output directory {}",
            report.display(),
            out_dir.display()
        )));
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<GenerationResult, CliError> {
    let options = resolve_options(&args)?;
    if let Some(path) = &args.report {
        check_report_path(path, &options.out_dir)?;
    }

    println!("{}", start_line(&options)?);

    let result = GenerationEngine::new(options).run()?;

    if let Some(path) = &args.report {
        write_json_atomic(path, &result.report)?;
        tracing::info!(path = %path.display(), "report written");
    }

    println!("{}", finish_line(&result));
    Ok(result)
}

fn collect_stats(args: &StatsArgs) -> Result<FacetStats, CliError> {
    let files = list_document_files(&args.dir)?;
    let documents = files
        .iter()
        .map(|path| read_document(path))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(dir = %args.dir.display(), documents = documents.len(), "corpus loaded");

    let facet = Facet::from(args.facet);
    Ok(FacetStats {
        facet,
        documents: documents.len(),
        counts: facet_counts(&documents, facet),
    })
}

fn run_stats(args: StatsArgs) -> Result<(), CliError> {
    let stats = collect_stats(&args)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn document_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(Document)
}

fn run_schema() -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(&document_schema())?);
    Ok(())
}
