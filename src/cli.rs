//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_codec::CsvCodec;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_codec::JsonCodec;
use crate::domain::config::{load_validation_limits, pretty_json};
use crate::domain::error::StocksentError;
use crate::domain::heatmap::HeatmapData;
use crate::domain::lag::LagData;
use crate::domain::line::LineData;
use crate::domain::record::{Record, RecordKind};
use crate::domain::validation::{
    validate_batch, RecordFailure, ValidationLimits, ValidationReport,
};
use crate::ports::record_codec::{RecordCodec, RecordFormat};

#[derive(Parser, Debug)]
#[command(
    name = "stocksent",
    about = "Validate and convert stock sentiment, lag, and heatmap records"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Line,
    #[value(alias = "correlation")]
    Lag,
    Heatmap,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Line => RecordKind::Line,
            KindArg::Lag => RecordKind::Lag,
            KindArg::Heatmap => RecordKind::Heatmap,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for RecordFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => RecordFormat::Json,
            FormatArg::Csv => RecordFormat::Csv,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every record in a file against the validation limits
    Validate {
        #[arg(short, long, value_enum)]
        kind: KindArg,
        input: PathBuf,
        /// Input format; inferred from the file extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Re-encode a record file in another format
    Convert {
        #[arg(short, long, value_enum)]
        kind: KindArg,
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum)]
        from: Option<FormatArg>,
        #[arg(long, value_enum)]
        to: Option<FormatArg>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    CheckConfig {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Settings shared by every subcommand, read once from the config file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    pub limits: ValidationLimits,
    pub pretty_json: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Validate {
            kind,
            input,
            format,
            config,
        } => run_validate(kind.into(), &input, format.map(Into::into), config.as_deref()),
        Command::Convert {
            kind,
            input,
            output,
            from,
            to,
            config,
        } => run_convert(
            kind.into(),
            &input,
            &output,
            from.map(Into::into),
            to.map(Into::into),
            config.as_deref(),
        ),
        Command::CheckConfig { config } => run_check_config(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            (&err).into()
        }
    }
}

pub fn load_options(config_path: Option<&Path>) -> Result<RunOptions, StocksentError> {
    let Some(path) = config_path else {
        return Ok(RunOptions::default());
    };
    tracing::info!("Loading config from {}", path.display());
    let adapter = FileConfigAdapter::from_file(path)?;
    Ok(RunOptions {
        limits: load_validation_limits(&adapter)?,
        pretty_json: pretty_json(&adapter),
    })
}

/// Explicit format wins; otherwise the path extension decides.
pub fn resolve_format(
    explicit: Option<RecordFormat>,
    path: &Path,
) -> Result<RecordFormat, StocksentError> {
    explicit
        .or_else(|| RecordFormat::from_path(path))
        .ok_or_else(|| StocksentError::UnknownFormat {
            path: path.display().to_string(),
        })
}

pub fn decode_records<R: Record>(
    format: RecordFormat,
    input: &str,
) -> Result<Vec<R>, StocksentError> {
    match format {
        RecordFormat::Json => JsonCodec::default().decode(input),
        RecordFormat::Csv => CsvCodec.decode(input),
    }
}

pub fn encode_records<R: Record>(
    format: RecordFormat,
    records: &[R],
    pretty: bool,
) -> Result<String, StocksentError> {
    match format {
        RecordFormat::Json => JsonCodec::new(pretty).encode(records),
        RecordFormat::Csv => CsvCodec.encode(records),
    }
}

fn read_input(path: &Path) -> Result<String, StocksentError> {
    fs::read_to_string(path).map_err(|e| {
        StocksentError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {}", path.display(), e),
        ))
    })
}

/// Decode `input` and validate every record in it.
pub fn validate_input(
    kind: RecordKind,
    input: &Path,
    format: Option<RecordFormat>,
    options: &RunOptions,
) -> Result<ValidationReport, StocksentError> {
    let format = resolve_format(format, input)?;
    let content = read_input(input)?;
    match kind {
        RecordKind::Line => validate_content::<LineData>(format, &content, &options.limits),
        RecordKind::Lag => validate_content::<LagData>(format, &content, &options.limits),
        RecordKind::Heatmap => validate_content::<HeatmapData>(format, &content, &options.limits),
    }
}

fn validate_content<R: Record>(
    format: RecordFormat,
    content: &str,
    limits: &ValidationLimits,
) -> Result<ValidationReport, StocksentError> {
    let records: Vec<R> = decode_records(format, content)?;
    Ok(validate_batch(&records, limits))
}

/// Decode `input`, validate it, and write it to `output` in the target
/// format. Nothing is written when any record fails validation.
///
/// Returns the number of records written.
pub fn convert_input(
    kind: RecordKind,
    input: &Path,
    output: &Path,
    from: Option<RecordFormat>,
    to: Option<RecordFormat>,
    options: &RunOptions,
) -> Result<usize, StocksentError> {
    let from = resolve_format(from, input)?;
    let to = resolve_format(to, output)?;
    let content = read_input(input)?;

    let (encoded, count) = match kind {
        RecordKind::Line => convert_content::<LineData>(from, to, &content, options)?,
        RecordKind::Lag => convert_content::<LagData>(from, to, &content, options)?,
        RecordKind::Heatmap => convert_content::<HeatmapData>(from, to, &content, options)?,
    };

    fs::write(output, encoded)?;
    Ok(count)
}

fn convert_content<R: Record>(
    from: RecordFormat,
    to: RecordFormat,
    content: &str,
    options: &RunOptions,
) -> Result<(String, usize), StocksentError> {
    let records: Vec<R> = decode_records(from, content)?;
    let report = validate_batch(&records, &options.limits);
    if !report.is_clean() {
        return Err(StocksentError::InvalidRecords {
            kind: R::KIND.to_string(),
            failures: report.failures,
        });
    }
    let encoded = encode_records(to, &records, options.pretty_json)?;
    Ok((encoded, records.len()))
}

fn warn_failures(failures: &[RecordFailure]) {
    for failure in failures {
        tracing::warn!(
            index = failure.index,
            stock_name = %failure.stock_name,
            "invalid record: {}",
            failure.error
        );
    }
}

fn run_validate(
    kind: RecordKind,
    input: &Path,
    format: Option<RecordFormat>,
    config: Option<&Path>,
) -> Result<(), StocksentError> {
    let options = load_options(config)?;
    tracing::info!("Validating {} records in {}", kind, input.display());
    let report = validate_input(kind, input, format, &options)?;

    warn_failures(&report.failures);
    println!(
        "{} {} record(s) checked, {} problem(s)",
        report.checked,
        kind,
        report.failures.len()
    );

    if report.is_clean() {
        Ok(())
    } else {
        Err(StocksentError::InvalidRecords {
            kind: kind.to_string(),
            failures: report.failures,
        })
    }
}

fn run_convert(
    kind: RecordKind,
    input: &Path,
    output: &Path,
    from: Option<RecordFormat>,
    to: Option<RecordFormat>,
    config: Option<&Path>,
) -> Result<(), StocksentError> {
    let options = load_options(config)?;
    tracing::info!(
        "Converting {} records from {} to {}",
        kind,
        input.display(),
        output.display()
    );
    match convert_input(kind, input, output, from, to, &options) {
        Ok(count) => {
            println!("wrote {} {} record(s) to {}", count, kind, output.display());
            Ok(())
        }
        Err(StocksentError::InvalidRecords { kind, failures }) => {
            warn_failures(&failures);
            Err(StocksentError::InvalidRecords { kind, failures })
        }
        Err(e) => Err(e),
    }
}

fn run_check_config(config: &Path) -> Result<(), StocksentError> {
    let options = load_options(Some(config))?;
    let limits = &options.limits;
    println!("Config OK: {}", config.display());
    println!("  correlation_bound = {}", limits.correlation_bound);
    match limits.max_lag {
        Some(max) => println!("  max_lag = {max}"),
        None => println!("  max_lag = (unbounded)"),
    }
    match limits.sent_score_bound {
        Some(bound) => println!("  sent_score_bound = {bound}"),
        None => println!("  sent_score_bound = (unbounded)"),
    }
    println!("  pretty_json = {}", options.pretty_json);
    Ok(())
}
