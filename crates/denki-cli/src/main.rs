mod logging;
mod settings;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use denki_convert::{
    ConversionEngine, ConvertError, REPAIRED_INPUT_NAME, TextEncoding, repair_encoding,
};
use denki_generate::{GenerationEngine, GenerationError};
use logging::init_logging;
use settings::{SettingsError, load_settings};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),
    #[error("report error: {0}")]
    Report(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "denki", version, about = "Electronics inventory CSV generator and SQL converter")]
struct Cli {
    /// Settings file (defaults to ./denki.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write synthetic inventory records to a CSV file.
    Generate(GenerateArgs),
    /// Turn the inventory CSV into SQL insert files and an import script.
    Convert(ConvertArgs),
    /// Detect a legacy Japanese encoding and write a UTF-8 copy.
    FixEncoding(FixEncodingArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of records.
    #[arg(long)]
    rows: Option<u32>,
    /// Output CSV path.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for a repeatable run.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Directory searched for the input CSV.
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Directory receiving the SQL files.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Decode as utf8, shift_jis, euc_jp or iso_2022_jp instead of guessing
    /// from the file name.
    #[arg(long)]
    encoding: Option<TextEncoding>,
    /// Write the conversion report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FixEncodingArgs {
    /// File of unknown encoding.
    #[arg(long, default_value = "electronics_data.csv")]
    input: PathBuf,
    /// UTF-8 copy to write.
    #[arg(long, default_value = REPAIRED_INPUT_NAME)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_json) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(cli.config.as_deref())?;
    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();

    match cli.command {
        Command::Generate(args) => {
            tracing::info!(event = "run_started", run_id = %run_id, command = "generate");
            run_generate(args, settings.generate)?;
        }
        Command::Convert(args) => {
            tracing::info!(event = "run_started", run_id = %run_id, command = "convert");
            run_convert(args, settings.convert)?;
        }
        Command::FixEncoding(args) => {
            tracing::info!(event = "run_started", run_id = %run_id, command = "fix-encoding");
            let repair = repair_encoding(&args.input, &args.output)?;
            tracing::info!(
                event = "encoding_repaired",
                encoding = %repair.detected,
                bytes = repair.bytes_written,
                path = %repair.output_path.display()
            );
        }
    }

    let duration_ms = timer.elapsed().as_millis() as u64;
    tracing::info!(event = "run_finished", run_id = %run_id, status = "success", duration_ms);
    Ok(())
}

fn run_generate(
    args: GenerateArgs,
    mut options: denki_generate::GenerateOptions,
) -> Result<(), CliError> {
    let GenerateArgs { rows, out, seed } = args;
    if let Some(rows) = rows {
        options.rows = rows;
    }
    if let Some(out) = out {
        options.out_path = out;
    }
    if seed.is_some() {
        options.seed = seed;
    }

    let result = GenerationEngine::new(options).run()?;
    tracing::info!(
        event = "csv_written",
        rows = result.rows,
        path = %result.out_path.display()
    );
    Ok(())
}

fn run_convert(
    args: ConvertArgs,
    mut options: denki_convert::ConvertOptions,
) -> Result<(), CliError> {
    let ConvertArgs {
        input_dir,
        out_dir,
        encoding,
        report,
    } = args;
    if let Some(input_dir) = input_dir {
        options.input_dir = input_dir;
    }
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }
    if encoding.is_some() {
        options.encoding = encoding;
    }

    let result = ConversionEngine::new(options).run()?;
    for path in &result.files {
        tracing::info!(event = "file_generated", path = %path.display());
    }

    if let Some(path) = report {
        write_report(&path, &result.report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }
    Ok(())
}

fn write_report(path: &Path, report: &denki_convert::ConversionReport) -> Result<(), CliError> {
    let data = serde_json::to_vec_pretty(report).map_err(|err| CliError::Report(err.to_string()))?;
    std::fs::write(path, data)
        .map_err(|err| CliError::Report(format!("{}: {err}", path.display())))
}
