use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vmangos_core::{convert_file, ConvertError, ConverterConfig};

/// Environment variable naming an optional TOML config file.
const CONFIG_ENV: &str = "WORLD_TO_VMANGOS_CONFIG";

#[derive(Parser)]
#[command(
    name = "world-to-vmangos",
    version = "0.1.0",
    about = "Convert a WoWEmu .save world dump into VMaNGOS SQL",
    long_about = None
)]
struct Cli {
    /// Path to the .save file to convert
    input: Option<PathBuf>,
}

fn print_usage() {
    let program = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "world-to-vmangos".to_string());
    println!("WorldToVMaNGOS - WoWEmu .save to VMaNGOS SQL Converter");
    println!("Usage: Drag a .save file onto the executable, or run:");
    println!(" {} world.save", program);
    println!("Output: <input>_converted.sql");
}

/// The file to convert, or `None` when the usage text should be shown.
/// Only an existing regular file is accepted.
fn input_to_convert(arg: Option<PathBuf>) -> Option<PathBuf> {
    arg.filter(|path| path.is_file())
}

fn load_config() -> Result<ConverterConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => ConverterConfig::from_file(Path::new(&path))
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e)),
        None => Ok(ConverterConfig::default()),
    }
}

fn setup_logging(log_file: Option<&Path>) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true);

    let Some(log_file) = log_file else {
        tracing_subscriber::registry().with(filter).with(stderr_layer).try_init()?;
        return Ok(None);
    };

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(Path::new(".")),
        log_file.file_name().unwrap_or(std::ffi::OsStr::new("world-to-vmangos.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::Layer::new().with_writer(non_blocking).with_ansi(false))
        .try_init()?;

    Ok(Some(guard))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(input) = input_to_convert(cli.input) else {
        print_usage();
        return Ok(ExitCode::SUCCESS);
    };

    let config = load_config()?;
    let _guard = setup_logging(config.log_file.as_deref())?;

    info!("Starting world-to-vmangos");

    let code = match convert_file(&input, &config) {
        Ok(summary) => {
            println!("Conversion complete: {}", summary.output_path.display());
            ExitCode::SUCCESS
        }
        Err(ConvertError::WriteOutput { source }) => {
            println!("Error writing output file: {}", source);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("Error reading input file: {}", e);
            ExitCode::FAILURE
        }
    };

    info!("world-to-vmangos finished");
    Ok(code)
}
