use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use topofetch::api::{ApiClient, Fetchable};
use topofetch::config::Config;
use topofetch::inventory::{self, InventoryReport};
use topofetch::pool::{Dispatcher, PoolConfig};
use topofetch::targets::Endpoints;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Version injected at compile time via TOPOFETCH_VERSION env var (set by
/// CI/CD), or "dev" for local builds.
pub const VERSION: &str = match option_env!("TOPOFETCH_VERSION") {
    Some(v) => v,
    None => "dev",
};

/// Concurrent fetcher for topology inventory APIs
#[derive(Parser, Debug)]
#[command(name = "topofetch", version = VERSION, about, long_about = None)]
struct Args {
    /// Base URL of the inventory service
    #[arg(short, long)]
    base_url: Option<String>,

    /// Number of concurrent workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Simulated per-job processing delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch a batch of item fetches through the worker pool
    Batch {
        /// Resource kind to fetch
        #[arg(long, value_enum, default_value = "devices")]
        kind: ResourceKind,

        /// Number of jobs in the batch
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Walk the inventory sequentially and print what it holds
    List {
        /// Number of individual devices to fetch after the collections
        #[arg(long, default_value_t = 10)]
        items: usize,
    },
    /// Show the effective configuration
    Config {
        /// Persist the effective values to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResourceKind {
    Devices,
    Topos,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(
    level: LogLevel,
    log_file: Option<&Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_max_level(tracing_level)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("topofetch started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", path);

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level, args.log_file.as_deref())?;

    let config = Config::load();
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.effective_base_url());
    let workers = args.workers.unwrap_or_else(|| config.effective_workers());
    let delay_ms = args.delay_ms.unwrap_or_else(|| config.effective_delay_ms());

    let endpoints = Endpoints::new(&base_url)?;
    tracing::info!(
        "Using inventory at {} with {} workers",
        endpoints.base_url(),
        workers
    );

    // Bare `topofetch` runs the default batch: 5 device jobs.
    let command = args.command.unwrap_or(Command::Batch {
        kind: ResourceKind::Devices,
        count: 5,
    });

    match command {
        Command::Batch { kind, count } => {
            let pool = PoolConfig {
                worker_count: workers,
                processing_delay: Duration::from_millis(delay_ms),
            };
            let dispatcher = Dispatcher::new(ApiClient::new()?, pool);
            match kind {
                ResourceKind::Devices => {
                    run_batch(&dispatcher, endpoints.device_batch(count)).await?
                }
                ResourceKind::Topos => run_batch(&dispatcher, endpoints.topo_batch(count)).await?,
            }
        }
        Command::List { items } => {
            let client = ApiClient::new()?;
            let report = inventory::walk_inventory(&client, &endpoints, items).await;
            print_inventory(&report);
        }
        Command::Config { save } => {
            println!("base_url = {base_url}");
            println!("workers = {workers}");
            println!("processing_delay_ms = {delay_ms}");
            if save {
                let config = Config {
                    base_url: Some(base_url),
                    workers: Some(workers),
                    processing_delay_ms: Some(delay_ms),
                };
                config.save().context("Failed to save configuration")?;
                println!("Configuration saved");
            }
        }
    }

    Ok(())
}

async fn run_batch<R: Fetchable>(dispatcher: &Dispatcher, targets: Vec<R>) -> Result<()> {
    let reports = dispatcher.run(targets).await?;
    let succeeded = reports.iter().filter(|r| r.is_success()).count();
    for report in &reports {
        println!("Res: {report}");
    }
    tracing::info!("Batch done, {}/{} jobs succeeded", succeeded, reports.len());
    Ok(())
}

fn print_inventory(report: &InventoryReport) {
    println!("devices listed: {}", report.devices.data.len());
    for device in &report.devices.data {
        println!("  id={} name={} deviceid={}", device.id, device.name, device.device_id);
    }
    println!("topos listed: {}", report.topos.data.len());
    for topo in &report.topos.data {
        println!("  id={} name={} topoid={}", topo.id, topo.name, topo.topo_id);
    }
    println!("device details fetched: {}", report.device_details.len());
    for device in &report.device_details {
        println!("  id={} name={} deviceid={}", device.id, device.name, device.device_id);
    }
}
