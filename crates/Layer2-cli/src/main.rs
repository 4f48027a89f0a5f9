//! FibBench CLI - Main entry point

mod input;

use clap::{Parser, ValueEnum};
use fibbench_core::{ReportFormat, RunConfig, RunReport, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FibBench - iterative Fibonacci benchmark for the terminal
#[derive(Parser, Debug)]
#[command(name = "fibbench")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fibonacci index to compute (prompted on stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    n: Option<i64>,

    /// Number of measured runs (averaged)
    #[arg(short, long, default_value = "1")]
    iterations: u32,

    /// Number of untimed warmup runs before measurement
    #[arg(short, long, default_value = "0")]
    warmup: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// 출력 형식 (clap 인자용)
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // 인덱스 획득: CLI 인자 우선, 없으면 표준 입력 프롬프트
    let n = match args.n {
        Some(n) => n,
        None => input::prompt_for_index()?,
    };
    tracing::debug!(index = n, "input acquired");

    let config = RunConfig {
        iterations: args.iterations,
        warmup_runs: args.warmup,
        verbose: args.debug,
    };

    let mut runner = Runner::new(config);
    let result = runner.run(n)?;

    let report = RunReport::from_result(&result);
    print!("{}", report.render(args.format.into())?);

    Ok(())
}
