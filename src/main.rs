use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use u_queueing::config::RunConfig;
use u_queueing::dispatch::{DispatchMode, Quantum};
use u_queueing::display::{write_queue, ConsoleObserver};
use u_queueing::oracle::PromptOracle;
use u_queueing::ordering::QueueingMode;
use u_queueing::scheduler::{QueueScheduler, RunRequest};
use u_queueing::Result;

#[derive(Parser, Debug)]
#[command(name = "u-queueing")]
#[command(about = "Order tasks by a queueing discipline and dispatch them one quantum at a time")]
struct Cli {
    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Queueing mode: priority, reverse_priority, fifo, lifo, shuffle
    #[arg(short, long)]
    mode: Option<QueueingMode>,

    /// Dispatch loop: non_preemptive, preemptive
    #[arg(short, long)]
    dispatch: Option<DispatchMode>,

    /// Quantum length in simulated time units
    #[arg(short, long, allow_negative_numbers = true)]
    burst_time: Option<i64>,

    /// Seed for the shuffle mode
    #[arg(long)]
    seed: Option<u64>,

    /// Abort after this many quanta
    #[arg(long)]
    max_quanta: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(dispatch) = self.dispatch {
            config.dispatch = dispatch;
        }
        if let Some(burst_time) = self.burst_time {
            config.burst_time = burst_time;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_quanta.is_some() {
            config.max_quanta = self.max_quanta;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let request = RunRequest::from(&config);
    let quantum = Quantum::new(request.burst_time)?;

    let scheduler = QueueScheduler::new();
    let mut queue = scheduler.prepare(&request);

    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "{} ({}):",
        request.mode.display_name(),
        request.mode.subtitle()
    )?;
    write_queue(&mut stdout, queue.iter())?;

    let mut oracle = PromptOracle::stdio();
    let mut observer = ConsoleObserver::new(io::stdout());
    let report = scheduler.dispatch(&request, quantum, &mut queue, &mut oracle, &mut observer)?;

    writeln!(
        stdout,
        "All {} tasks completed ({} quanta, {} rotations)",
        report.completed_count(),
        report.quanta_elapsed,
        report.rotation_count()
    )?;
    Ok(())
}
