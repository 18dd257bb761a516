use clap::Parser;
use colored::*;
use eyre::Result;
use log::{info, warn};

use signr::cli::Cli;
use signr::domain::RunOutcome;
use signr::network;
use signr::runner::{BatchRunner, ScheduleConfig, ScheduleLoop};
use signr::session::ForumProvider;
use signr::shutdown::Shutdown;

/// Exit status for fatal config conditions (distinct from a clean stop)
const EXIT_CONFIG_ERROR: i32 = 2;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

async fn report_network_env() {
    match network::probe().await {
        Ok(env) => info!("running from {}", env),
        Err(err) => warn!("network probe failed: {}", err),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    report_network_env().await;

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let runner = BatchRunner::new(cli.config, ForumProvider::default());
    let schedule = ScheduleLoop::new(runner, ScheduleConfig::new(cli.continuous));

    match schedule.run(&shutdown).await {
        RunOutcome::Completed => Ok(()),
        RunOutcome::Interrupted => Ok(()),
        RunOutcome::FatalConfig => {
            eprintln!("{}", "Stopping: fix the config file and run again".red());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    }
}
