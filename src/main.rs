// Mining game agent - Main Entry Point

use clap::Parser;
use cryptominer_bot::logging::init_logging;
use cryptominer_bot::{run_bot, BotConfig, SessionStore, DEFAULT_CONFIG_FILE, DEFAULT_SESSIONS_FILE};
use tokio::sync::watch;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "cryptominer_bot")]
#[command(version, about = "Unattended upgrade agent for the mining game")]
struct Cli {
    /// Path to the TOML configuration (created with defaults if missing)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Path to the JSON list of account sessions
    #[arg(long, default_value = DEFAULT_SESSIONS_FILE)]
    sessions: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Run a single cycle per account and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("Mining agent starting...");

    let config = BotConfig::load_or_create(&cli.config)?;
    config.validate()?;
    config.print_summary();

    let sessions = SessionStore::load(&cli.sessions)?.into_sessions();
    if sessions.is_empty() {
        warn!("No sessions configured in {}", cli.sessions);
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received, finishing current step...");
            let _ = shutdown_tx.send(true);
        }
    });

    let handles: Vec<_> = sessions
        .into_iter()
        .map(|profile| tokio::spawn(run_bot(profile, config.clone(), shutdown_rx.clone(), cli.once)))
        .collect();

    for handle in handles {
        if let Err(e) = handle.await {
            error!("Bot task failed: {}", e);
        }
    }

    info!("All bots stopped");
    Ok(())
}
