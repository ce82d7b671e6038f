//! Host simulation entry point.
//!
//! Reads host commands and chat lines from stdin and drives the condition
//! tracker the way a virtual tabletop would.
mod app;
mod console;
mod host;
mod input;

use std::path::PathBuf;

use anyhow::Result;
use app::CliApp;
use clap::Parser;
use tracker_bootstrap::{CliConfig, dirs};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Condition tracker host simulation
#[derive(Parser, Debug)]
#[command(name = "condition-tracker")]
#[command(about = "Track timed conditions through a simulated initiative order", long_about = None)]
#[command(version)]
struct Args {
    /// Session identifier for state and logs
    #[arg(long)]
    session: Option<String>,

    /// Keep the turn order and ledger on disk
    #[arg(long)]
    persist: bool,

    /// Directory for persisted state
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Directory with tracker.toml, markers.toml and token_markers.json
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Marker set TOML file
    #[arg(long)]
    marker_set: Option<PathBuf>,

    /// Host marker library JSON file
    #[arg(long)]
    token_markers: Option<PathBuf>,

    /// Player id treated as the GM
    #[arg(long)]
    gm: Option<String>,

    /// Also write logs to stderr
    #[arg(long)]
    log_stderr: bool,
}

impl Args {
    /// Flags override the environment.
    fn apply(self, config: &mut CliConfig) {
        if self.session.is_some() {
            config.session_id = self.session;
        }
        if self.persist {
            config.enable_persistence = true;
        }
        if self.state_dir.is_some() {
            config.state_dir = self.state_dir;
        }
        if self.content_dir.is_some() {
            config.content_dir = self.content_dir;
        }
        if self.marker_set.is_some() {
            config.marker_set = self.marker_set;
        }
        if self.token_markers.is_some() {
            config.token_markers = self.token_markers;
        }
        if let Some(gm) = self.gm {
            config.gm_player = gm;
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let log_stderr = args.log_stderr;

    let mut config = CliConfig::from_env();
    args.apply(&mut config);

    setup_logging(config.session_id(), log_stderr)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    CliApp::build(config)?.run(stdin.lock(), &mut stdout)
}

/// Setup logging to a per-session file, and optionally stderr.
fn setup_logging(session_id: &str, log_stderr: bool) -> Result<()> {
    let session_log_dir = dirs::log_dir().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "tracker.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = log_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!(session = session_id, "logging initialized");
    tracing::info!("log file: {}/tracker.log", session_log_dir.display());

    Ok(())
}
