//! Pokedex - An interactive Pokedex backed by PokeAPI
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (stderr, so the REPL stays clean)
//! 2. Load configuration from environment variables
//! 3. Create the one response cache for the whole process
//! 4. Build the API client and REPL session around it
//! 5. Run the REPL until `exit`, end of input, Ctrl+C or SIGTERM
//! 6. Stop the cache sweeper before the runtime goes away

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, PokeApiClient, Session, TimedCache};

fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines don't interleave with the prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let result = runtime.block_on(run_pokedex());

    // The stdin reader may still be parked in a blocking read
    runtime.shutdown_background();
    result
}

async fn run_pokedex() -> anyhow::Result<()> {
    info!("Starting Pokedex");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms, base_url={}, http_timeout={}s",
        config.cache_interval_ms, config.base_url, config.http_timeout_secs
    );

    let cache = TimedCache::new(config.cache_interval());
    let client = PokeApiClient::from_config(&config, cache.clone())
        .context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let result = tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => {
            result.context("terminal I/O failed")
        }
        _ = shutdown_signal() => Ok(()),
    };

    cache.shutdown().await;
    info!("Cache sweeper stopped");
    info!("Pokedex shutdown complete");

    result
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// A handler that fails to install never fires, so the REPL keeps running.
async fn shutdown_signal() {
    let ctrl_c = wait_for_signal(signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}

/// Resolves when `signal` fires; stays pending if its handler could not be installed.
async fn wait_for_signal<F>(signal: F, name: &str)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "failed to install {} handler", name);
        std::future::pending::<()>().await;
    }
}
