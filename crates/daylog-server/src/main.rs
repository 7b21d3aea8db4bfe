use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use daylog_db::service::DaylogService;
use daylog_server::state::AppState;

mod bootstrap;
mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("daylog error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = bootstrap::load_config(&cli)?;
    init_tracing(cli.quiet, cli.verbose, &config.log.filter)?;

    let service = DaylogService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
    tracing::info!(path = %config.database.path, "database ready");

    let app = daylog_server::router(AppState::new(service), &config.server);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "daylog listening");
    if config.server.serves_static() {
        tracing::info!(dir = %config.server.static_dir, "serving static UI");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(daylog_server::shutdown::signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("daylog stopped");
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let directive = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
