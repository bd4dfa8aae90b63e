use clap::Parser;
use tracing_subscriber::EnvFilter;

use pocketchain::api::server::run_server;
use pocketchain::blockchain::Engine;

/// Minimal proof-of-work ledger node.
#[derive(Parser)]
#[command(name = "pocketchain", version, about)]
struct Cli {
    /// Interface to bind the HTTP server on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let engine = Engine::new();
    let address = format!("{}:{}", cli.host, cli.port);

    run_server(engine, &address).await
}
