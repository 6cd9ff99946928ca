//! Capstone Hub - server binary.
//!
//! Seeds the in-memory store with the default site content and serves the
//! REST API until terminated. State is process-resident and lost on
//! restart.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use capstone_hub::{AppState, MemStore, ServerConfig, create_app};

/// Capstone Hub - project documentation site backend
#[derive(Parser, Debug)]
#[command(name = "capstone-hub")]
#[command(about = "Backend for the capstone project documentation hub")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "HUB_PORT")]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "HUB_HOST")]
    host: Option<String>,

    /// Directory holding the downloadable project documents
    #[arg(long, env = "HUB_DOCS_DIR")]
    docs_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::default();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(docs_dir) = args.docs_dir {
        config.docs_dir = docs_dir;
    }

    let store = MemStore::with_defaults().await;
    info!(
        pages = store.pages().await.len(),
        members = store.members().await.len(),
        sprints = store.sprints().await.len(),
        "seeded default content"
    );

    let state = AppState::new(store, config.docs_dir.clone());
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
