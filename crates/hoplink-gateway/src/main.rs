use clap::Parser;
use hoplink_core::ObjectStore;
use hoplink_gateway::cli::{Cli, StorageBackendArg};
use hoplink_gateway::{App, AppState};
use hoplink_redirector::RedirectorService;
use hoplink_shortener::{ShortenerService, UuidGenerator};
use hoplink_storage::{FsStore, InMemoryStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Cli::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let state = match config.storage {
        StorageBackendArg::InMemory => {
            app_state(Arc::new(InMemoryStore::new()), &config.base_url)
        }
        StorageBackendArg::Fs => {
            let data_dir = config
                .data_dir
                .ok_or("data dir is required when storage backend is fs")?;
            app_state(Arc::new(FsStore::open(data_dir).await?), &config.base_url)
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}

fn app_state<S: ObjectStore>(store: Arc<S>, base_url: &str) -> AppState {
    let creator = ShortenerService::new(Arc::clone(&store), UuidGenerator::new(), base_url);
    let redirector = RedirectorService::new(store);
    AppState::new(Arc::new(creator), Arc::new(redirector))
}
