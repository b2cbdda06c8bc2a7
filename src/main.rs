use std::sync::Arc;

use reqwest::Client;
use tracing_subscriber::EnvFilter;

use focusmix::{
    config::Config,
    server::{self, AppState},
    session::InMemorySessionStore,
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        config,
        http: Client::new(),
        sessions: Arc::new(InMemorySessionStore::new()),
    };

    if let Err(e) = server::serve(state).await {
        eprintln!("server error: {e}");
        std::process::exit(1);
    }
}
