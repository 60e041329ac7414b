use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use employee_registry::config::Config;
use employee_registry::modules::employees::adapters::in_memory::InMemoryEmployeeStore;
use employee_registry::shell::http::router;
use employee_registry::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();

    // Lifecycle: construct -> seed -> serve.
    let store = InMemoryEmployeeStore::new();
    store.seed(config.seed_count).await?;
    let state = AppState {
        store: Arc::new(store),
    };

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
