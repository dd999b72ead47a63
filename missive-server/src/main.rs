use anyhow::Context;
use std::sync::Arc;

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use missive_server::{init_tracing, routes, AppState, ServerConfig, GRAPHQL_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    // Leggi la configurazione dall'ambiente (BIND_ADDR, GRAPHIQL)
    let config = ServerConfig::from_env().context("read server config")?;
    // Store vuoto + schema: vivono quanto il processo
    let state = Arc::new(AppState::new(config.graphiql));
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .context("bind tcp listener")?;
    tracing::info!(
        "Running a GraphQL API server at http://{}{} (graphiql: {})",
        config.bind_addr,
        GRAPHQL_PATH,
        config.graphiql
    );
    // Avvia il server Axum
    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
