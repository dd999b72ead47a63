use anyhow::Context;
use missive_core::MessageStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub mod controllers;
pub mod routes;
pub mod schema;

use schema::{build_schema, MessageSchema};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4001";
pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
pub struct AppState {
    pub schema: MessageSchema,
    /// Lo stesso store che lo schema usa nei resolver (serve anche a /health).
    pub store: Arc<MessageStore>,
    pub graphiql: bool,
}

impl AppState {
    /// Crea lo stato con uno store vuoto.
    pub fn new(graphiql: bool) -> Self {
        Self::with_store(Arc::new(MessageStore::new()), graphiql)
    }

    pub fn with_store(store: Arc<MessageStore>, graphiql: bool) -> Self {
        let schema = build_schema(store.clone());
        Self { schema, store, graphiql }
    }
}

/// Configurazione del server letta dalle variabili d'ambiente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub graphiql: bool,
}

impl ServerConfig {
    /// Legge BIND_ADDR e GRAPHIQL dall'ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::var("BIND_ADDR").ok(), std::env::var("GRAPHIQL").ok())
    }

    /// Come `from_env`, ma con i valori grezzi passati esplicitamente.
    /// BIND_ADDR assente -> 127.0.0.1:4001; GRAPHIQL assente -> abilitato.
    pub fn from_vars(bind_addr: Option<String>, graphiql: Option<String>) -> anyhow::Result<Self> {
        let bind = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        // converte la stringa bind in un SocketAddr (host + porta)
        let bind_addr: SocketAddr = bind
            .trim()
            .parse()
            .with_context(|| format!("parse BIND_ADDR {:?}", bind))?;
        let graphiql = match graphiql {
            Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"),
            None => true,
        };
        Ok(Self { bind_addr, graphiql })
    }
}

/// Inizializza il subscriber di tracing (filtro da RUST_LOG).
/// Chiamarla più volte non è un errore: le chiamate successive vengono ignorate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("missive_server=info,missive_core=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
