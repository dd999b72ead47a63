use thiserror::Error;

/// Result con l'errore di dominio dello store.
pub type Result<T> = std::result::Result<T, Error>;

/// Errori restituiti dalle operazioni dello store.
///
/// Sono errori a livello di singola richiesta: il server li traduce in errori
/// GraphQL sul campo, non sono mai fatali per il processo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Nessun record con questo id.
    #[error("no message exists with id {id}")]
    NotFound { id: String },
}

impl Error {
    /// Codice stabile esposto ai client (in `extensions.code`).
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NOT_FOUND",
        }
    }
}
