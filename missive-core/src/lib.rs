//! missive-core: tipi condivisi e store in memoria dei messaggi (modelli, errori, DTO HTTP).
//! Niente I/O di rete: il server GraphQL vive in `missive-server`.

pub mod models;
pub mod protocol;
pub mod error;
pub mod store;
pub mod utils;

// Re-export utili per ridurre i percorsi nel crate server
pub use error::{Error, Result};
pub use models::{message::Message, message::MessageInput};
pub use protocol::http::HealthResponse;
pub use store::MessageStore;
pub use utils::new_message_id;
