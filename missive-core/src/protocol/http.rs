use serde::{Deserialize, Serialize};
/*
    dto http per gli endpoint che non passano da GraphQL
*/
// Health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// Numero di messaggi attualmente nello store
    pub messages: usize,
}

impl HealthResponse {
    pub fn ok(messages: usize) -> Self {
        Self { status: "ok".to_string(), messages }
    }
}
