use serde::{Deserialize, Serialize};

/// Messaggio restituito dallo store: campi salvati più l'id con cui sono indicizzati.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Payload di scrittura per create/update. Non ha id: viene generato (create)
/// oppure passato a parte come chiave di lookup (update).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInput {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Message {
    /// Costruisce il messaggio a partire dall'id e dai campi salvati.
    pub fn new(id: impl Into<String>, fields: &MessageInput) -> Self {
        Self {
            id: id.into(),
            content: fields.content.clone(),
            author: fields.author.clone(),
        }
    }
}

impl MessageInput {
    pub fn new(content: Option<&str>, author: Option<&str>) -> Self {
        Self {
            content: content.map(str::to_string),
            author: author.map(str::to_string),
        }
    }
}
