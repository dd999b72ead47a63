use dashmap::{mapref::entry::Entry, DashMap};

use crate::error::{Error, Result};
use crate::models::{Message, MessageInput};
use crate::utils::new_message_id;

/// Store in memoria dei messaggi: id generato -> campi salvati.
///
/// Viene creato vuoto all'avvio e condiviso (dentro un `Arc`) con lo schema GraphQL.
/// Ogni singola operazione è atomica rispetto alla propria chiave; non esistono
/// transazioni su più operazioni (vince l'ultima scrittura).
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: DashMap<String, MessageInput>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cerca il messaggio con questo id.
    pub fn get(&self, id: &str) -> Result<Message> {
        self.messages
            .get(id)
            .map(|fields| Message::new(id, fields.value()))
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    /// Salva l'input sotto un id nuovo e restituisce il messaggio creato.
    /// I campi assenti restano `None`, l'input vuoto non viene rifiutato.
    pub fn create(&self, input: MessageInput) -> Message {
        self.create_with(input, new_message_id)
    }

    // `next_id` viene richiamato finché non produce un id libero
    pub(crate) fn create_with(&self, input: MessageInput, mut next_id: impl FnMut() -> String) -> Message {
        loop {
            match self.messages.entry(next_id()) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    let stored = slot.insert(input);
                    return Message::new(id, stored.value());
                }
                // un id già usato non va mai sovrascritto
                Entry::Occupied(slot) => {
                    tracing::warn!(message_id = %slot.key(), "generated message id collided, retrying");
                }
            }
        }
    }

    /// Sostituisce per intero i campi del messaggio `id`: i campi omessi nel nuovo input
    /// diventano assenti, non vengono mantenuti quelli vecchi.
    pub fn update(&self, id: &str, input: MessageInput) -> Result<Message> {
        match self.messages.get_mut(id) {
            Some(mut fields) => {
                *fields = input;
                Ok(Message::new(id, fields.value()))
            }
            None => Err(Error::NotFound { id: id.to_string() }),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
