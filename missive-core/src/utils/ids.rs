use rand::RngCore;

/// Byte casuali per ogni id (20 caratteri esadecimali).
pub const MESSAGE_ID_BYTES: usize = 10;

/// Genera un nuovo id di messaggio: 10 byte dal generatore crittografico del thread, in esadecimale minuscolo.
pub fn new_message_id() -> String {
    let mut bytes = [0u8; MESSAGE_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
