pub mod ids;

pub use ids::{new_message_id, MESSAGE_ID_BYTES};
