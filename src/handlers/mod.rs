mod message_handler;
pub mod crypto_handlers;
pub mod session_handlers;

pub use message_handler::*;
