pub mod chat_log;
pub mod message_input;
