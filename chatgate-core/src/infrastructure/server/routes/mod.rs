pub mod chat;
pub mod frontend;
