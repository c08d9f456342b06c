pub mod chat;
pub mod formatter;
pub mod intent;
