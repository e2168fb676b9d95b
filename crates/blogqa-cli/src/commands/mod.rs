pub mod ask;
pub mod chat;
pub mod collections;
pub mod health;
pub mod stats;
