//! Backend access: wire types, the HTTP client and background request tasks.

pub mod client;
pub mod error;
pub mod manager;
pub mod models;
pub mod timefmt;
