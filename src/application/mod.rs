//! Application layer: command handlers coordinating domain and ports.

pub mod handlers;
