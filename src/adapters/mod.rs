//! Adapters - Concrete implementations of the ports.

pub mod http;
pub mod mail;
pub mod report;
pub mod storage;
