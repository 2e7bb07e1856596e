//! Domain layer: catalog, session state, transition rules, report layout.
//!
//! Everything here is synchronous and free of I/O; external concerns live
//! behind the ports.

pub mod catalog;
pub mod foundation;
pub mod report;
pub mod session;
