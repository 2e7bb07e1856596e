//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MailRelay` - outbound delivery of review/feedback mail
//! - `SnapshotStore` - durable user data snapshot
//! - `ReportRenderer` - report layout to document bytes

mod mail_relay;
mod report_renderer;
mod snapshot_store;

pub use mail_relay::{MailRelay, MailRelayError, OutboundMessage};
pub use report_renderer::{ReportError, ReportRenderer};
pub use snapshot_store::{SnapshotError, SnapshotStore};
