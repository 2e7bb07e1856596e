//! Error types for the domain layer.
//!
//! Most transition rules are total: invalid input is a silent no-op, not an
//! error (see `session::actions::Outcome`). Domain errors are reserved for
//! conditions the caller must handle, such as a missing session.

use thiserror::Error;

use super::SessionId;

/// Errors surfaced by domain operations.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Session {0} not found")]
    SessionNotFound(SessionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_not_found_includes_id() {
        let id = SessionId::new();
        let err = DomainError::SessionNotFound(id);
        assert!(format!("{}", err).contains(&id.to_string()));
    }
}
