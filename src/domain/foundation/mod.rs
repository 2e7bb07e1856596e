//! Foundation types shared across the domain.

mod errors;
mod ids;

pub use errors::DomainError;
pub use ids::SessionId;
