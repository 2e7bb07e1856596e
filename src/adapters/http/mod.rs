//! HTTP adapter: axum routes, handlers, and DTOs for the external UI.

pub mod dto;
pub mod handlers;
pub mod registry;
pub mod routes;

pub use handlers::AppHandlers;
pub use registry::SessionRegistry;
pub use routes::api_routes;
