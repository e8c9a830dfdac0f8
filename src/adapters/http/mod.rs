//! HTTP adapter: axum routes over the application handlers.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::api_router;
