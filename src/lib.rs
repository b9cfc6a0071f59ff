pub mod auth;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use routes::{AppState, router};
