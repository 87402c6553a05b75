//! HTTP request handlers.

pub mod validator_handler;

pub use validator_handler::validator_routes;
