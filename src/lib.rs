// src/lib.rs

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod resolver;
pub mod routes;
pub mod state;
pub mod utils;
pub mod view;

// Re-export specific items for convenience if needed
pub use routes::create_router;
