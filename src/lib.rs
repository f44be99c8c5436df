pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod panel;
pub mod routes;
pub mod state;
pub mod utils;
pub mod workflow;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use errors::{AppError, AppResult};
pub use state::AppState;
