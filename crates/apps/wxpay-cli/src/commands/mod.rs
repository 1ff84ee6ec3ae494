//! CLI command implementations.

pub mod app_params;
pub mod config;
pub mod notify;
pub mod order;
pub mod query;
pub mod sign;

// Re-export command handlers
pub use app_params::app_params;
pub use config::show_config;
pub use notify::notify;
pub use order::order;
pub use query::{query, QueryTarget};
pub use sign::sign;
