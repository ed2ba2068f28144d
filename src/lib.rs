//! College Directory
//!
//! A terminal client for a college directory service. Visitors browse
//! colleges and submit enquiries; administrators manage colleges and review
//! enquiries filtered by college.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{DirectoryError, Result};

// Re-export main components for easy access
pub use handlers::Controller;
pub use services::ServiceFactory;
pub use state::ViewState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
