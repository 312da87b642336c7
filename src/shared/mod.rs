// Shared Kernel
// Cross-cutting pieces used by the movie module and the HTTP server

pub mod application; // Pagination and response envelopes
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and migrations
pub mod utils; // Logging and validation

// Re-exports for convenience
pub use config::AppConfig;
pub use infrastructure::Database;
