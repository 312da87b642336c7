//! Movie records and their embedded reviews.
//!
//! Architecture:
//! - Domain: entities, rating arithmetic and the repository trait
//! - Application: `MovieService`, one method per operation
//! - Infrastructure: Diesel-based repository implementation
//! - Handlers: axum endpoints and request bodies
pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::MovieService;
pub use domain::{
    Movie, MovieDetails, MovieRepository, MovieSummary, Review, ReviewRate, ReviewView, Reviewer,
};
pub use infrastructure::MovieRepositoryImpl;
