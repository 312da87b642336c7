pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Movie, MovieDetails, MovieSummary, Review, ReviewView, Reviewer};
pub use repositories::MovieRepository;
pub use value_objects::ReviewRate;
