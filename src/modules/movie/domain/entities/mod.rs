pub mod movie;
pub mod review;

pub use movie::{Movie, MovieDetails, MovieSummary, REVIEW_ALREADY_ADDED};
pub use review::{Review, ReviewView, Reviewer};
