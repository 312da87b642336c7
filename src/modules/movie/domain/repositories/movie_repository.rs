//! Repository trait for movie persistence
//!
//! Reviews have no lifecycle of their own, so they are only reachable
//! through the movie that embeds them.
use crate::modules::movie::domain::entities::{
    Movie, MovieDetails, MovieSummary, Review, ReviewView,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Persist a new movie and return it as stored
    async fn save(&self, movie: &Movie) -> AppResult<Movie>;

    /// Movie without its reviews
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<MovieSummary>>;

    /// Movie including every review, in insertion order
    async fn find_with_reviews(&self, id: &Uuid) -> AppResult<Option<Movie>>;

    /// Overwrite name/category/description. Returns false if no movie matched.
    async fn update_details(&self, id: &Uuid, details: &MovieDetails) -> AppResult<bool>;

    /// Remove a movie and its reviews. Returns false if no movie matched.
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;

    /// One page of movies, oldest first
    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<MovieSummary>>;

    /// Reviews with reviewer display names, or None if the movie does not exist
    async fn list_reviews(&self, movie_id: &Uuid) -> AppResult<Option<Vec<ReviewView>>>;

    /// Append a review and store the recomputed mean rate in one atomic step.
    ///
    /// Implementations must re-check the one-review-per-user rule under the
    /// same lock as the write and fail with `Forbidden` on a duplicate, or
    /// `NotFound` if the movie vanished. Returns the new mean rate.
    async fn append_review(&self, movie_id: &Uuid, review: &Review) -> AppResult<f64>;
}
