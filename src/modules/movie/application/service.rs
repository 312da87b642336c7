use crate::modules::movie::domain::{
    Movie, MovieDetails, MovieRepository, MovieSummary, Review, ReviewRate, ReviewView,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

fn movie_not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Movie with ID {} not found", id))
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    pub async fn create_movie(&self, details: MovieDetails) -> AppResult<Movie> {
        let movie = Movie::new(details);
        let saved = self.movie_repo.save(&movie).await?;

        log_info!("Created movie {} ('{}')", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_movie(&self, id: &Uuid) -> AppResult<MovieSummary> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| movie_not_found(id))
    }

    pub async fn update_movie(&self, id: &Uuid, details: MovieDetails) -> AppResult<()> {
        if !self.movie_repo.update_details(id, &details).await? {
            return Err(movie_not_found(id));
        }

        log_debug!("Updated movie {}", id);
        Ok(())
    }

    pub async fn delete_movie(&self, id: &Uuid) -> AppResult<()> {
        if !self.movie_repo.delete(id).await? {
            return Err(movie_not_found(id));
        }

        log_info!("Deleted movie {}", id);
        Ok(())
    }

    pub async fn list_movies(
        &self,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<MovieSummary>> {
        let timer = TimedOperation::new("list_movies");
        let page = self.movie_repo.list(&params).await?;

        timer.finish_with_info(&format!(
            "page {}/{}, {} items",
            page.page,
            page.total_pages,
            page.items.len()
        ));
        Ok(page)
    }

    pub async fn list_reviews(&self, movie_id: &Uuid) -> AppResult<Vec<ReviewView>> {
        self.movie_repo
            .list_reviews(movie_id)
            .await?
            .ok_or_else(|| movie_not_found(movie_id))
    }

    /// Add `reviewer_id`'s review to a movie and return the movie's new mean rate
    pub async fn add_review(
        &self,
        movie_id: &Uuid,
        reviewer_id: Uuid,
        comment: String,
        rate: f64,
    ) -> AppResult<f64> {
        let rate = ReviewRate::new(rate)?;

        let mut movie = self
            .movie_repo
            .find_with_reviews(movie_id)
            .await?
            .ok_or_else(|| movie_not_found(movie_id))?;

        let review = Review::new(reviewer_id, comment, rate);

        // Rejects a second review from the same user before touching storage
        let expected_rate = movie.add_review(review.clone())?;

        let stored_rate = self.movie_repo.append_review(movie_id, &review).await?;

        if (stored_rate - expected_rate).abs() > f64::EPSILON {
            log_debug!(
                "Movie {} received concurrent reviews; stored rate {} differs from {}",
                movie_id,
                stored_rate,
                expected_rate
            );
        }

        log_info!(
            "User {} reviewed movie {} (rate {}), new rate {:.2}",
            reviewer_id,
            movie_id,
            rate.value(),
            stored_rate
        );
        Ok(stored_rate)
    }
}
