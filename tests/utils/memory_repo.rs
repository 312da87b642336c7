//! In-memory MovieRepository used to drive the HTTP layer without PostgreSQL
//!
//! Mirrors the storage contract of the Diesel implementation: insertion
//! order for listings and reviews, one review per user, NotFound on a
//! vanished movie, and the rate recomputed on every append.
use async_trait::async_trait;
use movie_records::modules::movie::{
    Movie, MovieDetails, MovieRepository, MovieSummary, Review, ReviewView,
};
use movie_records::shared::application::{PaginatedResult, PaginationParams};
use movie_records::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct Store {
    movies: Vec<Movie>,
    users: HashMap<Uuid, String>,
}

#[derive(Default)]
pub struct InMemoryMovieRepository {
    store: Mutex<Store>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user display name (the user directory is external)
    pub fn add_user(&self, id: Uuid, name: &str) {
        self.lock().users.insert(id, name.to_string());
    }

    pub fn movie_count(&self) -> usize {
        self.lock().movies.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        self.lock().movies.push(movie.clone());
        Ok(movie.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<MovieSummary>> {
        Ok(self
            .lock()
            .movies
            .iter()
            .find(|m| m.id == *id)
            .map(Movie::summary))
    }

    async fn find_with_reviews(&self, id: &Uuid) -> AppResult<Option<Movie>> {
        Ok(self.lock().movies.iter().find(|m| m.id == *id).cloned())
    }

    async fn update_details(&self, id: &Uuid, details: &MovieDetails) -> AppResult<bool> {
        let mut store = self.lock();
        match store.movies.iter_mut().find(|m| m.id == *id) {
            Some(movie) => {
                movie.apply_details(details.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut store = self.lock();
        let before = store.movies.len();
        store.movies.retain(|m| m.id != *id);
        Ok(store.movies.len() < before)
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<MovieSummary>> {
        let store = self.lock();
        let items = store
            .movies
            .iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .map(Movie::summary)
            .collect();
        Ok(PaginatedResult::new(
            items,
            store.movies.len() as u64,
            params,
        ))
    }

    async fn list_reviews(&self, movie_id: &Uuid) -> AppResult<Option<Vec<ReviewView>>> {
        let store = self.lock();
        Ok(store.movies.iter().find(|m| m.id == *movie_id).map(|movie| {
            movie
                .reviews
                .iter()
                .map(|review| {
                    ReviewView::from_review(review, store.users.get(&review.user_id).cloned())
                })
                .collect()
        }))
    }

    async fn append_review(&self, movie_id: &Uuid, review: &Review) -> AppResult<f64> {
        let mut store = self.lock();
        let movie = store
            .movies
            .iter_mut()
            .find(|m| m.id == *movie_id)
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", movie_id)))?;

        movie.add_review(review.clone())
    }
}
