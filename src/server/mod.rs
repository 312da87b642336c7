//! HTTP server assembly: shared state, routes and middleware.
pub mod health;
pub mod identity;
pub mod middleware;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::modules::movie::{handlers, MovieRepository, MovieService};
use crate::shared::infrastructure::Database;

#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    /// Absent when the service runs on a non-database store
    pub database: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, database: Option<Arc<Database>>) -> Self {
        Self {
            movie_service: Arc::new(MovieService::new(movie_repo)),
            database,
        }
    }
}

impl FromRef<AppState> for Arc<MovieService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.movie_service)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/movies",
            get(handlers::list_movies).post(handlers::create_movie),
        )
        .route(
            "/movies/:id",
            get(handlers::get_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        .route(
            "/movies/:id/reviews",
            get(handlers::list_reviews).post(handlers::add_review),
        )
        .route("/health", get(health::health_handler))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}
