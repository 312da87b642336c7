use super::application::MovieService;
use super::domain::{Movie, MovieDetails, MovieSummary, ReviewView};
use crate::server::identity::AuthenticatedUser;
use crate::shared::application::{
    parse_query_number, Ack, ApiResponse, PagedResponse, PaginationParams,
};
use crate::shared::errors::{AppError, AppResult};

use crate::log_debug;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Body of create and update; every field is required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRequest {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl From<MovieRequest> for MovieDetails {
    fn from(request: MovieRequest) -> Self {
        MovieDetails {
            name: request.name,
            category: request.category,
            description: request.description,
        }
    }
}

/// Raw paging values; an empty value (`?page=`) means "use the default"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddReviewRequest {
    pub comment: String,
    pub rate: f64,
}

pub async fn create_movie(
    State(movie_service): State<Arc<MovieService>>,
    Json(request): Json<MovieRequest>,
) -> AppResult<Json<ApiResponse<Movie>>> {
    let movie = movie_service.create_movie(request.into()).await?;
    Ok(Json(ApiResponse::ok(movie)))
}

pub async fn get_movie(
    State(movie_service): State<Arc<MovieService>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<MovieSummary>>> {
    let movie = movie_service.get_movie(&id).await?;
    Ok(Json(ApiResponse::ok(movie)))
}

pub async fn update_movie(
    State(movie_service): State<Arc<MovieService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<MovieRequest>,
) -> AppResult<Json<Ack>> {
    movie_service.update_movie(&id, request.into()).await?;
    Ok(Json(Ack::ok()))
}

pub async fn delete_movie(
    State(movie_service): State<Arc<MovieService>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Ack>> {
    movie_service.delete_movie(&id).await?;
    Ok(Json(Ack::ok()))
}

pub async fn list_movies(
    State(movie_service): State<Arc<MovieService>>,
    query: Result<Query<ListMoviesQuery>, QueryRejection>,
) -> AppResult<Json<PagedResponse<MovieSummary>>> {
    let Query(query) =
        query.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let params = PaginationParams::from_query(
        parse_query_number("page", query.page.as_deref())?,
        parse_query_number("pageSize", query.page_size.as_deref())?,
    )?;
    let page = movie_service.list_movies(params).await?;
    Ok(Json(page.into()))
}

pub async fn list_reviews(
    State(movie_service): State<Arc<MovieService>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<ReviewView>>>> {
    let reviews = movie_service.list_reviews(&id).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}

pub async fn add_review(
    State(movie_service): State<Arc<MovieService>>,
    Path(id): Path<Uuid>,
    user: AuthenticatedUser,
    Json(request): Json<AddReviewRequest>,
) -> AppResult<(StatusCode, Json<Ack>)> {
    log_debug!(
        "add_review called - movie: {}, user: {}, rate: {}",
        id,
        user.id,
        request.rate
    );

    movie_service
        .add_review(&id, user.id, request.comment, request.rate)
        .await?;

    Ok((StatusCode::CREATED, Json(Ack::ok())))
}
