//! Diesel-based implementation of MovieRepository
//!
//! Reviews live in `movie_reviews`, a child table only ever touched through
//! its movie. Appending a review locks the movie row (`SELECT ... FOR UPDATE`)
//! so the duplicate check, the insert, and the rate update happen as one unit.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;
use uuid::Uuid;

use crate::modules::movie::domain::{
    entities::REVIEW_ALREADY_ADDED,
    services::rating,
    Movie, MovieDetails, MovieRepository, MovieSummary, Review, ReviewView,
};
use crate::modules::movie::infrastructure::models::{
    MovieDetailsChangeset, MovieModel, MovieReviewModel,
};
use crate::schema::{movie_reviews, movies, users};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::{LogContext, TimedOperation};

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Run a blocking diesel closure on the blocking thread pool
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new(operation);

        let result = task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;
            f(&mut *conn)
        })
        .await?;

        LogContext::db_operation(operation, "movies", timer.elapsed_ms());
        result
    }
}

fn review_insert_error(err: DieselError) -> AppError {
    match err {
        // movie_reviews_movie_user_unique
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AppError::Forbidden(REVIEW_ALREADY_ADDED.to_string())
        }
        other => AppError::from(other),
    }
}

fn load_reviews(conn: &mut PgConnection, movie: &MovieModel) -> AppResult<Vec<Review>> {
    let rows = MovieReviewModel::belonging_to(movie)
        .select(MovieReviewModel::as_select())
        .order((movie_reviews::created_at.asc(), movie_reviews::id.asc()))
        .load::<MovieReviewModel>(conn)?;

    Ok(rows.into_iter().map(MovieReviewModel::into_review).collect())
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let model = MovieModel::from_entity(movie);

        self.with_conn("insert_movie", move |conn| {
            let inserted = diesel::insert_into(movies::table)
                .values(&model)
                .returning(MovieModel::as_returning())
                .get_result::<MovieModel>(conn)?;

            // A fresh movie never has reviews
            Ok(inserted.into_movie(Vec::new()))
        })
        .await
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<MovieSummary>> {
        let id = *id;

        self.with_conn("find_movie", move |conn| {
            let model = movies::table
                .find(id)
                .select(MovieModel::as_select())
                .first::<MovieModel>(conn)
                .optional()?;
            Ok(model.map(MovieModel::into_summary))
        })
        .await
    }

    async fn find_with_reviews(&self, id: &Uuid) -> AppResult<Option<Movie>> {
        let id = *id;

        self.with_conn("find_movie_with_reviews", move |conn| {
            let model = movies::table
                .find(id)
                .select(MovieModel::as_select())
                .first::<MovieModel>(conn)
                .optional()?;

            match model {
                Some(m) => {
                    let reviews = load_reviews(conn, &m)?;
                    Ok(Some(m.into_movie(reviews)))
                }
                None => Ok(None),
            }
        })
        .await
    }

    async fn update_details(&self, id: &Uuid, details: &MovieDetails) -> AppResult<bool> {
        let id = *id;
        let details = details.clone();

        self.with_conn("update_movie", move |conn| {
            let changeset = MovieDetailsChangeset {
                name: &details.name,
                category: &details.category,
                description: &details.description,
                updated_at: Utc::now(),
            };

            let n = diesel::update(movies::table.find(id))
                .set(&changeset)
                .execute(conn)?;
            Ok(n > 0)
        })
        .await
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let id = *id;

        // movie_reviews rows go with it (ON DELETE CASCADE)
        self.with_conn("delete_movie", move |conn| {
            let n = diesel::delete(movies::table.find(id)).execute(conn)?;
            Ok(n > 0)
        })
        .await
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<MovieSummary>> {
        let params = *params;

        self.with_conn("list_movies", move |conn| {
            let total: i64 = movies::table.count().get_result(conn)?;

            let rows = movies::table
                .select(MovieModel::as_select())
                .order((movies::created_at.asc(), movies::id.asc()))
                .offset(params.offset())
                .limit(params.limit())
                .load::<MovieModel>(conn)?;

            let items = rows.into_iter().map(MovieModel::into_summary).collect();
            Ok(PaginatedResult::new(items, total.max(0) as u64, &params))
        })
        .await
    }

    async fn list_reviews(&self, movie_id: &Uuid) -> AppResult<Option<Vec<ReviewView>>> {
        let movie_id = *movie_id;

        self.with_conn("list_movie_reviews", move |conn| {
            // Share the movie lock so a concurrent delete cannot land between the two reads
            conn.transaction::<Option<Vec<ReviewView>>, AppError, _>(|conn| {
                let exists = movies::table
                    .find(movie_id)
                    .select(movies::id)
                    .for_share()
                    .first::<Uuid>(conn)
                    .optional()?
                    .is_some();
                if !exists {
                    return Ok(None);
                }

                let rows = movie_reviews::table
                    .left_join(users::table.on(users::id.eq(movie_reviews::user_id)))
                    .filter(movie_reviews::movie_id.eq(movie_id))
                    .order((movie_reviews::created_at.asc(), movie_reviews::id.asc()))
                    .select((MovieReviewModel::as_select(), users::name.nullable()))
                    .load::<(MovieReviewModel, Option<String>)>(conn)?;

                let views = rows
                    .into_iter()
                    .map(|(row, reviewer_name)| {
                        ReviewView::from_review(&row.into_review(), reviewer_name)
                    })
                    .collect();
                Ok(Some(views))
            })
        })
        .await
    }

    async fn append_review(&self, movie_id: &Uuid, review: &Review) -> AppResult<f64> {
        let movie_id = *movie_id;
        let new_row = MovieReviewModel::from_entity(movie_id, review);

        self.with_conn("append_movie_review", move |conn| {
            conn.transaction::<f64, AppError, _>(|conn| {
                // Serializes concurrent reviews of the same movie
                movies::table
                    .find(movie_id)
                    .select(movies::id)
                    .for_update()
                    .first::<Uuid>(conn)
                    .optional()?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Movie with ID {} not found", movie_id))
                    })?;

                let existing = movie_reviews::table
                    .filter(movie_reviews::movie_id.eq(movie_id))
                    .select((movie_reviews::user_id, movie_reviews::rate))
                    .load::<(Uuid, f64)>(conn)?;

                if existing.iter().any(|(user_id, _)| *user_id == new_row.user_id) {
                    return Err(AppError::Forbidden(REVIEW_ALREADY_ADDED.to_string()));
                }

                let rates: Vec<f64> = existing.iter().map(|(_, rate)| *rate).collect();
                let final_rate = rating::running_mean(&rates, new_row.rate);

                diesel::insert_into(movie_reviews::table)
                    .values(&new_row)
                    .execute(conn)
                    .map_err(review_insert_error)?;

                diesel::update(movies::table.find(movie_id))
                    .set((
                        movies::rate.eq(Some(final_rate)),
                        movies::updated_at.eq(Utc::now()),
                    ))
                    .execute(conn)?;

                Ok(final_rate)
            })
        })
        .await
    }
}
