use crate::modules::movie::domain::entities::{Movie, MovieSummary, Review};
use crate::schema::{movie_reviews, movies};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ============= MOVIE MODELS =============

// For reading and inserting movies
#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For overwriting the editable fields (excludes id, rate and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieDetailsChangeset<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl MovieModel {
    pub fn from_entity(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name.clone(),
            category: movie.category.clone(),
            description: movie.description.clone(),
            rate: movie.rate,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }

    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            rate: self.rate,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_movie(self, reviews: Vec<Review>) -> Movie {
        Movie {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            rate: self.rate,
            reviews,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============= EMBEDDED REVIEWS =============

#[derive(Queryable, Selectable, Insertable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = movie_reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieReviewModel {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub comment: String,
    pub rate: f64,
    pub created_at: DateTime<Utc>,
}

impl MovieReviewModel {
    pub fn from_entity(movie_id: Uuid, review: &Review) -> Self {
        Self {
            id: review.id,
            movie_id,
            user_id: review.user_id,
            comment: review.comment.clone(),
            rate: review.rate,
            created_at: review.created_at,
        }
    }

    pub fn into_review(self) -> Review {
        Review {
            id: self.id,
            user_id: self.user_id,
            comment: self.comment,
            rate: self.rate,
            created_at: self.created_at,
        }
    }
}
