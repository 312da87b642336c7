use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::review::Review;
use crate::modules::movie::domain::services::rating;
use crate::shared::errors::{AppError, AppResult};

pub const REVIEW_ALREADY_ADDED: &str = "Review is already added.";

/// The three caller-editable fields of a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub name: String,
    pub category: String,
    pub description: String,
}

/// A movie with its embedded reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A movie without its reviews, as returned by lookups and listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(details: MovieDetails) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: details.name,
            category: details.category,
            description: details.description,
            rate: None,
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_review_from(&self, user_id: &Uuid) -> bool {
        self.reviews.iter().any(|review| review.is_by(user_id))
    }

    pub fn review_rates(&self) -> Vec<f64> {
        self.reviews.iter().map(|review| review.rate).collect()
    }

    /// Append `review` and recompute the mean rate.
    ///
    /// Fails with `Forbidden` if the reviewer already reviewed this movie; the
    /// movie is left untouched in that case.
    pub fn add_review(&mut self, review: Review) -> AppResult<f64> {
        if self.has_review_from(&review.user_id) {
            return Err(AppError::Forbidden(REVIEW_ALREADY_ADDED.to_string()));
        }

        let final_rate = rating::running_mean(&self.review_rates(), review.rate);
        self.reviews.push(review);
        self.rate = Some(final_rate);
        self.updated_at = Utc::now();

        Ok(final_rate)
    }

    pub fn apply_details(&mut self, details: MovieDetails) {
        self.name = details.name;
        self.category = details.category;
        self.description = details.description;
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            rate: self.rate,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
