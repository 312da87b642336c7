use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::movie::domain::value_objects::ReviewRate;

/// A review as stored inside its movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub comment: String,
    pub rate: f64,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: Uuid, comment: String, rate: ReviewRate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            comment,
            rate: rate.value(),
            created_at: Utc::now(),
        }
    }

    pub fn is_by(&self, user_id: &Uuid) -> bool {
        self.user_id == *user_id
    }
}

/// Public projection of a review: the reviewer is reduced to a display name,
/// and neither the review id nor the raw user reference is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub user: Option<Reviewer>,
    pub comment: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub name: String,
}

impl ReviewView {
    /// `reviewer_name` is `None` when the user record no longer exists
    pub fn from_review(review: &Review, reviewer_name: Option<String>) -> Self {
        Self {
            user: reviewer_name.map(|name| Reviewer { name }),
            comment: review.comment.clone(),
            rate: review.rate,
        }
    }
}
