//! Test data factories using builder pattern
//!
//! Provides convenient methods to create test data with sensible defaults
use movie_records::modules::movie::{Movie, MovieDetails, Review, ReviewRate};
use uuid::Uuid;

pub struct MovieFactory {
    name: String,
    category: String,
    description: String,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            name: "Test Movie".to_string(),
            category: "Drama".to_string(),
            description: "A movie used in tests".to_string(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn details(self) -> MovieDetails {
        MovieDetails {
            name: self.name,
            category: self.category,
            description: self.description,
        }
    }

    pub fn build(self) -> Movie {
        Movie::new(self.details())
    }

    /// Request body accepted by create and update
    pub fn json(self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "category": self.category,
            "description": self.description,
        })
    }
}

/// A review by `user` with a valid rate
pub fn review_by(user: Uuid, comment: &str, rate: f64) -> Review {
    let rate = ReviewRate::new(rate).expect("factory rate must be within 1..=5");
    Review::new(user, comment.to_string(), rate)
}
