use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A reviewer's rating, guaranteed finite and within the accepted range
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ReviewRate(f64);

impl ReviewRate {
    pub fn new(value: f64) -> AppResult<Self> {
        Validator::validate_review_rate(value)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ReviewRate {
    type Error = crate::shared::errors::AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReviewRate> for f64 {
    fn from(rate: ReviewRate) -> Self {
        rate.0
    }
}
