use crate::shared::errors::AppError;

pub const MIN_REVIEW_RATE: f64 = 1.0;
pub const MAX_REVIEW_RATE: f64 = 5.0;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct Validator;

impl Validator {
    pub fn validate_review_rate(rate: f64) -> Result<(), AppError> {
        if !rate.is_finite() {
            return Err(AppError::ValidationError(
                "Rate must be a number".to_string(),
            ));
        }
        if !(MIN_REVIEW_RATE..=MAX_REVIEW_RATE).contains(&rate) {
            return Err(AppError::ValidationError(format!(
                "Rate must be between {} and {}",
                MIN_REVIEW_RATE, MAX_REVIEW_RATE
            )));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page must be at least 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}
