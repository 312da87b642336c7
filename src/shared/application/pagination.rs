//! Pagination support for queries
//!
//! Standard pagination model used by list endpoints
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Build validated params from optional query values
    pub fn from_query(page: Option<u32>, page_size: Option<u32>) -> AppResult<Self> {
        let params = Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        Validator::validate_pagination(params.page, params.page_size)?;
        Ok(params)
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * self.page_size as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// Parse one numeric query value. Absent or blank values yield `None`.
pub fn parse_query_number(name: &str, raw: Option<&str>) -> AppResult<Option<u32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<u32>().map(Some).map_err(|_| {
            AppError::InvalidInput(format!("{} must be a positive integer", name))
        }),
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages: page_count(total_count, params.page_size),
        }
    }
}

/// `ceil(total / page_size)`; zero when there is nothing to page through
pub fn page_count(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as u64) as u32
}
