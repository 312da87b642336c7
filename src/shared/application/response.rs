//! JSON envelopes returned by every successful endpoint
use serde::{Deserialize, Serialize};

/// `{ "success": true, "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true }` for operations with nothing to return
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "pages": n, "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub success: bool,
    pub pages: u32,
    pub data: Vec<T>,
}

impl<T> From<super::PaginatedResult<T>> for PagedResponse<T> {
    fn from(result: super::PaginatedResult<T>) -> Self {
        Self {
            success: true,
            pages: result.total_pages,
            data: result.items,
        }
    }
}
