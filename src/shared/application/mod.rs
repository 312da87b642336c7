//! Shared application layer patterns
//!
//! This module contains application-level abstractions used by the
//! HTTP handlers and services.
pub mod pagination;
pub mod response;

pub use pagination::*;
pub use response::{Ack, ApiResponse, PagedResponse};
