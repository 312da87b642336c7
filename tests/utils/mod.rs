// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod memory_repo;
pub mod test_db;
