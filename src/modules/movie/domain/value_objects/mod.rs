pub mod review_rate;

pub use review_rate::ReviewRate;
