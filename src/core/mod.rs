//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod log;
pub mod rates;
pub mod report;
pub mod source;

// Re-export main types for cleaner imports
pub use currency::Currency;
pub use rates::RateTable;
pub use source::{FetchError, RateSource};
