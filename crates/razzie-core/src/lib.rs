//! Core types and the producer-interval computation for the Razzie API.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::NominationStore`]; the API layer
//! consumes it and hands the rows to [`intervals::compute_intervals`].

pub mod intervals;
pub mod producers;
pub mod record;
pub mod store;

pub use intervals::compute_intervals;
pub use producers::split_producers;
pub use record::{IntervalResult, ProducerInterval, WinRecord};
