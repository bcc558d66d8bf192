//! # Sugar Monitor Core Types
//!
//! Layer 0 of the workspace: the plain data structures shared by every other
//! crate. Nothing here performs calculations beyond parsing.

pub mod constants;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use constants::{PREFERENTIAL_TARIFF_RATE, STANDARD_TARIFF_RATE};
pub use enums::{CorrelationStrength, WindowStatus};
pub use error::CoreError;
pub use structs::{DailyObservation, MetricCard, parse_record_date};
