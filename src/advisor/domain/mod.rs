//! Domain model for the advice capability.

mod advice;
mod error;

pub use advice::{Advice, AdviceQuery, ProductivityDigest, TaskDigest};
pub use error::AdvisorError;
