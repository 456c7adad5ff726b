//! Port contracts for the advice capability.

pub mod generative;

pub use generative::{GenerativeClient, GenerativeClientError};
