//! AI-assisted productivity advice for Steward.
//!
//! This module turns a user's task set into prompts for a generative model
//! and shapes the responses into advice and insight lists. The model itself
//! is an injected capability behind the [`ports::GenerativeClient`] trait:
//! the crate never owns credentials, rate limits, or transport. Insight
//! generation degrades to a fixed fallback list when the capability fails.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
