//! Task lifecycle management for Steward.
//!
//! This module implements the owner-scoped task store: creating tasks with
//! validated defaults, applying typed partial updates with status-transition
//! side effects, hard deletion, ordered listing, and derived productivity
//! analytics. Completing a task stamps `completed_at`; moving a task away
//! from completed clears it again. The module follows hexagonal
//! architecture:
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
