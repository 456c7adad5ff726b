//! Step definitions for task completion BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
