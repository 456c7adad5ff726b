//! Adapter implementations of the advisor ports.

pub mod memory;
