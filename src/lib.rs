//! Foliotrack Core - Portfolio valuation and cash-flow reconciliation.
//!
//! This crate tracks manually-entered investment instruments: their deposit
//! and withdrawal history, sparse valuation snapshots, and the derived
//! metrics built from both. It is storage-agnostic and defines the store
//! trait implemented by persistence backends.

pub mod constants;
pub mod errors;
pub mod instruments;
pub mod mutations;
pub mod portfolio;
pub mod reports;
pub mod store;
pub mod temporal;

// Re-export common types from the instrument and portfolio modules
pub use instruments::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
