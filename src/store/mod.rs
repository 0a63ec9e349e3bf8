//! Store module - the persistence boundary for portfolio documents.

mod memory_store;
mod store_errors;
mod store_traits;

#[cfg(test)]
mod memory_store_tests;

pub use memory_store::MemoryStore;
pub use store_errors::StoreError;
pub use store_traits::PortfolioStore;
