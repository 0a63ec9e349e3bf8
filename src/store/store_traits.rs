//! Portfolio store trait.
//!
//! This trait defines the contract for document persistence without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::Portfolio;

/// Contract for persisting portfolio documents.
///
/// One document per user id, replaced whole on save; the engine relies on
/// that document-level atomic replace for its transactional behavior.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Loads the user's portfolio document.
    ///
    /// `Ok(None)` means no document exists yet (a first-use condition, not a
    /// failure); `Err` means the store itself failed.
    async fn load_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>>;

    /// Replaces the user's portfolio document.
    async fn save_portfolio(&self, user_id: &str, portfolio: &Portfolio) -> Result<()>;
}
