//! In-memory document store.
//!
//! Backs tests and embeddings that have no external document store. The
//! documents are held in serialized form so every load and save exercises
//! the same JSON round-trip a remote store would.

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use serde_json::Value;

use super::store_errors::StoreError;
use super::store_traits::PortfolioStore;
use crate::constants::PORTFOLIO_DOCUMENT_PREFIX;
use crate::errors::Result;
use crate::portfolio::Portfolio;

/// Concurrent in-memory portfolio store keyed by user id.
#[derive(Default)]
pub struct MemoryStore {
    documents: DashMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn document_key(user_id: &str) -> String {
        format!("{}/{}", PORTFOLIO_DOCUMENT_PREFIX, user_id)
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn load_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>> {
        match self.documents.get(&Self::document_key(user_id)) {
            Some(doc) => {
                let portfolio = serde_json::from_value(doc.clone())
                    .map_err(|e| StoreError::DecodeFailed(e.to_string()))?;
                Ok(Some(portfolio))
            }
            None => Ok(None),
        }
    }

    async fn save_portfolio(&self, user_id: &str, portfolio: &Portfolio) -> Result<()> {
        let doc = serde_json::to_value(portfolio)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        self.documents.insert(Self::document_key(user_id), doc);
        debug!("Saved portfolio document for user {}", user_id);
        Ok(())
    }
}
