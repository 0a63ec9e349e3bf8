//! Persistence boundary error types.

use thiserror::Error;

/// Errors surfaced by portfolio document stores.
///
/// The engine never retries on its own; these carry enough context for the
/// embedding application to decide whether to retry or give up.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read portfolio document: {0}")]
    ReadFailed(String),

    #[error("Failed to write portfolio document: {0}")]
    WriteFailed(String),

    #[error("Failed to decode portfolio document: {0}")]
    DecodeFailed(String),
}
