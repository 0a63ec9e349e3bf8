//! Instrument-related error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during instrument lookups and ledger mutations.
#[derive(Error, Debug)]
pub enum InstrumentError {
    #[error("Instrument '{0}' not found")]
    NotFound(String),

    #[error("Cash flow '{0}' not found")]
    CashFlowNotFound(String),

    #[error("Valuation '{0}' not found")]
    ValuationNotFound(String),

    #[error("Instrument '{0}' already exists")]
    DuplicateName(String),

    #[error(
        "Insufficient funds in '{instrument}': requested {requested}, available {available}"
    )]
    InsufficientFunds {
        instrument: String,
        requested: Decimal,
        available: Decimal,
    },
}
