//! Mutation service trait.
//!
//! This trait defines the contract for portfolio mutations without any
//! store-specific types, allowing different persistence backends behind it.

use async_trait::async_trait;

use crate::errors::Result;
use crate::instruments::{
    CashFlowUpdate, InstrumentUpdate, NewCashFlow, NewInstrument, NewValuation, TransferInput,
    ValuationUpdate,
};
use crate::portfolio::Portfolio;

/// Contract for every write against a user's portfolio document.
///
/// Each operation is one read-modify-write transaction: load the document,
/// apply the change, rebuild the cached projections, save the document whole.
/// The new state is returned for the caller to propagate; on failure the
/// stored document is left exactly as it was.
#[async_trait]
pub trait MutationServiceTrait: Send + Sync {
    /// Loads the user's portfolio, creating and persisting an empty one on
    /// first use.
    async fn get_portfolio(&self, user_id: &str) -> Result<Portfolio>;

    /// Creates an instrument seeded with its initial deposit cash flow and
    /// first valuation.
    async fn create_instrument(
        &self,
        user_id: &str,
        new_instrument: NewInstrument,
    ) -> Result<Portfolio>;

    /// Updates an instrument's descriptive fields. The name is its identity
    /// and cannot change.
    async fn update_instrument(&self, user_id: &str, update: InstrumentUpdate)
        -> Result<Portfolio>;

    /// Removes an instrument and its entire history.
    async fn delete_instrument(&self, user_id: &str, name: &str) -> Result<Portfolio>;

    /// Records a deposit or withdrawal against an instrument.
    async fn add_cash_flow(&self, user_id: &str, new_flow: NewCashFlow) -> Result<Portfolio>;

    /// Replaces a cash flow's date, amount, direction and description in
    /// place, keeping its id.
    async fn update_cash_flow(&self, user_id: &str, update: CashFlowUpdate) -> Result<Portfolio>;

    /// Removes a cash flow by id.
    async fn delete_cash_flow(
        &self,
        user_id: &str,
        instrument: &str,
        flow_id: &str,
    ) -> Result<Portfolio>;

    /// Records a valuation snapshot for an instrument.
    async fn add_valuation(&self, user_id: &str, new_valuation: NewValuation) -> Result<Portfolio>;

    /// Replaces a valuation's date and value in place, keeping its id.
    async fn update_valuation(&self, user_id: &str, update: ValuationUpdate) -> Result<Portfolio>;

    /// Removes a valuation by id.
    async fn delete_valuation(
        &self,
        user_id: &str,
        instrument: &str,
        valuation_id: &str,
    ) -> Result<Portfolio>;

    /// Moves value between two instruments as one atomic double entry.
    async fn transfer(&self, user_id: &str, transfer: TransferInput) -> Result<Portfolio>;
}
