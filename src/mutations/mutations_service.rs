//! Read-modify-write transactions over the portfolio document.
//!
//! Every operation loads the document, applies one transformation, rebuilds
//! the cached projections through the ledger calculator, and writes the
//! document back whole. A failure at any point leaves the stored document
//! exactly as it was; there are no partial writes.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::mutations_traits::MutationServiceTrait;
use crate::errors::Result;
use crate::instruments::{
    recompute, CashFlow, CashFlowUpdate, FlowType, Instrument, InstrumentError, InstrumentUpdate,
    NewCashFlow, NewInstrument, NewValuation, TransferInput, Valuation, ValuationUpdate,
};
use crate::portfolio::Portfolio;
use crate::store::PortfolioStore;
use crate::temporal::DateLike;

/// Service applying portfolio mutations against a document store.
pub struct MutationService {
    store: Arc<dyn PortfolioStore>,
}

impl MutationService {
    /// Creates a new MutationService instance.
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self { store }
    }

    /// Loads the user's document, or starts from an empty portfolio when none
    /// exists yet. The bootstrap is not persisted here; a mutation that fails
    /// before commit must leave the store without a document.
    async fn load_state(&self, user_id: &str) -> Result<Portfolio> {
        Ok(self
            .store
            .load_portfolio(user_id)
            .await?
            .unwrap_or_else(Portfolio::bootstrap))
    }

    /// Stamps and writes the document, returning the new state.
    async fn commit(&self, user_id: &str, mut portfolio: Portfolio) -> Result<Portfolio> {
        portfolio.updated_at = DateLike::now();
        self.store.save_portfolio(user_id, &portfolio).await?;
        Ok(portfolio)
    }
}

#[async_trait::async_trait]
impl MutationServiceTrait for MutationService {
    async fn get_portfolio(&self, user_id: &str) -> Result<Portfolio> {
        match self.store.load_portfolio(user_id).await? {
            Some(portfolio) => Ok(portfolio),
            None => {
                debug!("No portfolio document for user {}, bootstrapping", user_id);
                let portfolio = Portfolio::bootstrap();
                self.store.save_portfolio(user_id, &portfolio).await?;
                Ok(portfolio)
            }
        }
    }

    async fn create_instrument(
        &self,
        user_id: &str,
        new_instrument: NewInstrument,
    ) -> Result<Portfolio> {
        new_instrument.validate()?;
        let name = new_instrument.name.trim().to_string();

        let mut portfolio = self.load_state(user_id).await?;
        if portfolio.instrument(&name).is_some() {
            return Err(InstrumentError::DuplicateName(name).into());
        }
        debug!("Creating instrument '{}' for user {}", name, user_id);

        let now = DateLike::now();
        let seeded_value = new_instrument
            .current_value
            .unwrap_or(new_instrument.initial_deposit);
        let mut instrument = Instrument {
            name,
            category: new_instrument.category,
            broker: new_instrument.broker,
            description: new_instrument.description,
            cash_flows: vec![CashFlow {
                id: Uuid::new_v4().to_string(),
                date: now.clone(),
                amount: new_instrument.initial_deposit,
                flow_type: FlowType::Deposit,
                description: Some("Initial deposit".to_string()),
                transfer_id: None,
                transfer_from: None,
                transfer_to: None,
                created_at: Some(now.clone()),
            }],
            valuations: vec![Valuation {
                id: Uuid::new_v4().to_string(),
                date: now.clone(),
                value: seeded_value,
                auto: true,
                created_at: Some(now.clone()),
            }],
            created_at: Some(now),
            ..Default::default()
        };
        recompute(&mut instrument);

        portfolio.instruments.push(instrument);
        self.commit(user_id, portfolio).await
    }

    async fn update_instrument(
        &self,
        user_id: &str,
        update: InstrumentUpdate,
    ) -> Result<Portfolio> {
        update.validate()?;
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(&update.name)
            .ok_or_else(|| InstrumentError::NotFound(update.name.clone()))?;

        instrument.category = update.category;
        instrument.broker = update.broker;
        instrument.description = update.description;
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn delete_instrument(&self, user_id: &str, name: &str) -> Result<Portfolio> {
        let mut portfolio = self.load_state(user_id).await?;
        let before = portfolio.instruments.len();
        portfolio.instruments.retain(|i| i.name != name);
        if portfolio.instruments.len() == before {
            return Err(InstrumentError::NotFound(name.to_string()).into());
        }
        debug!("Deleted instrument '{}' for user {}", name, user_id);

        self.commit(user_id, portfolio).await
    }

    async fn add_cash_flow(&self, user_id: &str, new_flow: NewCashFlow) -> Result<Portfolio> {
        new_flow.validate()?;
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(&new_flow.instrument)
            .ok_or_else(|| InstrumentError::NotFound(new_flow.instrument.clone()))?;

        instrument.cash_flows.push(CashFlow {
            id: Uuid::new_v4().to_string(),
            date: new_flow.date,
            amount: new_flow.amount,
            flow_type: new_flow.flow_type,
            description: new_flow.description,
            transfer_id: None,
            transfer_from: None,
            transfer_to: None,
            created_at: Some(DateLike::now()),
        });
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn update_cash_flow(&self, user_id: &str, update: CashFlowUpdate) -> Result<Portfolio> {
        update.validate()?;
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(&update.instrument)
            .ok_or_else(|| InstrumentError::NotFound(update.instrument.clone()))?;
        let flow = instrument
            .cash_flows
            .iter_mut()
            .find(|f| f.id == update.id)
            .ok_or_else(|| InstrumentError::CashFlowNotFound(update.id.clone()))?;

        // Identity and transfer annotations survive the edit.
        flow.date = update.date;
        flow.amount = update.amount;
        flow.flow_type = update.flow_type;
        flow.description = update.description;
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn delete_cash_flow(
        &self,
        user_id: &str,
        instrument_name: &str,
        flow_id: &str,
    ) -> Result<Portfolio> {
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(instrument_name)
            .ok_or_else(|| InstrumentError::NotFound(instrument_name.to_string()))?;
        let position = instrument
            .cash_flows
            .iter()
            .position(|f| f.id == flow_id)
            .ok_or_else(|| InstrumentError::CashFlowNotFound(flow_id.to_string()))?;

        instrument.cash_flows.remove(position);
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn add_valuation(&self, user_id: &str, new_valuation: NewValuation) -> Result<Portfolio> {
        new_valuation.validate()?;
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(&new_valuation.instrument)
            .ok_or_else(|| InstrumentError::NotFound(new_valuation.instrument.clone()))?;

        instrument.valuations.push(Valuation {
            id: Uuid::new_v4().to_string(),
            date: new_valuation.date,
            value: new_valuation.value,
            auto: false,
            created_at: Some(DateLike::now()),
        });
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn update_valuation(&self, user_id: &str, update: ValuationUpdate) -> Result<Portfolio> {
        update.validate()?;
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(&update.instrument)
            .ok_or_else(|| InstrumentError::NotFound(update.instrument.clone()))?;
        let valuation = instrument
            .valuations
            .iter_mut()
            .find(|v| v.id == update.id)
            .ok_or_else(|| InstrumentError::ValuationNotFound(update.id.clone()))?;

        valuation.date = update.date;
        valuation.value = update.value;
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn delete_valuation(
        &self,
        user_id: &str,
        instrument_name: &str,
        valuation_id: &str,
    ) -> Result<Portfolio> {
        let mut portfolio = self.load_state(user_id).await?;
        let instrument = portfolio
            .instrument_mut(instrument_name)
            .ok_or_else(|| InstrumentError::NotFound(instrument_name.to_string()))?;
        let position = instrument
            .valuations
            .iter()
            .position(|v| v.id == valuation_id)
            .ok_or_else(|| InstrumentError::ValuationNotFound(valuation_id.to_string()))?;

        instrument.valuations.remove(position);
        recompute(instrument);

        self.commit(user_id, portfolio).await
    }

    async fn transfer(&self, user_id: &str, transfer: TransferInput) -> Result<Portfolio> {
        transfer.validate()?;
        let mut portfolio = self.load_state(user_id).await?;

        let from_index = portfolio
            .instruments
            .iter()
            .position(|i| i.name == transfer.from)
            .ok_or_else(|| InstrumentError::NotFound(transfer.from.clone()))?;
        let to_index = portfolio
            .instruments
            .iter()
            .position(|i| i.name == transfer.to)
            .ok_or_else(|| InstrumentError::NotFound(transfer.to.clone()))?;

        let available = portfolio.instruments[from_index].current_value;
        if transfer.amount > available {
            return Err(InstrumentError::InsufficientFunds {
                instrument: transfer.from,
                requested: transfer.amount,
                available,
            }
            .into());
        }
        debug!(
            "Transferring {} from '{}' to '{}' for user {}",
            transfer.amount, transfer.from, transfer.to, user_id
        );

        let correlation_id = Uuid::new_v4().to_string();
        let now = DateLike::now();

        let from = &mut portfolio.instruments[from_index];
        from.cash_flows.push(CashFlow {
            id: Uuid::new_v4().to_string(),
            date: transfer.date.clone(),
            amount: transfer.amount,
            flow_type: FlowType::Withdrawal,
            description: Some(
                transfer
                    .description
                    .clone()
                    .unwrap_or_else(|| format!("Transfer to {}", transfer.to)),
            ),
            transfer_id: Some(correlation_id.clone()),
            transfer_from: None,
            transfer_to: Some(transfer.to.clone()),
            created_at: Some(now.clone()),
        });
        from.valuations.push(Valuation {
            id: Uuid::new_v4().to_string(),
            date: transfer.date.clone(),
            value: (available - transfer.amount).max(Decimal::ZERO),
            auto: true,
            created_at: Some(now.clone()),
        });
        recompute(from);

        let to = &mut portfolio.instruments[to_index];
        let received_value = to.current_value + transfer.amount;
        to.cash_flows.push(CashFlow {
            id: Uuid::new_v4().to_string(),
            date: transfer.date.clone(),
            amount: transfer.amount,
            flow_type: FlowType::Deposit,
            description: Some(
                transfer
                    .description
                    .unwrap_or_else(|| format!("Transfer from {}", transfer.from)),
            ),
            transfer_id: Some(correlation_id),
            transfer_from: Some(transfer.from),
            transfer_to: None,
            created_at: Some(now.clone()),
        });
        to.valuations.push(Valuation {
            id: Uuid::new_v4().to_string(),
            date: transfer.date,
            value: received_value,
            auto: true,
            created_at: Some(now),
        });
        recompute(to);

        self.commit(user_id, portfolio).await
    }
}
