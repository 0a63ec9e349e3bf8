//! Instruments module - domain models, ledger projections, and point-in-time
//! value resolution.

mod instruments_errors;
mod instruments_model;
mod ledger_calculator;
mod valuation_resolver;



#[cfg(test)]
mod valuation_resolver_tests;

pub use instruments_errors::InstrumentError;
pub use instruments_model::{
    CashFlow, CashFlowUpdate, Category, FlowType, Instrument, InstrumentUpdate, NewCashFlow,
    NewInstrument, NewValuation, TransferInput, Valuation, ValuationUpdate,
};
pub use ledger_calculator::{
    apply_flow_totals, current_value, flow_totals, gain, recompute, refresh_valuation_cache,
    yield_pct, LedgerTotals,
};
pub use valuation_resolver::value_as_of;
