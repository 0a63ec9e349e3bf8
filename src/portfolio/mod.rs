//! Portfolio module - the stored document model and pure aggregation.

mod portfolio_aggregator;
mod portfolio_model;


pub use portfolio_aggregator::{period_performance, period_totals, portfolio_totals};
pub use portfolio_model::{
    DateRange, InstrumentPeriodPerformance, PeriodTotals, Portfolio, PortfolioTotals,
};
