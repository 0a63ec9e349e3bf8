//! Reports module - flattened feeds and summaries for exports and charts.

mod reports_model;
mod reports_service;


pub use reports_model::{
    EvolutionPoint, LedgerEntry, LedgerEntryKind, MonthlyFlows, PeriodReport, ReportRow,
    ReportSummary,
};
pub use reports_service::{evolution_series, ledger_entries, monthly_flows, report_summary};
