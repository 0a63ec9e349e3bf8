//! Pure aggregation across the whole portfolio.
//!
//! Every function here reads the histories through the temporal normalizer
//! and the instrument calculators; nothing is mutated and nothing is cached.

use rust_decimal::Decimal;

use super::portfolio_model::{
    DateRange, InstrumentPeriodPerformance, PeriodTotals, Portfolio, PortfolioTotals,
};
use crate::instruments::{current_value, flow_totals, value_as_of, FlowType};
use crate::temporal::normalize;

/// Headline figures across every instrument.
///
/// `total_invested` sums each instrument's floored net invested capital, so
/// one over-withdrawn instrument cannot mask capital still at risk in
/// another.
pub fn portfolio_totals(portfolio: &Portfolio) -> PortfolioTotals {
    let mut total_invested = Decimal::ZERO;
    let mut value = Decimal::ZERO;

    for instrument in &portfolio.instruments {
        total_invested += flow_totals(instrument).net_invested;
        value += current_value(instrument);
    }

    let gain = value - total_invested;
    let yield_pct = if total_invested > Decimal::ZERO {
        gain / total_invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    PortfolioTotals {
        total_invested,
        current_value: value,
        gain,
        yield_pct,
    }
}

/// Sums deposit and withdrawal activity, optionally scoped to a range.
///
/// `None` means the whole history. Flows with unreadable dates are excluded
/// either way.
pub fn period_totals(portfolio: &Portfolio, range: Option<&DateRange>) -> PeriodTotals {
    let mut totals = PeriodTotals::default();

    for instrument in &portfolio.instruments {
        for flow in &instrument.cash_flows {
            let Some(instant) = normalize(&flow.date) else {
                continue;
            };
            if let Some(range) = range {
                if !range.contains(instant) {
                    continue;
                }
            }
            match flow.flow_type {
                FlowType::Deposit => totals.deposits += flow.amount,
                FlowType::Withdrawal => totals.withdrawals += flow.amount,
            }
            totals.movements += 1;
        }
    }

    totals
}

/// Decomposes each instrument's change across the period into market
/// performance and flow effects.
///
/// Both boundary values come from point-in-time resolution, so the result is
/// stable no matter when it is computed. Instruments with no flows in the
/// period and a zero value at both boundaries are omitted.
pub fn period_performance(
    portfolio: &Portfolio,
    range: &DateRange,
) -> Vec<InstrumentPeriodPerformance> {
    let mut rows = Vec::new();

    for instrument in &portfolio.instruments {
        let mut deposits = Decimal::ZERO;
        let mut withdrawals = Decimal::ZERO;

        for flow in &instrument.cash_flows {
            let Some(instant) = normalize(&flow.date) else {
                continue;
            };
            if !range.contains(instant) {
                continue;
            }
            match flow.flow_type {
                FlowType::Deposit => deposits += flow.amount,
                FlowType::Withdrawal => withdrawals += flow.amount,
            }
        }

        let value_at_start = value_as_of(instrument, range.start());
        let value_at_end = value_as_of(instrument, range.end());

        if deposits.is_zero()
            && withdrawals.is_zero()
            && value_at_start.is_zero()
            && value_at_end.is_zero()
        {
            continue;
        }

        let net_flow = deposits - withdrawals;
        let performance = (value_at_end - value_at_start) - net_flow;
        let base = value_at_start + net_flow;
        let performance_pct = if base > Decimal::ZERO {
            performance / base * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        rows.push(InstrumentPeriodPerformance {
            name: instrument.name.clone(),
            deposits,
            withdrawals,
            net_flow,
            value_at_start,
            value_at_end,
            performance,
            performance_pct,
        });
    }

    rows
}
