//! Instrument domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::temporal::{normalize, DateLike};

/// Asset class tag for an instrument.
///
/// Informational only; no calculation branches on it. Unknown tags from
/// older documents map to [`Category::Other`] instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Category {
    Stocks,
    Bonds,
    Funds,
    Crypto,
    RealEstate,
    Commodities,
    Liquidity,
    #[default]
    Other,
}

impl Category {
    /// Parses a category from its document tag, mapping unknown tags to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "stocks" => Category::Stocks,
            "bonds" => Category::Bonds,
            "funds" => Category::Funds,
            "crypto" => Category::Crypto,
            "real-estate" => Category::RealEstate,
            "commodities" => Category::Commodities,
            "liquidity" => Category::Liquidity,
            _ => Category::Other,
        }
    }

    /// Returns the document tag for this category.
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Category::Stocks => "stocks",
            Category::Bonds => "bonds",
            Category::Funds => "funds",
            Category::Crypto => "crypto",
            Category::RealEstate => "real-estate",
            Category::Commodities => "commodities",
            Category::Liquidity => "liquidity",
            Category::Other => "other",
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_tag(&s)
    }
}

/// Direction of a cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Deposit,
    Withdrawal,
}

/// A single deposit or withdrawal in an instrument's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub id: String,
    pub date: DateLike,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Correlation id shared by the two halves of a transfer.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<String>,
    /// Name of the source instrument, on the receiving half of a transfer.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_from: Option<String>,
    /// Name of the destination instrument, on the sending half of a transfer.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_to: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateLike>,
}

/// A point-in-time observation of an instrument's market value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub id: String,
    pub date: DateLike,
    pub value: Decimal,
    /// True when the engine synthesized this record after a deposit or
    /// transfer rather than the user entering it.
    #[serde(default)]
    pub auto: bool,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateLike>,
}

/// Domain model for a tracked investment instrument.
///
/// `current_value`, `total_deposited`, `total_withdrawn` and `net_invested`
/// are cached projections of the two histories; the ledger calculator is the
/// only writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub cash_flows: Vec<CashFlow>,
    #[serde(default)]
    pub valuations: Vec<Valuation>,
    #[serde(default)]
    pub current_value: Decimal,
    #[serde(default)]
    pub total_deposited: Decimal,
    #[serde(default)]
    pub total_withdrawn: Decimal,
    #[serde(default)]
    pub net_invested: Decimal,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_valuation_date: Option<DateLike>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateLike>,
}

/// Input model for creating a new instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstrument {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    pub broker: Option<String>,
    pub description: Option<String>,
    /// Seeds the instrument's first deposit cash flow.
    pub initial_deposit: Decimal,
    /// Overrides the seeded valuation when the position is already worth
    /// more or less than the amount paid in.
    #[serde(default)]
    pub current_value: Option<Decimal>,
}

impl NewInstrument {
    /// Validates the new instrument data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Instrument name cannot be empty".to_string(),
            )));
        }
        if self.initial_deposit <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Initial deposit must be positive".to_string(),
            )));
        }
        if let Some(value) = self.current_value {
            if value < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Current value cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an instrument's descriptive fields.
///
/// The name is the identity of the instrument and cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentUpdate {
    pub name: String,
    pub category: Category,
    pub broker: Option<String>,
    pub description: Option<String>,
}

impl InstrumentUpdate {
    /// Validates the instrument update data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Instrument name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for recording a new cash flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashFlow {
    pub instrument: String,
    pub date: DateLike,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    pub description: Option<String>,
}

impl NewCashFlow {
    /// Validates the new cash flow data.
    pub fn validate(&self) -> Result<()> {
        if self.instrument.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "instrument".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cash flow amount must be positive".to_string(),
            )));
        }
        if normalize(&self.date).is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid date. Expected ISO 8601/RFC3339, YYYY-MM-DD, a timestamp record or epoch milliseconds".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for editing an existing cash flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowUpdate {
    pub instrument: String,
    pub id: String,
    pub date: DateLike,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    pub description: Option<String>,
}

impl CashFlowUpdate {
    /// Validates the cash flow update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.instrument.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "instrument".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cash flow amount must be positive".to_string(),
            )));
        }
        if normalize(&self.date).is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid date. Expected ISO 8601/RFC3339, YYYY-MM-DD, a timestamp record or epoch milliseconds".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for recording a new valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewValuation {
    pub instrument: String,
    pub date: DateLike,
    pub value: Decimal,
}

impl NewValuation {
    /// Validates the new valuation data.
    pub fn validate(&self) -> Result<()> {
        if self.instrument.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "instrument".to_string(),
            )));
        }
        if self.value < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Valuation value cannot be negative".to_string(),
            )));
        }
        if normalize(&self.date).is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid date. Expected ISO 8601/RFC3339, YYYY-MM-DD, a timestamp record or epoch milliseconds".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for editing an existing valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationUpdate {
    pub instrument: String,
    pub id: String,
    pub date: DateLike,
    pub value: Decimal,
}

impl ValuationUpdate {
    /// Validates the valuation update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.instrument.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "instrument".to_string(),
            )));
        }
        if self.value < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Valuation value cannot be negative".to_string(),
            )));
        }
        if normalize(&self.date).is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid date. Expected ISO 8601/RFC3339, YYYY-MM-DD, a timestamp record or epoch milliseconds".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for moving value between two instruments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInput {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
    pub date: DateLike,
    pub description: Option<String>,
}

impl TransferInput {
    /// Validates the transfer data.
    pub fn validate(&self) -> Result<()> {
        if self.from.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "from".to_string(),
            )));
        }
        if self.to.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "to".to_string(),
            )));
        }
        if self.from == self.to {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transfer endpoints must be two different instruments".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transfer amount must be positive".to_string(),
            )));
        }
        if normalize(&self.date).is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid date. Expected ISO 8601/RFC3339, YYYY-MM-DD, a timestamp record or epoch milliseconds".to_string(),
            )));
        }
        Ok(())
    }
}
