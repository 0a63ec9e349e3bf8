/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Portfolio document key prefix used by stores that namespace their keys
pub const PORTFOLIO_DOCUMENT_PREFIX: &str = "portfolios";
