use serde::{Deserialize, Serialize};

/// A fully priced loan. Every amount is unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: f64,
    pub monthly_rate: f64,
    pub months: u32,
    pub monthly_payment: f64,
    /// `monthly_payment * months`.
    pub total_of_payments: f64,
    /// What the borrower pays on top of the principal.
    pub total_interest: f64,
    /// Total of payments plus the down payment.
    pub total_cost: f64,
}

/// A fully priced lease, exposing every intermediate of the lease formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseQuote {
    /// Negotiated price plus the acquisition fee.
    pub capitalized_cost: f64,
    /// Capitalized cost less the down payment.
    pub adjusted_cap_cost: f64,
    pub residual_value: f64,
    pub money_factor: f64,
    pub depreciation: f64,
    pub finance_charge: f64,
    /// Depreciation plus finance charge, before tax.
    pub base_payment: f64,
    pub tax: f64,
    pub monthly_payment: f64,
    pub term_months: u32,
    pub total_of_payments: f64,
    /// Total of payments plus the down payment.
    pub total_cost: f64,
}
