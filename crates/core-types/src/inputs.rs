use serde::{Deserialize, Serialize};

/// The values needed to price an amortized vehicle loan.
///
/// Field names match the query parameters of `GET /calculatefinance/`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// The purchase price of the vehicle.
    pub vehicle_value: f64,
    /// The annual percentage rate, in percent (6.0 means 6%).
    pub apr: f64,
    /// The loan term in months.
    pub months: u32,
    /// Cash paid up front. Reduces the financed principal.
    pub downpayment: f64,
}

impl LoanInput {
    /// The amount actually financed.
    pub fn principal(&self) -> f64 {
        self.vehicle_value - self.downpayment
    }

    /// The APR converted to a periodic monthly rate.
    pub fn monthly_rate(&self) -> f64 {
        self.apr / 100.0 / 12.0
    }
}

/// The values needed to price a closed-end vehicle lease.
///
/// Field names match the query parameters of `GET /calculatelease/`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseInput {
    /// Manufacturer's suggested retail price.
    pub msrp: f64,
    /// The annual percentage rate, in percent. Converted to a money factor.
    pub apr: f64,
    pub term_months: u32,
    /// Capitalized cost reduction paid at signing.
    pub downpayment: f64,
}
