//! # Payment Calculator
//!
//! Closed-form vehicle financing math: the monthly payment of an amortized
//! loan and of a money-factor lease, plus the APR assumed for a credit score.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** No I/O and no shared state. Every function is a
//!   deterministic function of its arguments, so identical inputs give
//!   bit-identical outputs.
//! - **Validated inputs:** Degenerate inputs (zero term, negative rate,
//!   oversized down payment) are rejected with a `CalcError` instead of
//!   producing a division by zero or a silently wrong number.
//! - **Unrounded `f64`:** All monetary values are double precision; rounding
//!   is left to whoever displays them.
//!
//! ## Public API
//!
//! - `PaymentCalculator`: The service object built once at startup.
//! - `loan_payment` / `loan_quote`: Amortized loan pricing.
//! - `lease_payment` / `lease_quote`: Lease pricing under a `LeaseProgram`.
//! - `apr_for_credit_score`: Credit tier lookup.
//! - `CalcError`: The validation errors that can be returned from this crate.

pub mod credit;
pub mod error;
pub mod lease;
pub mod loan;
pub mod service;

// Re-export the key components to create a clean, public-facing API.
pub use credit::apr_for_credit_score;
pub use error::CalcError;
pub use lease::{lease_payment, lease_quote};
pub use loan::{loan_payment, loan_quote};
pub use service::PaymentCalculator;
