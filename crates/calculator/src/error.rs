use thiserror::Error;

/// Every way a calculation request can be rejected.
///
/// All variants describe caller input (or a bad lease program), never an
/// internal failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("The term must be at least one month.")]
    InvalidTerm,

    #[error("The APR ({0}) must not be negative.")]
    NegativeRate(f64),

    #[error("The value of '{field}' ({value}) must not be negative.")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("The value of '{field}' ({value}) must be greater than zero.")]
    NonPositiveAmount { field: &'static str, value: f64 },

    #[error("The value of '{0}' must be a finite number.")]
    NonFinite(&'static str),

    #[error("The down payment ({downpayment}) exceeds the vehicle value ({vehicle_value}).")]
    DownPaymentExceedsValue { downpayment: f64, vehicle_value: f64 },

    #[error("The down payment ({downpayment}) exceeds the capitalized cost ({capitalized_cost}).")]
    DownPaymentExceedsCapCost {
        downpayment: f64,
        capitalized_cost: f64,
    },

    #[error(
        "The adjusted capitalized cost ({adjusted_cap_cost}) is below the residual value ({residual_value}), which implies negative depreciation."
    )]
    NegativeDepreciation {
        adjusted_cap_cost: f64,
        residual_value: f64,
    },

    #[error("The inputs produce a payment that is not a finite number.")]
    Overflow,

    #[error("Lease program parameters are invalid: {0}")]
    InvalidProgram(String),
}

/// Rejects NaN and infinities before they reach a formula.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite(field))
    }
}
