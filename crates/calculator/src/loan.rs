use crate::error::{CalcError, ensure_finite};
use core_types::{LoanInput, LoanQuote};

/// Computes the level monthly payment that fully amortizes the financed
/// principal (`vehicle_value - downpayment`) over `months` at `apr / 100 / 12`.
///
/// A zero rate falls back to straight-line repayment, `P / n`.
///
/// # Errors
///
/// Returns a `CalcError` for a zero term, a negative rate, negative or
/// non-finite amounts, and a down payment larger than the vehicle value.
pub fn loan_payment(input: &LoanInput) -> Result<f64, CalcError> {
    validate(input)?;
    let payment = amortized_payment(input.principal(), input.monthly_rate(), input.months);
    if !payment.is_finite() {
        return Err(CalcError::Overflow);
    }
    tracing::debug!(
        principal = input.principal(),
        apr = input.apr,
        months = input.months,
        payment,
        "Computed loan payment."
    );
    Ok(payment)
}

/// Prices the loan and derives its totals from the same payment `loan_payment` returns.
pub fn loan_quote(input: &LoanInput) -> Result<LoanQuote, CalcError> {
    let monthly_payment = loan_payment(input)?;
    let principal = input.principal();
    let total_of_payments = monthly_payment * f64::from(input.months);

    Ok(LoanQuote {
        principal,
        monthly_rate: input.monthly_rate(),
        months: input.months,
        monthly_payment,
        total_of_payments,
        total_interest: total_of_payments - principal,
        total_cost: total_of_payments + input.downpayment,
    })
}

/// The annuity formula with no input checks. `months` must be non-zero.
///
/// Evaluated as `P * r / (1 - (1 + r)^-n)` with `ln_1p`/`exp_m1`, which stays
/// finite for rates too small to change `1 + r` and for terms long enough to
/// overflow `(1 + r)^n`.
fn amortized_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let n = f64::from(months);
    if monthly_rate == 0.0 {
        return principal / n;
    }
    let discounted = -(-n * monthly_rate.ln_1p()).exp_m1();
    if discounted == 0.0 {
        return principal / n;
    }
    principal * monthly_rate / discounted
}

fn validate(input: &LoanInput) -> Result<(), CalcError> {
    let vehicle_value = ensure_finite("vehicle_value", input.vehicle_value)?;
    let apr = ensure_finite("apr", input.apr)?;
    let downpayment = ensure_finite("downpayment", input.downpayment)?;

    if input.months == 0 {
        return Err(CalcError::InvalidTerm);
    }
    if apr < 0.0 {
        return Err(CalcError::NegativeRate(apr));
    }
    if vehicle_value < 0.0 {
        return Err(CalcError::NegativeAmount {
            field: "vehicle_value",
            value: vehicle_value,
        });
    }
    if downpayment < 0.0 {
        return Err(CalcError::NegativeAmount {
            field: "downpayment",
            value: downpayment,
        });
    }
    if downpayment > vehicle_value {
        return Err(CalcError::DownPaymentExceedsValue {
            downpayment,
            vehicle_value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(vehicle_value: f64, apr: f64, months: u32, downpayment: f64) -> LoanInput {
        LoanInput {
            vehicle_value,
            apr,
            months,
            downpayment,
        }
    }

    #[test]
    fn zero_rate_is_straight_line() {
        for (principal, months) in [(0.0, 1), (12_000.0, 48), (999.99, 7), (25_000.0, 60)] {
            let payment = loan_payment(&loan(principal, 0.0, months, 0.0)).unwrap();
            assert_eq!(payment, principal / f64::from(months));
        }
    }

    #[test]
    fn reference_scenario_matches_published_payment() {
        let payment = loan_payment(&loan(30_000.0, 6.0, 60, 5_000.0)).unwrap();
        assert!((payment - 483.32).abs() < 0.005, "got {payment}");
    }

    #[test]
    fn positive_rate_payment_is_between_zero_and_principal() {
        for (principal, apr, months) in [(25_000.0, 6.0, 60), (1_000.0, 29.9, 2), (50.0, 0.1, 360)] {
            let payment = loan_payment(&loan(principal, apr, months, 0.0)).unwrap();
            assert!(payment > 0.0);
            assert!(payment < principal);
        }
    }

    #[test]
    fn single_month_repays_principal_plus_one_month_of_interest() {
        let payment = loan_payment(&loan(1_200.0, 12.0, 1, 0.0)).unwrap();
        assert!((payment - 1_212.0).abs() < 1e-9);
    }

    #[test]
    fn payment_scales_linearly_with_principal() {
        let single = loan_payment(&loan(20_000.0, 7.5, 72, 0.0)).unwrap();
        let double = loan_payment(&loan(40_000.0, 7.5, 72, 0.0)).unwrap();
        assert!((double - 2.0 * single).abs() <= 1e-9 * double);
    }

    #[test]
    fn zero_principal_costs_nothing() {
        assert_eq!(loan_payment(&loan(15_000.0, 4.9, 36, 15_000.0)).unwrap(), 0.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let input = loan(31_415.92, 6.9, 60, 2_718.28);
        let first = loan_payment(&input).unwrap();
        let second = loan_payment(&input).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(
            loan_payment(&loan(30_000.0, 6.0, 0, 0.0)),
            Err(CalcError::InvalidTerm)
        );
        assert_eq!(
            loan_payment(&loan(30_000.0, -1.0, 60, 0.0)),
            Err(CalcError::NegativeRate(-1.0))
        );
        assert!(matches!(
            loan_payment(&loan(30_000.0, 6.0, 60, -5.0)),
            Err(CalcError::NegativeAmount { field: "downpayment", .. })
        ));
        assert!(matches!(
            loan_payment(&loan(10_000.0, 6.0, 60, 12_000.0)),
            Err(CalcError::DownPaymentExceedsValue { .. })
        ));
        assert_eq!(
            loan_payment(&loan(f64::NAN, 6.0, 60, 0.0)),
            Err(CalcError::NonFinite("vehicle_value"))
        );
    }

    #[test]
    fn vanishing_rate_converges_to_straight_line() {
        let payment = loan_payment(&loan(25_000.0, 1e-15, 60, 0.0)).unwrap();
        assert!((payment - 25_000.0 / 60.0).abs() < 1e-9, "got {payment}");
    }

    #[test]
    fn very_long_term_converges_to_interest_only() {
        let payment = loan_payment(&loan(25_000.0, 6.0, 200_000, 0.0)).unwrap();
        assert!((payment - 125.0).abs() < 1e-9, "got {payment}");
    }

    #[test]
    fn quote_totals_follow_from_the_payment() {
        let input = loan(30_000.0, 6.0, 60, 5_000.0);
        let quote = loan_quote(&input).unwrap();
        let payment = loan_payment(&input).unwrap();

        assert_eq!(quote.principal, 25_000.0);
        assert_eq!(quote.monthly_payment, payment);
        assert_eq!(quote.total_of_payments, payment * 60.0);
        assert!((quote.total_interest - (payment * 60.0 - 25_000.0)).abs() < 1e-9);
        assert_eq!(quote.total_cost, payment * 60.0 + 5_000.0);
    }
}
