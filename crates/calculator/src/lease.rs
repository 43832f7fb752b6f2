use crate::error::{CalcError, ensure_finite};
use configuration::LeaseProgram;
use core_types::{LeaseInput, LeaseQuote};

/// Computes the taxed monthly payment of a lease under `program`.
///
/// This is `lease_quote(..).monthly_payment`; see there for the formula.
pub fn lease_payment(input: &LeaseInput, program: &LeaseProgram) -> Result<f64, CalcError> {
    lease_quote(input, program).map(|quote| quote.monthly_payment)
}

/// Prices a lease with the money-factor method.
///
/// ```text
/// capitalized cost  = msrp * (1 - discount) + acquisition fee
/// adjusted cap cost = capitalized cost - down payment
/// residual value    = msrp * residual% / 100
/// money factor      = apr / divisor
/// depreciation      = (adjusted cap cost - residual) / term
/// finance charge    = (adjusted cap cost + residual) * money factor
/// monthly payment   = (depreciation + finance charge) * (1 + tax rate)
/// ```
///
/// # Errors
///
/// Returns a `CalcError` for a zero term, a negative rate, a non-positive
/// MSRP, a negative or oversized down payment, and (when the program rejects
/// it) negative depreciation.
pub fn lease_quote(input: &LeaseInput, program: &LeaseProgram) -> Result<LeaseQuote, CalcError> {
    // --- 1. Validation ---
    let msrp = ensure_finite("msrp", input.msrp)?;
    let apr = ensure_finite("apr", input.apr)?;
    let downpayment = ensure_finite("downpayment", input.downpayment)?;

    if input.term_months == 0 {
        return Err(CalcError::InvalidTerm);
    }
    if apr < 0.0 {
        return Err(CalcError::NegativeRate(apr));
    }
    if msrp <= 0.0 {
        return Err(CalcError::NonPositiveAmount {
            field: "msrp",
            value: msrp,
        });
    }
    if downpayment < 0.0 {
        return Err(CalcError::NegativeAmount {
            field: "downpayment",
            value: downpayment,
        });
    }

    // --- 2. Capitalized cost and residual ---
    let capitalized_cost = msrp * (1.0 - program.cap_cost_discount) + program.acquisition_fee;
    if downpayment > capitalized_cost {
        return Err(CalcError::DownPaymentExceedsCapCost {
            downpayment,
            capitalized_cost,
        });
    }
    let adjusted_cap_cost = capitalized_cost - downpayment;
    let residual_value = msrp * (program.residual_percent / 100.0);

    if adjusted_cap_cost < residual_value {
        if program.reject_negative_depreciation {
            return Err(CalcError::NegativeDepreciation {
                adjusted_cap_cost,
                residual_value,
            });
        }
        tracing::warn!(
            adjusted_cap_cost,
            residual_value,
            "Lease has negative depreciation; returning a signed payment."
        );
    }

    // --- 3. Monthly components ---
    let term = f64::from(input.term_months);
    let money_factor = apr / program.money_factor_divisor;
    let depreciation = (adjusted_cap_cost - residual_value) / term;
    let finance_charge = (adjusted_cap_cost + residual_value) * money_factor;
    let base_payment = depreciation + finance_charge;
    let monthly_payment = base_payment * (1.0 + program.sales_tax_rate);

    if !monthly_payment.is_finite() {
        return Err(CalcError::Overflow);
    }

    tracing::debug!(
        msrp,
        apr,
        term_months = input.term_months,
        downpayment,
        monthly_payment,
        "Computed lease payment."
    );

    let total_of_payments = monthly_payment * term;
    Ok(LeaseQuote {
        capitalized_cost,
        adjusted_cap_cost,
        residual_value,
        money_factor,
        depreciation,
        finance_charge,
        base_payment,
        tax: monthly_payment - base_payment,
        monthly_payment,
        term_months: input.term_months,
        total_of_payments,
        total_cost: total_of_payments + downpayment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lease(msrp: f64, apr: f64, term_months: u32, downpayment: f64) -> LeaseInput {
        LeaseInput {
            msrp,
            apr,
            term_months,
            downpayment,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_scenario_matches_formula() {
        // cap 33900, adjusted 30900, residual 21000, money factor 0.00125
        // depreciation 275, finance 64.875, base 339.875, taxed 361.1171875
        let program = LeaseProgram::default();
        let quote = lease_quote(&lease(35_000.0, 3.0, 36, 3_000.0), &program).unwrap();

        assert_close(quote.capitalized_cost, 33_900.0);
        assert_close(quote.adjusted_cap_cost, 30_900.0);
        assert_close(quote.residual_value, 21_000.0);
        assert_close(quote.money_factor, 0.00125);
        assert_close(quote.depreciation, 275.0);
        assert_close(quote.finance_charge, 64.875);
        assert_close(quote.base_payment, 339.875);
        assert_close(quote.monthly_payment, 361.1171875);
        assert_close(
            lease_payment(&lease(35_000.0, 3.0, 36, 3_000.0), &program).unwrap(),
            361.1171875,
        );
    }

    #[test]
    fn zero_apr_without_down_payment_is_pure_depreciation() {
        let program = LeaseProgram::default();
        let quote = lease_quote(&lease(40_000.0, 0.0, 24, 0.0), &program).unwrap();

        assert_eq!(quote.finance_charge, 0.0);
        assert_eq!(quote.base_payment, quote.depreciation);
        assert_eq!(
            quote.depreciation,
            (quote.adjusted_cap_cost - quote.residual_value) / 24.0
        );
    }

    #[test]
    fn program_constants_are_honoured() {
        let program = LeaseProgram {
            residual_percent: 50.0,
            cap_cost_discount: 0.0,
            acquisition_fee: 0.0,
            sales_tax_rate: 0.0,
            money_factor_divisor: 2400.0,
            reject_negative_depreciation: true,
        };
        let quote = lease_quote(&lease(24_000.0, 2.4, 12, 0.0), &program).unwrap();

        assert_close(quote.residual_value, 12_000.0);
        assert_close(quote.depreciation, 1_000.0);
        assert_close(quote.finance_charge, 36_000.0 * 0.001);
        assert_eq!(quote.tax, 0.0);
    }

    #[test]
    fn totals_follow_from_the_monthly_payment() {
        let quote = lease_quote(&lease(35_000.0, 3.0, 36, 3_000.0), &LeaseProgram::default()).unwrap();
        assert_eq!(quote.total_of_payments, quote.monthly_payment * 36.0);
        assert_eq!(quote.total_cost, quote.total_of_payments + 3_000.0);
        assert_close(quote.tax, quote.base_payment * 0.0625);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let program = LeaseProgram::default();
        assert_eq!(
            lease_payment(&lease(35_000.0, 3.0, 0, 0.0), &program),
            Err(CalcError::InvalidTerm)
        );
        assert_eq!(
            lease_payment(&lease(35_000.0, -3.0, 36, 0.0), &program),
            Err(CalcError::NegativeRate(-3.0))
        );
        assert!(matches!(
            lease_payment(&lease(-1.0, 3.0, 36, 0.0), &program),
            Err(CalcError::NonPositiveAmount { field: "msrp", .. })
        ));
        assert!(matches!(
            lease_payment(&lease(35_000.0, 3.0, 36, 40_000.0), &program),
            Err(CalcError::DownPaymentExceedsCapCost { .. })
        ));
        assert_eq!(
            lease_payment(&lease(35_000.0, f64::INFINITY, 36, 0.0), &program),
            Err(CalcError::NonFinite("apr"))
        );
    }

    #[test]
    fn zero_msrp_is_reported_as_not_positive() {
        let err = lease_payment(&lease(0.0, 3.0, 36, 0.0), &LeaseProgram::default()).unwrap_err();
        assert_eq!(
            err,
            CalcError::NonPositiveAmount {
                field: "msrp",
                value: 0.0
            }
        );
        assert_eq!(
            err.to_string(),
            "The value of 'msrp' (0) must be greater than zero."
        );
    }

    #[test]
    fn negative_depreciation_is_rejected_by_default() {
        let result = lease_payment(&lease(35_000.0, 3.0, 36, 15_000.0), &LeaseProgram::default());
        assert!(matches!(result, Err(CalcError::NegativeDepreciation { .. })));
    }

    #[test]
    fn negative_depreciation_can_be_allowed() {
        let program = LeaseProgram {
            reject_negative_depreciation: false,
            ..LeaseProgram::default()
        };
        let quote = lease_quote(&lease(35_000.0, 3.0, 36, 15_000.0), &program).unwrap();
        assert!(quote.depreciation < 0.0);
    }
}
