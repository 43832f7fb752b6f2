use crate::error::CalcError;
use crate::{credit, lease, loan};
use configuration::{CreditSettings, LeaseProgram};
use core_types::{LeaseInput, LeaseQuote, LoanInput, LoanQuote};

/// The stateless payment calculator handed to the HTTP layer and the CLI.
///
/// It is built once at startup from validated configuration and only ever
/// read afterwards, so clones can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct PaymentCalculator {
    lease_program: LeaseProgram,
    credit: CreditSettings,
}

impl PaymentCalculator {
    /// Creates a new `PaymentCalculator`, validating the lease program and credit table.
    pub fn new(lease_program: LeaseProgram, credit: CreditSettings) -> Result<Self, CalcError> {
        lease_program
            .validate()
            .map_err(|e| CalcError::InvalidProgram(e.to_string()))?;
        credit
            .validate()
            .map_err(|e| CalcError::InvalidProgram(e.to_string()))?;
        Ok(Self {
            lease_program,
            credit,
        })
    }

    pub fn lease_program(&self) -> &LeaseProgram {
        &self.lease_program
    }

    pub fn loan_payment(&self, input: &LoanInput) -> Result<f64, CalcError> {
        loan::loan_payment(input)
    }

    pub fn loan_quote(&self, input: &LoanInput) -> Result<LoanQuote, CalcError> {
        loan::loan_quote(input)
    }

    pub fn lease_payment(&self, input: &LeaseInput) -> Result<f64, CalcError> {
        lease::lease_payment(input, &self.lease_program)
    }

    pub fn lease_quote(&self, input: &LeaseInput) -> Result<LeaseQuote, CalcError> {
        lease::lease_quote(input, &self.lease_program)
    }

    pub fn apr_for_credit_score(&self, score: u32) -> f64 {
        credit::apr_for_credit_score(score, &self.credit)
    }
}

impl Default for PaymentCalculator {
    fn default() -> Self {
        Self {
            lease_program: LeaseProgram::default(),
            credit: CreditSettings::default(),
        }
    }
}
