use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::Uri,
};
use core_types::{LeaseInput, LeaseQuote, LoanInput, LoanQuote};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AprQuery {
    pub credit_score: u32,
}

#[derive(Debug, Serialize)]
pub struct AprResponse {
    pub credit_score: u32,
    pub apr: f64,
}

/// # GET /calculatefinance/
/// Returns the monthly loan payment as a bare JSON number.
pub async fn calculate_finance(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LoanInput>, QueryRejection>,
) -> Result<Json<f64>, AppError> {
    let Query(input) = query?;
    let payment = state.calculator.loan_payment(&input)?;
    Ok(Json(payment))
}

/// # GET /calculatelease/
/// Returns the monthly lease payment as a bare JSON number.
pub async fn calculate_lease(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LeaseInput>, QueryRejection>,
) -> Result<Json<f64>, AppError> {
    let Query(input) = query?;
    let payment = state.calculator.lease_payment(&input)?;
    Ok(Json(payment))
}

/// # GET /api/quotes/finance
/// Same inputs as `/calculatefinance/`, with the totals broken out.
pub async fn finance_quote(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LoanInput>, QueryRejection>,
) -> Result<Json<LoanQuote>, AppError> {
    let Query(input) = query?;
    Ok(Json(state.calculator.loan_quote(&input)?))
}

/// # GET /api/quotes/lease
/// Same inputs as `/calculatelease/`, with every lease component broken out.
pub async fn lease_quote(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LeaseInput>, QueryRejection>,
) -> Result<Json<LeaseQuote>, AppError> {
    let Query(input) = query?;
    Ok(Json(state.calculator.lease_quote(&input)?))
}

/// # GET /api/apr
pub async fn apr_for_credit_score(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AprQuery>, QueryRejection>,
) -> Result<Json<AprResponse>, AppError> {
    let Query(AprQuery { credit_score }) = query?;
    Ok(Json(AprResponse {
        credit_score,
        apr: state.calculator.apr_for_credit_score(credit_score),
    }))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
