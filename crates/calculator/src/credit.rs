use configuration::CreditSettings;

/// Looks up the APR assumed for a borrower with the given credit score.
///
/// The tier with the highest `min_score` not above `score` wins, regardless
/// of the order tiers were configured in. Scores below every tier get
/// `fallback_apr`.
pub fn apr_for_credit_score(score: u32, credit: &CreditSettings) -> f64 {
    credit
        .tiers
        .iter()
        .filter(|tier| tier.min_score <= score)
        .max_by_key(|tier| tier.min_score)
        .map_or(credit.fallback_apr, |tier| tier.apr)
}
