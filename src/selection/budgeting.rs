use crate::chunking::tokens::TokenEstimator;
use crate::types::context_bundle::ContextCandidate;

pub struct BudgetResult<'a> {
    /// Included candidates with the token cost charged for each.
    pub selected: Vec<(&'a ContextCandidate, usize)>,
    pub tokens_used: usize,
    pub candidates_excluded_by_budget: usize,
}

/// Greedy first-fit over ranked candidates.
///
/// Stops at the first candidate that would overflow `budget`; later, smaller
/// candidates are not considered. Candidates are included whole or not at all.
pub fn apply_budget<'a, T: TokenEstimator>(
    candidates: &'a [ContextCandidate],
    estimator: &T,
    budget: usize,
) -> BudgetResult<'a> {
    let mut selected = Vec::new();
    let mut tokens_used: usize = 0;

    for candidate in candidates {
        let tokens = candidate
            .token_est
            .unwrap_or_else(|| estimator.estimate(&candidate.text));

        // Stored estimates come from outside; an overflowing sum never fits.
        match tokens_used.checked_add(tokens) {
            Some(total) if total <= budget => tokens_used = total,
            _ => break,
        }

        selected.push((candidate, tokens));
    }

    BudgetResult {
        candidates_excluded_by_budget: candidates.len() - selected.len(),
        selected,
        tokens_used,
    }
}
