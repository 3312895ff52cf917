pub mod budgeting;
pub mod neighbors;

use tracing::debug;

use crate::chunking::tokens::{TokenEstimator, WordTokenEstimator};
use crate::types::context_bundle::{
	ContextCandidate, ContextMetadata, ContextResult, ContextSource, SelectionError,
};
pub use budgeting::{apply_budget, BudgetResult};
pub use neighbors::surrounding;

/// Assembles a token-bounded prompt context from ranked chunks.
pub struct ContextBuilder<T> {
	estimator: T,
}

impl Default for ContextBuilder<WordTokenEstimator> {
	fn default() -> Self {
		Self {
			estimator: WordTokenEstimator,
		}
	}
}

impl<T> ContextBuilder<T>
where
	T: TokenEstimator,
{
	pub fn new(estimator: T) -> Self {
		Self { estimator }
	}

	/// Build a context from `candidates`, best match first, within `max_tokens`.
	pub fn build(
		&self,
		candidates: &[ContextCandidate],
		max_tokens: usize,
	) -> Result<ContextResult, SelectionError> {
		if max_tokens == 0 {
			return Err(SelectionError::InvalidBudget(max_tokens));
		}

		let BudgetResult {
			selected,
			tokens_used,
			candidates_excluded_by_budget,
		} = apply_budget(candidates, &self.estimator, max_tokens);

		let mut context = String::new();
		let mut sources = Vec::with_capacity(selected.len());
		for (candidate, _) in &selected {
			context.push_str(&format_block(candidate));
			sources.push(ContextSource {
				chunk_id: candidate.id,
				doc_title: candidate.doc_title.clone(),
				module: candidate.module.clone(),
				heading: candidate.heading.clone(),
				source: candidate.source.clone(),
			});
		}

		if candidates_excluded_by_budget > 0 {
			debug!(
				budget = max_tokens,
				tokens_used,
				excluded = candidates_excluded_by_budget,
				"context budget reached"
			);
		}

		let selection = ContextMetadata {
			budget: max_tokens,
			tokens_used,
			candidates_considered: candidates.len(),
			chunks_selected: sources.len(),
			candidates_excluded_by_budget,
		};

		Ok(ContextResult {
			context,
			sources,
			selection,
		})
	}
}

/// `## {heading}\n\n{text}\n\n`, with `(no heading)` for headerless chunks.
pub fn format_block(candidate: &ContextCandidate) -> String {
	format!(
		"## {}\n\n{}\n\n",
		candidate.heading.as_deref().unwrap_or("(no heading)"),
		candidate.text
	)
}
