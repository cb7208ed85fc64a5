use std::cmp::Ordering;

use tracing::{debug, info};

use super::{
    requirements::RequirementSet,
    scoring::{evaluate, MatchScore},
};
use crate::{config::ShortlistConfig, Candidate};

/// A candidate paired with its score for one shortlisting pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    /// 1-based position in the shortlist.
    pub rank: usize,
    /// Index of the candidate in the pool it was drawn from.
    pub pool_index: usize,
    pub match_score: MatchScore,
}

impl ScoredCandidate<'_> {
    pub fn score(&self) -> f64 {
        self.match_score.total
    }
}

// evaluate keeps totals finite, so the Equal fallback only guards the type.
fn by_score_desc(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal)
}

/// 全候補をスコアリングし、スコア降順で上位 `top_n` 件を返す
///
/// Equal scores keep their pool order (the sort is stable), so the result is
/// deterministic for a given pool. The length is `min(top_n, candidates.len())`.
pub fn shortlist<'a>(
    candidates: &'a [Candidate],
    requirements: &RequirementSet,
    top_n: usize,
) -> Vec<ScoredCandidate<'a>> {
    if top_n == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<_> = candidates
        .iter()
        .enumerate()
        .map(|(pool_index, candidate)| {
            let match_score = evaluate(candidate, requirements);
            debug!(
                candidate = %candidate.name,
                pool_index,
                score = match_score.total,
                "scored candidate"
            );
            ScoredCandidate {
                candidate,
                rank: 0,
                pool_index,
                match_score,
            }
        })
        .collect();

    scored.sort_by(by_score_desc);
    scored.truncate(top_n);
    for (idx, entry) in scored.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    info!(
        pool_size = candidates.len(),
        requirements = requirements.len(),
        top_n,
        returned = scored.len(),
        "shortlist built"
    );

    scored
}

/// Shortlisting with a configured default size.
#[derive(Debug, Clone, Default)]
pub struct Shortlister {
    config: ShortlistConfig,
}

impl Shortlister {
    pub fn new(config: ShortlistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShortlistConfig {
        &self.config
    }

    /// `top_n` falls back to `default_top_n` when not given.
    pub fn shortlist<'a>(
        &self,
        candidates: &'a [Candidate],
        requirements: &RequirementSet,
        top_n: Option<usize>,
    ) -> Vec<ScoredCandidate<'a>> {
        shortlist(
            candidates,
            requirements,
            top_n.unwrap_or(self.config.default_top_n),
        )
    }
}
