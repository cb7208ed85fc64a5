use serde::{Deserialize, Serialize};

use crate::matching::{MatchStatus, RequirementMatch, ScoredCandidate};

/// 要件ごとのスコア内訳
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementBreakdown {
    pub skill: String,
    pub required_level: u8,
    pub candidate_level: Option<u8>,
    pub weight: f64,
    pub match_fraction: f64,
    pub contribution: f64,
    pub status: MatchStatus,
}

impl From<&RequirementMatch> for RequirementBreakdown {
    fn from(matched: &RequirementMatch) -> Self {
        Self {
            skill: matched.skill.clone(),
            required_level: matched.required_level.get(),
            candidate_level: matched.candidate_level.map(|level| level.get()),
            weight: matched.weight,
            match_fraction: matched.match_fraction,
            contribution: matched.contribution,
            status: matched.status,
        }
    }
}

/// Shortlist row as written by `rank --format json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub rank: usize,
    pub score: f64,
    pub name: String,
    pub email: String,
    pub experience: u32,
    pub breakdown: Vec<RequirementBreakdown>,
}

impl From<&ScoredCandidate<'_>> for ShortlistEntry {
    fn from(scored: &ScoredCandidate<'_>) -> Self {
        Self {
            rank: scored.rank,
            score: scored.score(),
            name: scored.candidate.name.clone(),
            email: scored.candidate.email.clone(),
            experience: scored.candidate.experience_years,
            breakdown: scored
                .match_score
                .requirements
                .iter()
                .map(RequirementBreakdown::from)
                .collect(),
        }
    }
}
