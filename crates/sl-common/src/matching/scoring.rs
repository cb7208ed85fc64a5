use serde::{Deserialize, Serialize};

use super::requirements::RequirementSet;
use crate::{Candidate, JobRequirement, SkillLevel};

/// Extra credit per level above the requirement.
pub const EXCESS_BONUS_PER_LEVEL: f64 = 0.1;
/// Ceiling on the credit a single requirement can earn (150%).
pub const MAX_MATCH_FRACTION: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Exceeds,
    PerfectMatch,
    PartialMatch,
    Miss,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Exceeds => "EXCEEDS",
            MatchStatus::PerfectMatch => "PERFECT_MATCH",
            MatchStatus::PartialMatch => "PARTIAL_MATCH",
            MatchStatus::Miss => "MISS",
        }
    }
}

/// 要件 1 件分の評価結果
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementMatch {
    pub skill: String,
    pub required_level: SkillLevel,
    pub candidate_level: Option<SkillLevel>,
    pub weight: f64,
    /// Credit earned for this requirement, 0.0 to 1.5.
    pub match_fraction: f64,
    /// `match_fraction * weight`, saturating at `f64::MAX`.
    pub contribution: f64,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Weighted percentage; 0 for an empty requirement set, may exceed 100.
    pub total: f64,
    /// Saturates at `f64::MAX` for very large weights.
    pub total_weight: f64,
    pub requirements: Vec<RequirementMatch>,
}

/// Credit for holding `level` against `required`.
///
/// Meeting the requirement earns 1.0, falling short earns the ratio, and each
/// level above it adds 0.1 up to 1.5.
pub fn match_fraction(level: SkillLevel, required: SkillLevel) -> f64 {
    // SkillLevel::new keeps both levels in 1..=5, so the ratio never divides by zero.
    debug_assert!(required.get() >= SkillLevel::MIN);
    if level > required {
        let excess = f64::from(level.get() - required.get());
        (1.0 + excess * EXCESS_BONUS_PER_LEVEL).min(MAX_MATCH_FRACTION)
    } else {
        (level.as_f64() / required.as_f64()).min(1.0)
    }
}

fn match_requirement(candidate: &Candidate, requirement: &JobRequirement) -> RequirementMatch {
    let required_level = requirement.required_level();
    let weight = requirement.weight();
    let candidate_level = candidate.skill_level(requirement.skill());

    let (fraction, status) = match candidate_level {
        Some(level) => {
            let status = match level.cmp(&required_level) {
                std::cmp::Ordering::Greater => MatchStatus::Exceeds,
                std::cmp::Ordering::Equal => MatchStatus::PerfectMatch,
                std::cmp::Ordering::Less => MatchStatus::PartialMatch,
            };
            (match_fraction(level, required_level), status)
        }
        None => (0.0, MatchStatus::Miss),
    };

    RequirementMatch {
        skill: requirement.skill().to_string(),
        required_level,
        candidate_level,
        weight,
        match_fraction: fraction,
        contribution: (fraction * weight).min(f64::MAX),
        status,
    }
}

/// 要件ごとの内訳付きでマッチスコアを計算する
///
/// Every requirement adds its weight to the denominator whether or not the
/// candidate holds the skill, so unmet requirements pull the percentage down.
/// Weights are divided by the largest weight in the set before summing; the
/// ratio is unchanged and the sums stay finite for any finite weights.
pub fn evaluate(candidate: &Candidate, requirements: &RequirementSet) -> MatchScore {
    let scale = requirements.max_weight();
    let mut scaled_score = 0.0;
    let mut scaled_weight = 0.0;
    let mut matches = Vec::with_capacity(requirements.len());

    for requirement in requirements {
        let matched = match_requirement(candidate, requirement);
        let weight = matched.weight / scale;
        scaled_weight += weight;
        scaled_score += matched.match_fraction * weight;
        matches.push(matched);
    }

    let total = if scaled_weight > 0.0 {
        (scaled_score / scaled_weight) * 100.0
    } else {
        0.0
    };

    MatchScore {
        total,
        total_weight: (scaled_weight * scale).min(f64::MAX),
        requirements: matches,
    }
}

pub fn score(candidate: &Candidate, requirements: &RequirementSet) -> f64 {
    evaluate(candidate, requirements).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn level(value: i64) -> SkillLevel {
        SkillLevel::new(value).unwrap()
    }

    fn req(skill: &str, level: i64, weight: f64) -> JobRequirement {
        JobRequirement::new(skill, level, weight).unwrap()
    }

    fn candidate(skills: &[(&str, i64)]) -> Candidate {
        let mut candidate = Candidate::new("Test", "test@example.com", 3);
        for (skill, level) in skills {
            candidate.add_skill(skill, *level).unwrap();
        }
        candidate
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn exceeding_requirement_earns_bonus() {
        let result = score(
            &candidate(&[("java", 4)]),
            &RequirementSet::from(vec![req("java", 2, 1.0)]),
        );
        approx(result, 120.0);
    }

    #[test]
    fn missing_skill_still_counts_weight() {
        let requirements = RequirementSet::from(vec![req("git", 4, 0.5), req("python", 3, 0.5)]);
        let result = evaluate(&candidate(&[("git", 2)]), &requirements);

        approx(result.total, 25.0);
        approx(result.total_weight, 1.0);
        approx(result.requirements[0].contribution, 0.25);
        assert_eq!(result.requirements[0].status, MatchStatus::PartialMatch);
        assert_eq!(result.requirements[1].status, MatchStatus::Miss);
        assert_eq!(result.requirements[1].candidate_level, None);
        approx(result.requirements[1].contribution, 0.0);
    }

    #[test]
    fn empty_requirements_score_zero() {
        let result = evaluate(&candidate(&[("rust", 5)]), &RequirementSet::new());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.total_weight, 0.0);
        assert!(result.requirements.is_empty());
    }

    #[test]
    fn exact_match_on_every_requirement_is_one_hundred() {
        let requirements = RequirementSet::from(vec![
            req("rust", 3, 0.7),
            req("sql", 2, 0.2),
            req("git", 1, 0.1),
        ]);
        let result = evaluate(
            &candidate(&[("Rust", 3), ("SQL", 2), ("git", 1)]),
            &requirements,
        );

        approx(result.total, 100.0);
        assert!(result
            .requirements
            .iter()
            .all(|r| r.status == MatchStatus::PerfectMatch));
    }

    #[test]
    fn no_overlap_scores_zero() {
        let requirements = RequirementSet::from(vec![req("go", 3, 1.0), req("k8s", 2, 0.4)]);
        assert_eq!(score(&candidate(&[("java", 5), ("css", 2)]), &requirements), 0.0);
    }

    #[test]
    fn bonus_adds_a_tenth_per_extra_level() {
        approx(match_fraction(level(5), level(1)), 1.4);
        approx(match_fraction(level(4), level(1)), 1.3);
        approx(match_fraction(level(3), level(2)), 1.1);
        approx(match_fraction(level(2), level(2)), 1.0);
        approx(match_fraction(level(1), level(4)), 0.25);
        assert!(match_fraction(level(5), level(1)) <= MAX_MATCH_FRACTION);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let result = score(
            &candidate(&[("  Spring Boot ", 3)]),
            &RequirementSet::from(vec![req("SPRING BOOT", 3, 0.9)]),
        );
        approx(result, 100.0);
    }

    #[test]
    fn duplicate_requirements_each_contribute() {
        let requirements = RequirementSet::from(vec![req("git", 2, 1.0), req("git", 4, 1.0)]);
        let result = evaluate(&candidate(&[("git", 2)]), &requirements);

        // (1.0 * 1.0 + 0.5 * 1.0) / 2.0
        approx(result.total, 75.0);
        assert_eq!(result.requirements.len(), 2);
    }

    #[test]
    fn weights_above_one_are_summed_as_given() {
        let requirements = RequirementSet::from(vec![req("rust", 2, 3.0), req("go", 2, 1.0)]);
        approx(score(&candidate(&[("rust", 2)]), &requirements), 75.0);
    }

    #[test]
    fn huge_weights_keep_score_finite() {
        let single = score(
            &candidate(&[("java", 5)]),
            &RequirementSet::from(vec![req("java", 1, f64::MAX)]),
        );
        approx(single, 140.0);

        let requirements =
            RequirementSet::from(vec![req("java", 2, 1e308), req("go", 2, 1e308)]);
        let result = evaluate(&candidate(&[("java", 2), ("go", 2)]), &requirements);
        approx(result.total, 100.0);
        assert!(result.total_weight.is_finite());
        assert!(result.requirements.iter().all(|r| r.contribution.is_finite()));
    }

    #[test]
    fn tiny_and_huge_weights_mix_by_ratio() {
        // java carries all of the weight in practice; go barely registers
        let requirements =
            RequirementSet::from(vec![req("java", 2, 1e300), req("go", 2, 1e-300)]);
        approx(score(&candidate(&[("java", 2)]), &requirements), 100.0);
        approx(score(&candidate(&[("go", 2)]), &requirements), 0.0);
    }

    #[test]
    fn scoring_does_not_mutate_candidate() {
        let before = candidate(&[("java", 3)]);
        let after = before.clone();
        let _ = evaluate(&after, &RequirementSet::from(vec![req("java", 5, 1.0)]));
        assert_eq!(before, after);
    }

    #[test]
    fn status_labels_match_serialized_form() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::PerfectMatch).unwrap(),
            format!("\"{}\"", MatchStatus::PerfectMatch.as_str())
        );
        assert_eq!(MatchStatus::Exceeds.as_str(), "EXCEEDS");
    }

    fn arb_skill() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["rust", "go", "java", "sql", "git", "css"]).prop_map(String::from)
    }

    fn arb_candidate() -> impl Strategy<Value = Candidate> {
        prop::collection::vec((arb_skill(), 1i64..=5), 0..6).prop_map(|skills| {
            let mut candidate = Candidate::new("Prop", "prop@example.com", 1);
            for (skill, level) in skills {
                candidate.add_skill(&skill, level).unwrap();
            }
            candidate
        })
    }

    fn arb_requirements() -> impl Strategy<Value = RequirementSet> {
        prop::collection::vec((arb_skill(), 1i64..=5, 0.1f64..5.0), 0..8).prop_map(|reqs| {
            reqs.into_iter()
                .map(|(skill, level, weight)| req(&skill, level, weight))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn proptest_scaled_weights_keep_bounds(
            levels in prop::collection::vec((1i64..=5, 1i64..=5), 1..6),
            exponent in 0i32..=308,
        ) {
            let weight = 10f64.powi(exponent);
            let skills = ["rust", "go", "java", "sql", "git"];
            let mut c = Candidate::new("Big", "big@example.com", 1);
            let mut reqs = RequirementSet::new();
            for (idx, (held, required)) in levels.iter().enumerate() {
                c.add_skill(skills[idx], *held).unwrap();
                reqs.push(req(skills[idx], *required, weight));
            }
            let total = score(&c, &reqs);
            prop_assert!(total.is_finite());
            prop_assert!(total >= 0.0);
            prop_assert!(total <= MAX_MATCH_FRACTION * 100.0 + 1e-9);
        }

        #[test]
        fn proptest_score_is_bounded(c in arb_candidate(), reqs in arb_requirements()) {
            let total = score(&c, &reqs);
            prop_assert!(total >= 0.0);
            prop_assert!(total <= MAX_MATCH_FRACTION * 100.0 + 1e-9);
        }

        #[test]
        fn proptest_exceeding_never_lowers_contribution(required in 1i64..=4, extra in 1i64..=4) {
            let required_level = level(required);
            let held = level((required + extra).min(5));
            let exact = match_fraction(required_level, required_level);
            prop_assert!(match_fraction(held, required_level) > exact);
            prop_assert!(match_fraction(held, required_level) <= MAX_MATCH_FRACTION);
        }

        #[test]
        fn proptest_exact_levels_score_one_hundred(reqs in arb_requirements()) {
            prop_assume!(!reqs.is_empty());
            // Give the candidate exactly the last-declared level for each skill,
            // and keep only requirements that agree with it.
            let mut c = Candidate::new("Exact", "exact@example.com", 1);
            for r in &reqs {
                c.add_skill(r.skill(), i64::from(r.required_level().get())).unwrap();
            }
            let agreeing: RequirementSet = reqs
                .iter()
                .filter(|r| c.skill_level(r.skill()) == Some(r.required_level()))
                .cloned()
                .collect();
            let total = score(&c, &agreeing);
            prop_assert!((total - 100.0).abs() < 1e-9);
        }
    }
}
