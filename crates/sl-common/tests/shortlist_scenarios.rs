use sl_common::{
    api::{CandidateRecord, RequirementRecord, ShortlistEntry},
    config::ShortlistConfig,
    matching::{score, shortlist, RequirementSet, Shortlister},
    pool::CandidatePool,
    Candidate, JobRequirement,
};

fn requirements(records: &str) -> RequirementSet {
    let records: Vec<RequirementRecord> = serde_json::from_str(records).unwrap();
    records
        .into_iter()
        .map(|record| JobRequirement::try_from(record).unwrap())
        .collect()
}

fn pool(records: &str) -> CandidatePool {
    let records: Vec<CandidateRecord> = serde_json::from_str(records).unwrap();
    records
        .into_iter()
        .map(|record| Candidate::try_from(record).unwrap())
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn java_four_against_required_two_scores_one_twenty() {
    let candidate = Candidate::new("J", "j@example.com", 1)
        .with_skill("java", 4)
        .unwrap();
    let reqs = requirements(r#"[{"skill":"java","level":2,"weight":1.0}]"#);

    assert!((score(&candidate, &reqs) - 120.0).abs() < 1e-9);
}

#[test]
fn partial_git_and_missing_python_scores_twenty_five() {
    let candidate = Candidate::new("G", "g@example.com", 1)
        .with_skill("git", 2)
        .unwrap();
    let reqs = requirements(
        r#"[{"skill":"git","level":4,"weight":0.5},{"skill":"python","level":3,"weight":0.5}]"#,
    );

    assert!((score(&candidate, &reqs) - 25.0).abs() < 1e-9);
}

#[test]
fn file_loaded_pool_ranks_and_serializes() {
    let pool = pool(
        r#"[
            {"name":"Low","email":"low@example.com","experience":1,"skills":{"Rust":1,"Go":4}},
            {"name":"Mid","email":"mid@example.com","experience":2,"skills":{"rust":3,"go":4}},
            {"name":"Top","email":"top@example.com","experience":3,"skills":{"RUST":4,"go":5}}
        ]"#,
    );
    let reqs = requirements(
        r#"[{"skill":"rust","level":5,"weight":1.0},{"skill":"Go","level":4,"weight":1.0}]"#,
    );

    let shortlister = Shortlister::new(ShortlistConfig {
        default_top_n: 2,
        ..ShortlistConfig::default()
    });
    let result = shortlister.shortlist(pool.as_slice(), &reqs, None);
    let entries: Vec<ShortlistEntry> = result.iter().map(ShortlistEntry::from).collect();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Top");
    assert_eq!(entries[1].name, "Mid");
    assert!((entries[0].score - 95.0).abs() < 1e-9);
    assert!((entries[1].score - 80.0).abs() < 1e-9);
}

#[test]
fn zero_top_n_returns_nothing_for_non_empty_inputs() {
    let mut pool = CandidatePool::new();
    pool.add_sample_candidates().unwrap();
    let reqs = requirements(r#"[{"skill":"git","level":1,"weight":0.3}]"#);

    assert!(shortlist(pool.as_slice(), &reqs, 0).is_empty());
    assert_eq!(shortlist(pool.as_slice(), &reqs, 99).len(), pool.len());
}
