use crate::{Candidate, ValidationError};

/// 候補者プール（呼び出し側が所有する）
///
/// The pool is a plain value handed to the shortlister by reference; nothing
/// in the scoring code keeps candidates around between calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Append the demo candidates and return how many were added.
    pub fn add_sample_candidates(&mut self) -> Result<usize, ValidationError> {
        let samples = sample_candidates()?;
        let added = samples.len();
        self.candidates.extend(samples);
        Ok(added)
    }
}

impl From<Vec<Candidate>> for CandidatePool {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Three demo profiles: a Java full-stack developer, a C/C++ developer and a
/// Python/Django developer.
pub fn sample_candidates() -> Result<Vec<Candidate>, ValidationError> {
    let full_stack = Candidate::new("Asha Verma", "asha.verma@example.com", 5)
        .with_skill("Java", 4)?
        .with_skill("SpringBoot", 3)?
        .with_skill("MySQL", 4)?
        .with_skill("React JS", 3)?
        .with_skill("Tailwind CSS", 3)?
        .with_skill("Git", 3)?;

    let systems = Candidate::new("Ravi Menon", "ravi.menon@example.com", 3)
        .with_skill("CPP", 3)?
        .with_skill("C", 2)?
        .with_skill("HTML", 4)?
        .with_skill("Git", 4)?;

    let python = Candidate::new("Meera Iyer", "meera.iyer@example.com", 2)
        .with_skill("Django", 2)?
        .with_skill("Python", 3)?
        .with_skill("Git", 2)?;

    Ok(vec![full_stack, systems, python])
}
