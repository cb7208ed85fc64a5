use std::fmt;

use crate::JobRequirement;

/// 求人要件の順序付きリスト
///
/// Order is preserved and duplicate skills are kept; each entry counts on its
/// own in the weighted average.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementSet {
    requirements: Vec<JobRequirement>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, requirement: JobRequirement) {
        self.requirements.push(requirement);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRequirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Sum of all weights, met or not.
    pub fn total_weight(&self) -> f64 {
        self.requirements.iter().map(JobRequirement::weight).sum()
    }

    /// Largest single weight, or 0.0 for an empty set.
    pub fn max_weight(&self) -> f64 {
        self.requirements
            .iter()
            .map(JobRequirement::weight)
            .fold(0.0, f64::max)
    }
}

impl From<Vec<JobRequirement>> for RequirementSet {
    fn from(requirements: Vec<JobRequirement>) -> Self {
        Self { requirements }
    }
}

impl FromIterator<JobRequirement> for RequirementSet {
    fn from_iter<I: IntoIterator<Item = JobRequirement>>(iter: I) -> Self {
        Self {
            requirements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a JobRequirement;
    type IntoIter = std::slice::Iter<'a, JobRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for requirement in &self.requirements {
            writeln!(f, "- {requirement}")?;
        }
        Ok(())
    }
}
