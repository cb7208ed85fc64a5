use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Candidate, ValidationError};

/// ファイル入出力用の候補者レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub experience: i64,
    #[serde(default)]
    pub skills: BTreeMap<String, i64>,
}

impl TryFrom<CandidateRecord> for Candidate {
    type Error = ValidationError;

    fn try_from(record: CandidateRecord) -> Result<Self, Self::Error> {
        let years = record.experience;
        let experience_years = u32::try_from(years).map_err(|_| {
            if years < 0 {
                ValidationError::NegativeExperience { years }
            } else {
                ValidationError::ExperienceTooLarge { years }
            }
        })?;

        let mut candidate = Candidate::new(record.name, record.email, experience_years);
        for (skill, level) in &record.skills {
            candidate.add_skill(skill, *level)?;
        }
        Ok(candidate)
    }
}

impl From<&Candidate> for CandidateRecord {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            experience: i64::from(candidate.experience_years),
            skills: candidate
                .skills
                .iter()
                .map(|(name, level)| (name.to_string(), i64::from(level.get())))
                .collect(),
        }
    }
}
