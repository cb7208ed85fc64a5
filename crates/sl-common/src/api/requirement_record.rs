use serde::{Deserialize, Serialize};

use crate::{JobRequirement, ValidationError};

/// ファイル入出力用の要件レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub skill: String,
    pub level: i64,
    pub weight: f64,
}

impl TryFrom<RequirementRecord> for JobRequirement {
    type Error = ValidationError;

    fn try_from(record: RequirementRecord) -> Result<Self, Self::Error> {
        JobRequirement::new(&record.skill, record.level, record.weight)
    }
}

impl From<&JobRequirement> for RequirementRecord {
    fn from(requirement: &JobRequirement) -> Self {
        Self {
            skill: requirement.skill().to_string(),
            level: i64::from(requirement.required_level().get()),
            weight: requirement.weight(),
        }
    }
}
