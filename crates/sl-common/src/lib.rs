pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod matching;
pub mod pool;
pub mod profile;
pub mod skill_normalizer;

use std::fmt;

pub use error::ValidationError;
pub use profile::{SkillLevel, SkillProfile};
use skill_normalizer::normalize_non_empty;

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub experience_years: u32,
    pub skills: SkillProfile,
}

impl Candidate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, experience_years: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            experience_years,
            skills: SkillProfile::new(),
        }
    }

    /// Validate and record a skill. Levels outside 1-5 are rejected and nothing is stored.
    pub fn add_skill(&mut self, skill: &str, level: i64) -> Result<(), ValidationError> {
        let level = SkillLevel::new(level)?;
        self.skills.insert(skill, level)?;
        Ok(())
    }

    pub fn with_skill(mut self, skill: &str, level: i64) -> Result<Self, ValidationError> {
        self.add_skill(skill, level)?;
        Ok(self)
    }

    pub fn skill_level(&self, skill: &str) -> Option<SkillLevel> {
        self.skills.level(skill)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} years exp - Skills: {}",
            self.name, self.email, self.experience_years, self.skills
        )
    }
}

/// One weighted line of a job's needs.
///
/// Fields are private so that a requirement can only exist with a normalized
/// skill name, a level in 1-5 and a positive finite weight.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequirement {
    skill: String,
    required_level: SkillLevel,
    weight: f64,
}

impl JobRequirement {
    pub fn new(skill: &str, required_level: i64, weight: f64) -> Result<Self, ValidationError> {
        let skill = normalize_non_empty(skill).ok_or(ValidationError::EmptySkillName)?;
        let required_level = SkillLevel::new(required_level)?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ValidationError::InvalidWeight { weight });
        }

        Ok(Self {
            skill,
            required_level,
            weight,
        })
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn required_level(&self) -> SkillLevel {
        self.required_level
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for JobRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level: {}, Weight: {:.1})",
            self.skill, self.required_level, self.weight
        )
    }
}
