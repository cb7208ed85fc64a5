use std::{collections::BTreeMap, fmt};

use crate::{
    error::ValidationError,
    skill_normalizer::{normalize_non_empty, normalize_skill},
};

/// A proficiency level in `1..=5`.
///
/// The range is checked once, when the value is created; anything holding a
/// `SkillLevel` can divide by it without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(ValidationError::SkillLevelOutOfRange { level })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i64> for SkillLevel {
    type Error = ValidationError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 正規化済みスキル名 → レベル のマップ
///
/// Keys are always stored in normalized form and lookups normalize their
/// argument, so callers may pass raw user input on either side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillProfile {
    levels: BTreeMap<String, SkillLevel>,
}

impl SkillProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skill, replacing any earlier level for the same normalized name.
    /// Returns the replaced level, if there was one.
    pub fn insert(
        &mut self,
        skill: &str,
        level: SkillLevel,
    ) -> Result<Option<SkillLevel>, ValidationError> {
        let key = normalize_non_empty(skill).ok_or(ValidationError::EmptySkillName)?;
        Ok(self.levels.insert(key, level))
    }

    pub fn level(&self, skill: &str) -> Option<SkillLevel> {
        self.levels.get(&normalize_skill(skill)).copied()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.level(skill).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SkillLevel)> {
        self.levels.iter().map(|(name, level)| (name.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl fmt::Display for SkillProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, level)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={level}")?;
        }
        f.write_str("}")
    }
}
