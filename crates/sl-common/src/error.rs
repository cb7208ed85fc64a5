/// Boundary validation failures for candidate skills and job requirements.
///
/// Scoring itself never fails; every value that reaches the scorer has been
/// accepted by one of the constructors that return this error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("skill level {level} is outside 1-5")]
    SkillLevelOutOfRange { level: i64 },
    #[error("skill name is empty")]
    EmptySkillName,
    #[error("requirement weight {weight} must be a positive finite number")]
    InvalidWeight { weight: f64 },
    #[error("requirement weight {weight} is outside {min}-{max}")]
    WeightOutOfRange { weight: f64, min: f64, max: f64 },
    #[error("weight range {min}-{max} is invalid")]
    InvalidWeightRange { min: f64, max: f64 },
    #[error("experience must not be negative (got {years})")]
    NegativeExperience { years: i64 },
    #[error("experience of {years} years is too large")]
    ExperienceTooLarge { years: i64 },
}
