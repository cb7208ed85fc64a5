use std::str::FromStr;

use crate::error::ValidationError;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_MIN_WEIGHT: f64 = 0.1;
pub const DEFAULT_MAX_WEIGHT: f64 = 1.0;

/// Accepted weight range for requirements typed in at the console.
///
/// The scorer itself accepts any positive weight; this range only guards
/// interactive entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    min: f64,
    max: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WEIGHT,
            max: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl WeightRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ValidationError::InvalidWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn check(&self, weight: f64) -> Result<(), ValidationError> {
        if weight >= self.min && weight <= self.max {
            Ok(())
        } else {
            Err(ValidationError::WeightOutOfRange {
                weight,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortlistConfig {
    /// 件数指定が無いときの返却件数
    pub default_top_n: usize,
    pub weight_range: WeightRange,
}

impl Default for ShortlistConfig {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
            weight_range: WeightRange::default(),
        }
    }
}

impl ShortlistConfig {
    /// Build a config from a key lookup. Missing or unparseable values fall
    /// back to their defaults; only an invalid weight range is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_top_n = parse_var(&lookup, "SL_DEFAULT_TOP_N").unwrap_or(DEFAULT_TOP_N);
        let min = parse_var(&lookup, "SL_MIN_WEIGHT").unwrap_or(DEFAULT_MIN_WEIGHT);
        let max = parse_var(&lookup, "SL_MAX_WEIGHT").unwrap_or(DEFAULT_MAX_WEIGHT);

        Ok(Self {
            default_top_n,
            weight_range: WeightRange::new(min, max)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}

/// 環境変数から設定を読み込み
pub fn load_config_from_env() -> Result<ShortlistConfig, ValidationError> {
    ShortlistConfig::from_lookup(|key| std::env::var(key).ok())
}
