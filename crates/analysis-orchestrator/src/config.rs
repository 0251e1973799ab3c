use std::env;
use std::str::FromStr;

use analysis_core::AnalysisError;

/// Runtime settings for the analysis pipeline and the screener
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Analyse short histories in simplified mode instead of rejecting them
    pub allow_simplified: bool,
    /// Number of ranked entries a screen returns
    pub screener_limit: usize,
    /// Minimum composite score for a screen entry
    pub screener_min_score: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            allow_simplified: true,
            screener_limit: 10,
            screener_min_score: 0,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, AnalysisError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AnalysisError::Configuration(format!("{key}={raw:?}: {e}"))),
        None => Ok(default),
    }
}

impl AnalysisConfig {
    /// Read `ANALYSIS_ALLOW_SIMPLIFIED`, `SCREENER_LIMIT` and
    /// `SCREENER_MIN_SCORE`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, AnalysisError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AnalysisError> {
        let defaults = Self::default();
        let config = Self {
            allow_simplified: parse_var(&lookup, "ANALYSIS_ALLOW_SIMPLIFIED", defaults.allow_simplified)?,
            screener_limit: parse_var(&lookup, "SCREENER_LIMIT", defaults.screener_limit)?,
            screener_min_score: parse_var(&lookup, "SCREENER_MIN_SCORE", defaults.screener_min_score)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.screener_limit == 0 {
            return Err(AnalysisError::Configuration("SCREENER_LIMIT must be at least 1".to_string()));
        }
        if self.screener_min_score > 100 {
            return Err(AnalysisError::Configuration(format!(
                "SCREENER_MIN_SCORE must be between 0 and 100, got {}",
                self.screener_min_score
            )));
        }
        Ok(())
    }
}
