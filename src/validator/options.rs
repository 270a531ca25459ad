//! Validator configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::text::TextStrategy;

/// How strictly textual consistency is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Report every textual mismatch
    #[default]
    Strict,
    /// Tolerate mismatches that differ only in whitespace
    Lax,
    /// Overwrite mismatching parent text with the concatenation
    Fix,
    /// Skip textual checks entirely
    Off,
}

impl Strictness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Lax => "lax",
            Strictness::Fix => "fix",
            Strictness::Off => "off",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Strictness::Strict),
            "lax" => Ok(Strictness::Lax),
            "fix" => Ok(Strictness::Fix),
            "off" => Ok(Strictness::Off),
            other => Err(Error::UnknownStrictness(other.to_string())),
        }
    }
}

/// Options controlling a validation run.
#[derive(Debug, Clone, Copy)]
pub struct ValidatorOptions {
    /// Treatment of textual inconsistencies
    pub strictness: Strictness,

    /// Selection of the canonical reading among alternatives
    pub strategy: TextStrategy,

    /// Check that baselines lie within their line's outline
    pub check_baseline: bool,

    /// Check outline validity and containment
    pub check_coords: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Strict,
            strategy: TextStrategy::Index1,
            check_baseline: true,
            check_coords: true,
        }
    }
}

impl ValidatorOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strictness level.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Set the text selection strategy.
    pub fn with_strategy(mut self, strategy: TextStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable baseline checks.
    pub fn with_check_baseline(mut self, check_baseline: bool) -> Self {
        self.check_baseline = check_baseline;
        self
    }

    /// Enable or disable coordinate checks.
    pub fn with_check_coords(mut self, check_coords: bool) -> Self {
        self.check_coords = check_coords;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ValidatorOptions::default();
        assert_eq!(options.strictness, Strictness::Strict);
        assert_eq!(options.strategy, TextStrategy::Index1);
        assert!(options.check_baseline);
        assert!(options.check_coords);
    }

    #[test]
    fn test_builder_chain() {
        let options = ValidatorOptions::new()
            .with_strictness(Strictness::Fix)
            .with_check_baseline(false)
            .with_check_coords(false);
        assert_eq!(options.strictness, Strictness::Fix);
        assert!(!options.check_baseline);
        assert!(!options.check_coords);
    }

    #[test]
    fn test_strictness_parsing() {
        assert_eq!("strict".parse::<Strictness>().unwrap(), Strictness::Strict);
        assert_eq!("lax".parse::<Strictness>().unwrap(), Strictness::Lax);
        assert_eq!("fix".parse::<Strictness>().unwrap(), Strictness::Fix);
        assert_eq!("off".parse::<Strictness>().unwrap(), Strictness::Off);

        let error = "pedantic".parse::<Strictness>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "strictness level 'pedantic' not implemented"
        );
    }

    #[test]
    fn test_strictness_round_trip() {
        for strictness in [
            Strictness::Strict,
            Strictness::Lax,
            Strictness::Fix,
            Strictness::Off,
        ] {
            assert_eq!(strictness.as_str().parse::<Strictness>().unwrap(), strictness);
        }
    }
}
