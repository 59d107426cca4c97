//! Series configuration loaded from JSON with per-field defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on rounds in a single series.
pub const MAX_SERIES_ROUNDS: u32 = 1_000;

/// Errors raised when series configuration invariants are violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeriesConfigError {
    #[error("rounds must be between 1 and {max} (got {value})")]
    RoundsOutOfRange { value: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("malformed series config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SeriesConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    #[serde(default = "SeriesConfig::default_rounds")]
    pub rounds: u32,
    #[serde(default = "SeriesConfig::default_seed")]
    pub seed: u64,
}

impl SeriesConfig {
    const fn default_rounds() -> u32 {
        3
    }

    const fn default_seed() -> u64 {
        1337
    }

    /// Parse a configuration document and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns [`SeriesConfigError::RoundsOutOfRange`] when `rounds` is zero or
    /// above [`MAX_SERIES_ROUNDS`].
    pub const fn validate(&self) -> Result<(), SeriesConfigError> {
        if self.rounds == 0 || self.rounds > MAX_SERIES_ROUNDS {
            return Err(SeriesConfigError::RoundsOutOfRange {
                value: self.rounds,
                max: MAX_SERIES_ROUNDS,
            });
        }
        Ok(())
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            rounds: Self::default_rounds(),
            seed: Self::default_seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = SeriesConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SeriesConfig::default());
        assert_eq!(cfg.rounds, 3);
        assert_eq!(cfg.seed, 1337);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = SeriesConfig::from_json(r#"{"seed": 99}"#).unwrap();
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.rounds, 3);
    }

    #[test]
    fn zero_rounds_rejected() {
        let err = SeriesConfig::from_json(r#"{"rounds": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(SeriesConfigError::RoundsOutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn too_many_rounds_rejected() {
        let cfg = SeriesConfig {
            rounds: MAX_SERIES_ROUNDS + 1,
            ..SeriesConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(SeriesConfigError::RoundsOutOfRange {
                value: MAX_SERIES_ROUNDS + 1,
                max: MAX_SERIES_ROUNDS,
            })
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SeriesConfig::from_json("{rounds:").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }
}
