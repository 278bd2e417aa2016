//! Engine configuration.

use crate::builder::SpecError;
use serde::{Deserialize, Serialize};

/// Default limit on the path depth of a nested value.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables fixed when the registry is built.
///
/// Deserializes from partial JSON; missing keys take their defaults.
///
/// ```rust
/// use fieldcheck::engine::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "max_depth": 8 }"#).unwrap();
/// assert_eq!(config.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest field path (in segments) at which a nested object may still
    /// be validated. Guards against accidentally recursive specs.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SpecError::InvalidConfig(format!("malformed JSON: {e}")))?;
        config.check()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SpecError> {
        serde_json::to_string(self).map_err(|e| SpecError::SerializationFailed(e.to_string()))
    }

    pub(crate) fn check(&self) -> Result<(), SpecError> {
        if self.max_depth == 0 {
            return Err(SpecError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
