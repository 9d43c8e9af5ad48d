//! Session configuration loaded from RON or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PLAYER_HEALTH, DEFAULT_ROOM_COUNT};
use crate::error::{TowerError, TowerResult};
use crate::logging::TracingConfig;
use crate::rng::TowerSeed;

/// Session settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub tower_seed: u64,
    pub room_count: u32,
    pub starting_health: f64,
    pub tracing: TracingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tower_seed: TowerSeed::default().seed,
            room_count: DEFAULT_ROOM_COUNT,
            starting_health: DEFAULT_PLAYER_HEALTH,
            tracing: TracingConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn seed(&self) -> TowerSeed {
        TowerSeed {
            seed: self.tower_seed,
        }
    }

    pub fn validate(&self) -> TowerResult<()> {
        if self.room_count < 1 {
            return Err(TowerError::Config("room_count must be at least 1".into()));
        }
        if !(self.starting_health.is_finite() && self.starting_health > 0.0) {
            return Err(TowerError::Config(format!(
                "starting_health must be positive, got {}",
                self.starting_health
            )));
        }
        Ok(())
    }

    pub fn from_ron(text: &str) -> TowerResult<Self> {
        let config: Self =
            ron::from_str(text).map_err(|e| TowerError::Config(format!("RON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> TowerResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| TowerError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.ron` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> TowerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron(&text),
            Some("json") => Self::from_json(&text),
            other => Err(TowerError::Config(format!(
                "unsupported config extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}
