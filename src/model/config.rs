use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bone::{BoneConfig, BoneId};
use super::settings::RegenSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bone {bone} has invalid max_health {value}")]
    InvalidMaxHealth { bone: BoneId, value: f32 },
    #[error("bone {bone} has invalid damage_multiplier {value}")]
    InvalidDamageMultiplier { bone: BoneId, value: f32 },
    #[error("regen setting {name} must be finite and non-negative, got {value}")]
    InvalidRegenSetting { name: &'static str, value: f64 },
}

/// Authored dismemberment setup for one actor: the breakable bones, the hit
/// bone aliases and the regeneration tunables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismembermentConfig {
    pub bones: BTreeMap<BoneId, BoneConfig>,
    /// Raw hit bone -> tracked bone.
    pub redirects: BTreeMap<BoneId, BoneId>,
    pub regen: RegenSettings,
}

impl DismembermentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bone(mut self, bone: impl Into<BoneId>, config: BoneConfig) -> Self {
        self.bones.insert(bone.into(), config);
        self
    }

    pub fn with_redirect(mut self, hit_bone: impl Into<BoneId>, target: impl Into<BoneId>) -> Self {
        self.redirects.insert(hit_bone.into(), target.into());
        self
    }

    pub fn with_regen(mut self, regen: RegenSettings) -> Self {
        self.regen = regen;
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject values the damage model cannot honor. Redirects to unconfigured
    /// bones are allowed (those bones are indestructible) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (bone, config) in &self.bones {
            if !config.max_health.is_finite() || config.max_health <= 0.0 {
                return Err(ConfigError::InvalidMaxHealth {
                    bone: bone.clone(),
                    value: config.max_health,
                });
            }
            if !config.damage_multiplier.is_finite() {
                return Err(ConfigError::InvalidDamageMultiplier {
                    bone: bone.clone(),
                    value: config.damage_multiplier,
                });
            }
        }

        let regen = &self.regen;
        for (name, value) in [
            ("limb_regrow_delay", regen.limb_regrow_delay),
            ("passive_heal_delay", regen.passive_heal_delay),
            ("heal_amount_per_second", f64::from(regen.heal_amount_per_second)),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRegenSetting { name, value });
            }
        }

        for (hit_bone, target) in &self.redirects {
            if !self.bones.contains_key(target) {
                tracing::warn!(
                    %hit_bone,
                    %target,
                    "redirect points at an unconfigured bone"
                );
            }
        }

        Ok(())
    }
}
