use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::fx::{ParticleSystemRef, SoundRef};

/// Health value at or below which a bone counts as broken.
pub const MIN_HEALTH: f32 = 0.0;

/// Name of a bone in the actor's skeleton.
///
/// Borrows as `str`, so maps keyed by `BoneId` can be queried with plain
/// string slices.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoneId(String);

impl BoneId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BoneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoneId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for BoneId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authored settings for one breakable bone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneConfig {
    pub max_health: f32,
    pub damage_multiplier: f32,
    pub can_regenerate: bool,
    pub sound: Option<SoundRef>,
    pub particles: Option<ParticleSystemRef>,
    /// Bones hidden and shown together with this one, in order.
    pub dependent_bones: Vec<BoneId>,
}

impl Default for BoneConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            damage_multiplier: 1.0,
            can_regenerate: false,
            sound: None,
            particles: None,
            dependent_bones: Vec::new(),
        }
    }
}

impl BoneConfig {
    pub fn with_max_health(mut self, max_health: f32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn with_damage_multiplier(mut self, multiplier: f32) -> Self {
        self.damage_multiplier = multiplier;
        self
    }

    pub fn regenerating(mut self) -> Self {
        self.can_regenerate = true;
        self
    }

    pub fn with_sound(mut self, sound: impl Into<SoundRef>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn with_particles(mut self, particles: impl Into<ParticleSystemRef>) -> Self {
        self.particles = Some(particles.into());
        self
    }

    pub fn with_dependents<I, B>(mut self, bones: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BoneId>,
    {
        self.dependent_bones = bones.into_iter().map(Into::into).collect();
        self
    }
}

/// A configured bone together with its live health.
#[derive(Clone, Debug, PartialEq)]
pub struct BoneState {
    pub config: BoneConfig,
    pub current_health: f32,
}

impl BoneState {
    /// Start at full health.
    pub fn new(config: BoneConfig) -> Self {
        let current_health = config.max_health;
        Self {
            config,
            current_health,
        }
    }

    /// Subtract `damage`, keeping health within `[MIN_HEALTH, max_health]`.
    /// Returns the remaining health.
    pub fn take_damage(&mut self, damage: f32) -> f32 {
        self.current_health = (self.current_health - damage)
            .max(MIN_HEALTH)
            .min(self.config.max_health);
        self.current_health
    }

    /// Add `amount`, capped at max health.
    pub fn heal(&mut self, amount: f32) {
        self.current_health = (self.current_health + amount).min(self.config.max_health);
    }

    pub fn reset(&mut self) {
        self.current_health = self.config.max_health;
    }

    pub fn is_depleted(&self) -> bool {
        self.current_health <= MIN_HEALTH
    }

    pub fn is_full(&self) -> bool {
        self.current_health >= self.config.max_health
    }
}
