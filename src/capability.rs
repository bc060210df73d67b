//! Collaborators the dismemberment component calls into but does not own.
//!
//! Every collaborator is optional on the component. A missing one disables the
//! sub-steps that need it without affecting the damage state machine.

use glam::{Quat, Vec3};

use crate::model::{ParticleSystemRef, SoundRef};

/// World-space placement of a bone.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoneTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl BoneTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for BoneTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Monotonic world clock.
pub trait TimeSource: Send + Sync {
    /// Seconds since the world started.
    fn now_seconds(&self) -> f64;
}

/// Skeletal geometry of the owning actor.
pub trait SkeletalMesh: Send + Sync {
    /// `None` if the skeleton has no bone with this name.
    fn locate(&self, bone: &str) -> Option<BoneTransform>;

    fn set_bone_visible(&mut self, bone: &str, visible: bool);

    fn has_bone(&self, bone: &str) -> bool {
        self.locate(bone).is_some()
    }
}

/// Fire-and-forget sound and particle playback.
pub trait EffectPlayer: Send + Sync {
    fn play_sound(&mut self, sound: &SoundRef, position: Vec3);

    fn spawn_particles(&mut self, particles: &ParticleSystemRef, position: Vec3, rotation: Quat);
}
