//! Collaborator doubles with shared handles, so a test can keep inspecting a
//! collaborator after handing it to a component.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::{Quat, Vec3};

use crate::capability::{BoneTransform, EffectPlayer, SkeletalMesh, TimeSource};
use crate::model::{ParticleSystemRef, SoundRef};
use crate::skeleton::Skeleton;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    seconds: AtomicU64,
}

impl ManualClock {
    pub fn at(seconds: f64) -> Self {
        Self {
            seconds: AtomicU64::new(seconds.to_bits()),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.seconds.store(seconds.to_bits(), Ordering::Relaxed);
    }

    pub fn advance(&self, delta: f64) {
        self.set(self.now_seconds() + delta);
    }
}

impl TimeSource for ManualClock {
    fn now_seconds(&self) -> f64 {
        f64::from_bits(self.seconds.load(Ordering::Relaxed))
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum EffectCall {
    Sound {
        sound: SoundRef,
        position: Vec3,
    },
    Particles {
        particles: ParticleSystemRef,
        position: Vec3,
        rotation: Quat,
    },
}

/// Records every playback request. Clones share one log.
#[derive(Clone, Debug, Default)]
pub struct RecordingEffects {
    calls: Arc<Mutex<Vec<EffectCall>>>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<EffectCall> {
        lock(&self.calls).clone()
    }
}

impl EffectPlayer for RecordingEffects {
    fn play_sound(&mut self, sound: &SoundRef, position: Vec3) {
        lock(&self.calls).push(EffectCall::Sound {
            sound: sound.clone(),
            position,
        });
    }

    fn spawn_particles(&mut self, particles: &ParticleSystemRef, position: Vec3, rotation: Quat) {
        lock(&self.calls).push(EffectCall::Particles {
            particles: particles.clone(),
            position,
            rotation,
        });
    }
}

// ---------------------------------------------------------------------------
// Skeleton
// ---------------------------------------------------------------------------

/// A [`Skeleton`] behind a shared handle. Clones see the same bones.
#[derive(Clone, Debug, Default)]
pub struct SharedSkeleton {
    inner: Arc<Mutex<Skeleton>>,
}

impl SharedSkeleton {
    pub fn new(skeleton: Skeleton) -> Self {
        Self {
            inner: Arc::new(Mutex::new(skeleton)),
        }
    }

    pub fn is_visible(&self, bone: &str) -> bool {
        lock(&self.inner).is_visible(bone)
    }

    pub fn hidden_bones(&self) -> Vec<String> {
        lock(&self.inner)
            .hidden_bones()
            .map(|bone| bone.to_string())
            .collect()
    }
}

impl SkeletalMesh for SharedSkeleton {
    fn locate(&self, bone: &str) -> Option<BoneTransform> {
        lock(&self.inner).locate(bone)
    }

    fn set_bone_visible(&mut self, bone: &str, visible: bool) {
        lock(&self.inner).set_bone_visible(bone, visible);
    }
}
