pub mod capability;
pub mod dismemberment;
pub mod ecs;
pub mod model;
pub mod skeleton;
pub mod testutil;

pub use capability::{BoneTransform, EffectPlayer, SkeletalMesh, TimeSource};
pub use dismemberment::Dismemberment;
pub use model::{
    BoneConfig, BoneEvent, BoneId, ConfigError, DismembermentConfig, ListenerId,
    ParticleSystemRef, RegenSettings, SoundRef, MIN_HEALTH,
};
pub use skeleton::Skeleton;
