pub mod bone;
pub mod config;
pub mod event;
pub mod fx;
pub mod settings;

pub use bone::{BoneConfig, BoneId, BoneState, MIN_HEALTH};
pub use config::{ConfigError, DismembermentConfig};
pub use event::{BoneEvent, BoneListeners, ListenerId};
pub use fx::{ParticleSystemRef, SoundRef};
pub use settings::RegenSettings;
