use std::fmt;

use serde::{Deserialize, Serialize};

/// Path of a sound asset played when a bone breaks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundRef(pub String);

/// Path of a particle system spawned when a bone breaks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleSystemRef(pub String);

impl From<&str> for SoundRef {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<&str> for ParticleSystemRef {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl fmt::Display for SoundRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ParticleSystemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
