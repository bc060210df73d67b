use serde::{Deserialize, Serialize};

/// Regrowth and passive healing tunables shared by every bone of an actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegenSettings {
    /// Global regrow gate. Passive healing ignores it.
    pub enabled: bool,
    /// Seconds a regenerating bone stays broken.
    pub limb_regrow_delay: f64,
    /// Seconds without damage before unbroken bones start healing.
    pub passive_heal_delay: f64,
    pub heal_amount_per_second: f32,
}

impl Default for RegenSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            limb_regrow_delay: 5.0,
            passive_heal_delay: 3.0,
            heal_amount_per_second: 10.0,
        }
    }
}
