use tracing::{debug, trace};

use super::Dismemberment;
use super::visuals::{toggle_hierarchy, trigger_cosmetics};
use crate::model::{BoneEvent, BoneId};

impl Dismemberment {
    /// Apply a hit to `hit_bone`, redirected to its tracked bone.
    ///
    /// Re-arms the scheduler even when the bone survives, so passive healing
    /// waits out the quiet period from this hit.
    pub fn apply_damage(&mut self, hit_bone: &str, amount: f32) {
        if hit_bone.is_empty() {
            return;
        }
        if !amount.is_finite() {
            trace!(hit_bone, amount, "ignoring non-finite damage");
            return;
        }

        let target = BoneId::from(self.resolve_bone(hit_bone));
        if self.broken.contains_key(&target) {
            trace!(bone = %target, "bone already broken, damage ignored");
            return;
        }

        let now = self.now();
        let Some(state) = self.bones.get_mut(&target) else {
            trace!(bone = %target, "bone not configured, damage ignored");
            return;
        };

        if let Some(now) = now {
            self.last_damage_time = now;
        }
        self.tick_enabled = true;

        let damage = amount * state.config.damage_multiplier;
        let remaining_health = state.take_damage(damage);
        let depleted = state.is_depleted();
        debug!(bone = %target, damage, remaining_health, "bone damaged");

        self.listeners.broadcast(&BoneEvent::Damaged {
            bone: target.clone(),
            remaining_health,
            damage,
        });

        if depleted {
            self.break_bone(target.as_str());
        }
    }

    /// Mark `bone` broken: hide it with its dependents, play its effects and
    /// notify listeners. Health is left untouched, so a forced break of a
    /// healthy bone keeps its health until restored.
    pub fn break_bone(&mut self, bone: &str) {
        if self.broken.contains_key(bone) {
            return;
        }
        let now = self.now();
        let Some((id, state)) = self.bones.get_key_value(bone) else {
            trace!(bone, "bone not configured, break ignored");
            return;
        };
        let id = id.clone();

        self.broken.insert(id.clone(), now.unwrap_or(0.0));
        if self.regen.enabled && state.config.can_regenerate {
            self.tick_enabled = true;
        }

        trigger_cosmetics(
            self.mesh.as_deref(),
            self.effects.as_deref_mut(),
            &id,
            &state.config,
        );
        toggle_hierarchy(
            self.mesh.as_deref_mut(),
            &id,
            &state.config.dependent_bones,
            true,
        );
        debug!(bone = %id, "bone broken");

        self.listeners.broadcast(&BoneEvent::Broken { bone: id });
    }

    /// Bring a broken bone back at full health and show it again.
    /// Does nothing unless the bone is currently broken.
    pub fn restore_bone(&mut self, bone: &str) {
        let Some(state) = self.bones.get_mut(bone) else {
            return;
        };
        let Some((id, _)) = self.broken.remove_entry(bone) else {
            return;
        };

        state.reset();
        toggle_hierarchy(
            self.mesh.as_deref_mut(),
            &id,
            &state.config.dependent_bones,
            false,
        );
        debug!(bone = %id, "bone restored");

        self.listeners.broadcast(&BoneEvent::Restored { bone: id });
    }
}
