use tracing::debug;

use super::Dismemberment;

impl Dismemberment {
    /// Advance regrowth and passive healing by one frame.
    ///
    /// The frame driver only calls this while [`Dismemberment::is_tick_enabled`]
    /// holds. The tick clears the flag itself once it finds nothing broken and
    /// every bone already at max health; a wounded bone still inside its quiet
    /// period keeps the flag set. Without a clock the tick does nothing.
    ///
    /// Regrowth is gated by the global regen flag. Passive healing is not.
    pub fn tick(&mut self, delta_seconds: f32) {
        let Some(now) = self.now() else {
            return;
        };
        let mut needs_update = false;

        let mut to_restore = std::mem::take(&mut self.restore_scratch);
        to_restore.clear();
        if self.regen.enabled {
            for (bone, &broken_at) in &self.broken {
                let Some(state) = self.bones.get(bone) else {
                    continue;
                };
                if state.config.can_regenerate && now - broken_at >= self.regen.limb_regrow_delay {
                    to_restore.push(bone.clone());
                }
            }
        }
        for bone in &to_restore {
            self.restore_bone(bone.as_str());
        }
        self.restore_scratch = to_restore;

        if !self.broken.is_empty() {
            needs_update = true;
        }

        // Wounded bones keep the scheduler armed through the quiet period
        let heal_due = now - self.last_damage_time >= self.regen.passive_heal_delay;
        let heal = self.regen.heal_amount_per_second * delta_seconds;
        for (bone, state) in &mut self.bones {
            if state.is_full() || self.broken.contains_key(bone) {
                continue;
            }
            needs_update = true;
            if heal_due {
                state.heal(heal);
            }
        }

        if !needs_update && self.broken.is_empty() {
            self.tick_enabled = false;
            debug!("all bones healthy, scheduler idle");
        }
    }
}
