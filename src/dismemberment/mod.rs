//! Per-bone damage tracking for one skeletal actor.
//!
//! The component owns three pieces of state:
//! - the bone registry (`bones`): authored config plus live health
//! - the broken set (`broken`): bone -> world time it broke
//! - the scheduler flag (`tick_enabled`): whether [`Dismemberment::tick`] still has work
//!
//! Operations never fail. Unknown bones, empty names and redundant
//! transitions are silent no-ops; the only observable signal is the absence of
//! the matching [`BoneEvent`].

mod damage;
mod regen;
mod visuals;

use std::collections::BTreeMap;
use std::sync::Arc;

use bevy_ecs::component::Component;

use crate::capability::{EffectPlayer, SkeletalMesh, TimeSource};
use crate::model::{
    BoneEvent, BoneId, BoneListeners, BoneState, DismembermentConfig, ListenerId, RegenSettings,
};

#[derive(Component)]
pub struct Dismemberment {
    bones: BTreeMap<BoneId, BoneState>,
    redirects: BTreeMap<BoneId, BoneId>,
    broken: BTreeMap<BoneId, f64>,
    regen: RegenSettings,
    last_damage_time: f64,
    tick_enabled: bool,
    clock: Option<Arc<dyn TimeSource>>,
    mesh: Option<Box<dyn SkeletalMesh>>,
    effects: Option<Box<dyn EffectPlayer>>,
    listeners: BoneListeners,
    /// Reused between ticks for staging regrowths.
    restore_scratch: Vec<BoneId>,
}

impl Dismemberment {
    /// Every bone starts at max health and the scheduler starts disabled.
    pub fn new(config: DismembermentConfig) -> Self {
        let DismembermentConfig {
            bones,
            redirects,
            regen,
        } = config;

        Self {
            bones: bones
                .into_iter()
                .map(|(bone, config)| (bone, BoneState::new(config)))
                .collect(),
            redirects,
            broken: BTreeMap::new(),
            regen,
            last_damage_time: 0.0,
            tick_enabled: false,
            clock: None,
            mesh: None,
            effects: None,
            listeners: BoneListeners::new(),
            restore_scratch: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.attach_clock(clock);
        self
    }

    pub fn with_mesh(mut self, mesh: impl SkeletalMesh + 'static) -> Self {
        self.attach_mesh(mesh);
        self
    }

    pub fn with_effects(mut self, effects: impl EffectPlayer + 'static) -> Self {
        self.attach_effects(effects);
        self
    }

    pub fn attach_clock(&mut self, clock: Arc<dyn TimeSource>) {
        self.clock = Some(clock);
    }

    pub fn attach_mesh(&mut self, mesh: impl SkeletalMesh + 'static) {
        self.mesh = Some(Box::new(mesh));
    }

    pub fn attach_effects(&mut self, effects: impl EffectPlayer + 'static) {
        self.effects = Some(Box::new(effects));
    }

    pub fn detach_mesh(&mut self) -> Option<Box<dyn SkeletalMesh>> {
        self.mesh.take()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BoneEvent) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Map a raw hit bone to the bone that tracks its damage.
    pub fn resolve_bone<'a>(&'a self, hit_bone: &'a str) -> &'a str {
        match self.redirects.get(hit_bone) {
            Some(target) => target.as_str(),
            None => hit_bone,
        }
    }

    pub fn is_broken(&self, bone: &str) -> bool {
        self.broken.contains_key(bone)
    }

    /// Current health, or `0.0` for bones that are not configured.
    pub fn health(&self, bone: &str) -> f32 {
        self.bones
            .get(bone)
            .map(|state| state.current_health)
            .unwrap_or(0.0)
    }

    pub fn max_health(&self, bone: &str) -> Option<f32> {
        self.bones.get(bone).map(|state| state.config.max_health)
    }

    pub fn bone(&self, bone: &str) -> Option<&BoneState> {
        self.bones.get(bone)
    }

    pub fn bones(&self) -> impl Iterator<Item = (&BoneId, &BoneState)> {
        self.bones.iter()
    }

    /// Broken bones with the world time each one broke, ordered by name.
    pub fn broken_bones(&self) -> impl Iterator<Item = (&BoneId, f64)> {
        self.broken.iter().map(|(bone, &broken_at)| (bone, broken_at))
    }

    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }

    /// Whether the frame driver should call [`Dismemberment::tick`] this frame.
    pub fn is_tick_enabled(&self) -> bool {
        self.tick_enabled
    }

    pub fn set_tick_enabled(&mut self, enabled: bool) {
        self.tick_enabled = enabled;
    }

    pub fn regen(&self) -> &RegenSettings {
        &self.regen
    }

    /// Re-arms the scheduler when enabling with bones still broken.
    pub fn set_regeneration_enabled(&mut self, enabled: bool) {
        self.regen.enabled = enabled;
        if enabled && !self.broken.is_empty() {
            self.tick_enabled = true;
        }
    }

    /// Returns `false` if the bone is not configured. Takes effect on the next tick.
    pub fn set_can_regenerate(&mut self, bone: &str, can_regenerate: bool) -> bool {
        let Some(state) = self.bones.get_mut(bone) else {
            return false;
        };
        state.config.can_regenerate = can_regenerate;
        if can_regenerate && self.broken.contains_key(bone) {
            self.tick_enabled = true;
        }
        true
    }

    pub fn last_damage_time(&self) -> f64 {
        self.last_damage_time
    }

    fn now(&self) -> Option<f64> {
        self.clock.as_ref().map(|clock| clock.now_seconds())
    }
}

impl std::fmt::Debug for Dismemberment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dismemberment")
            .field("bones", &self.bones)
            .field("redirects", &self.redirects)
            .field("broken", &self.broken)
            .field("regen", &self.regen)
            .field("last_damage_time", &self.last_damage_time)
            .field("tick_enabled", &self.tick_enabled)
            .field("has_clock", &self.clock.is_some())
            .field("has_mesh", &self.mesh.is_some())
            .field("has_effects", &self.effects.is_some())
            .field("listeners", &self.listeners)
            .finish()
    }
}
