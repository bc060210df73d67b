#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use glam::Vec3;
use limb_damage::model::BoneEvent;
use limb_damage::testutil::{ManualClock, RecordingEffects, SharedSkeleton};
use limb_damage::{Dismemberment, DismembermentConfig, Skeleton, TimeSource};

pub const HUMANOID_JSON: &str = include_str!("../../demos/humanoid.json");

pub fn humanoid_config() -> DismembermentConfig {
    DismembermentConfig::from_json(HUMANOID_JSON).unwrap()
}

/// Every bone the humanoid config mentions, plus a couple it never mentions.
pub fn humanoid_skeleton() -> Skeleton {
    [
        ("head", Vec3::new(0.0, 1.7, 0.0)),
        ("neck_01", Vec3::new(0.0, 1.6, 0.0)),
        ("spine_02", Vec3::new(0.0, 1.3, 0.0)),
        ("spine_03", Vec3::new(0.0, 1.4, 0.0)),
        ("pelvis", Vec3::new(0.0, 1.0, 0.0)),
        ("upperarm_l", Vec3::new(-0.3, 1.45, 0.0)),
        ("lowerarm_l", Vec3::new(-0.55, 1.45, 0.0)),
        ("hand_l", Vec3::new(-0.8, 1.45, 0.0)),
        ("upperarm_r", Vec3::new(0.3, 1.45, 0.0)),
        ("lowerarm_r", Vec3::new(0.55, 1.45, 0.0)),
        ("hand_r", Vec3::new(0.8, 1.45, 0.0)),
        ("thigh_l", Vec3::new(-0.15, 0.9, 0.0)),
        ("calf_l", Vec3::new(-0.15, 0.5, 0.0)),
        ("foot_l", Vec3::new(-0.15, 0.05, 0.1)),
        ("thigh_r", Vec3::new(0.15, 0.9, 0.0)),
        ("calf_r", Vec3::new(0.15, 0.5, 0.0)),
        ("foot_r", Vec3::new(0.15, 0.05, 0.1)),
    ]
    .into_iter()
    .fold(Skeleton::new(), |skeleton, (bone, position)| {
        skeleton.with_bone(bone, position)
    })
}

/// A component wired to inspectable collaborators.
pub struct Rig {
    pub component: Dismemberment,
    pub clock: Arc<ManualClock>,
    pub skeleton: SharedSkeleton,
    pub effects: RecordingEffects,
    pub events: Arc<Mutex<Vec<BoneEvent>>>,
}

impl Rig {
    pub fn new(config: DismembermentConfig) -> Self {
        Self::with_skeleton(config, humanoid_skeleton())
    }

    pub fn with_skeleton(config: DismembermentConfig, skeleton: Skeleton) -> Self {
        let clock = Arc::new(ManualClock::at(0.0));
        let skeleton = SharedSkeleton::new(skeleton);
        let effects = RecordingEffects::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut component = Dismemberment::new(config)
            .with_clock(clock.clone())
            .with_mesh(skeleton.clone())
            .with_effects(effects.clone());
        let sink = events.clone();
        component.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        Self {
            component,
            clock,
            skeleton,
            effects,
            events,
        }
    }

    pub fn humanoid() -> Self {
        Self::new(humanoid_config())
    }

    /// Set the clock to `t` and run one tick of `delta` seconds.
    pub fn tick_at(&mut self, t: f64, delta: f32) {
        self.clock.set(t);
        if self.component.is_tick_enabled() {
            self.component.tick(delta);
        }
    }

    /// Tick from the current clock time until `until`, `delta` seconds per frame.
    pub fn run_until(&mut self, until: f64, delta: f32) {
        let mut t = self.clock.now_seconds();
        while t < until {
            t = (t + f64::from(delta)).min(until);
            self.tick_at(t, delta);
        }
    }

    pub fn events(&self) -> Vec<BoneEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn take_events(&self) -> Vec<BoneEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}
