use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use crate::capability::TimeSource;

/// Cloneable handle to the world's elapsed seconds. Every actor spawned into
/// the host reads time through one of these.
#[derive(Clone, Debug, Default)]
pub struct SharedClock(Arc<AtomicU64>);

impl SharedClock {
    pub fn new(seconds: f64) -> Self {
        Self(Arc::new(AtomicU64::new(seconds.to_bits())))
    }

    fn set(&self, seconds: f64) {
        self.0.store(seconds.to_bits(), Ordering::Relaxed);
    }
}

impl TimeSource for SharedClock {
    fn now_seconds(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// World clock resource tracking elapsed time and frame count.
///
/// Advances by a fixed `delta_seconds` per frame. The `advance_clock` system
/// moves the clock forward at the end of each frame (in `FramePhase::Last`).
#[derive(Resource, Debug)]
pub struct WorldClock {
    clock: SharedClock,
    pub delta_seconds: f32,
    pub frame_count: u64,
}

impl WorldClock {
    pub fn new(delta_seconds: f32) -> Self {
        Self {
            clock: SharedClock::default(),
            delta_seconds,
            frame_count: 0,
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.now_seconds()
    }

    /// Handle for components that need to query the time on their own.
    pub fn handle(&self) -> SharedClock {
        self.clock.clone()
    }

    /// Advance the clock by one frame.
    pub fn advance(&mut self) {
        self.clock
            .set(self.clock.now_seconds() + f64::from(self.delta_seconds));
        self.frame_count += 1;
    }
}

/// Bevy system that advances the world clock by one frame.
/// Registered in `FramePhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<WorldClock>) {
    clock.advance();
}
