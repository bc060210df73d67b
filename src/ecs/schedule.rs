use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one frame of the host world.
/// Run manually each frame via `app.world_mut().run_schedule(FrameTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameTick;

/// Ordered phases within each frame.
///
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Last.
/// Message buffers rotate in `PreUpdate`; the clock advances in `Last`, so
/// every other system sees the frame's time before it moves.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FramePhase {
    PreUpdate,
    Update,
    PostUpdate,
    Last,
}

/// Build a configured `FrameTick` schedule with phase ordering.
pub fn configure_frame_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(FrameTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            FramePhase::PreUpdate,
            FramePhase::Update,
            FramePhase::PostUpdate,
            FramePhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_clock.in_set(FramePhase::Last));
    schedule
}
