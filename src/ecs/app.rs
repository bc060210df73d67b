use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::WorldClock;
use super::events::{ActorBoneEvent, BoneCommand};
use super::schedule::{FramePhase, configure_frame_schedule};

/// Build a headless Bevy app with the world clock, the bone message types and
/// a `FrameTick` schedule. Add `DismembermentPlugin` to drive actors.
///
/// Manual frame control:
/// ```no_run
/// # use limb_damage::ecs::{build_app, FrameTick};
/// let mut app = build_app(1.0 / 60.0);
/// for _ in 0..600 {  // ten seconds
///     app.world_mut().run_schedule(FrameTick);
/// }
/// ```
pub fn build_app(delta_seconds: f32) -> App {
    let mut app = App::empty();

    app.insert_resource(WorldClock::new(delta_seconds));

    MessageRegistry::register_message::<BoneCommand>(app.world_mut());
    MessageRegistry::register_message::<ActorBoneEvent>(app.world_mut());

    // Actors are ticked in spawn order on one thread
    let mut schedule = configure_frame_schedule(ExecutorKind::SingleThreaded);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(FramePhase::PreUpdate));
    app.add_schedule(schedule);
    app
}
