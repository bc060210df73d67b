use bevy_app::App;
use bevy_ecs::message::{MessageReader, Messages};
use bevy_ecs::resource::Resource;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::ResMut;

use crate::ecs::events::{ActorBoneEvent, BoneCommand};
use crate::ecs::schedule::{FramePhase, FrameTick};

/// Every `ActorBoneEvent` published since the log was installed.
#[derive(Resource, Debug, Default)]
pub struct BoneEventLog(pub Vec<ActorBoneEvent>);

fn collect_bone_events(mut events: MessageReader<ActorBoneEvent>, mut log: ResMut<BoneEventLog>) {
    log.0.extend(events.read().cloned());
}

/// Install a `BoneEventLog` that collects published bone events each frame.
pub fn record_bone_events(app: &mut App) {
    app.init_resource::<BoneEventLog>();
    app.add_systems(FrameTick, collect_bone_events.in_set(FramePhase::Last));
}

/// Queue a command for the next frame.
pub fn send_command(app: &mut App, command: BoneCommand) {
    app.world_mut()
        .resource_mut::<Messages<BoneCommand>>()
        .write(command);
}

/// Run `n` frames.
pub fn tick_frames(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(FrameTick);
    }
}

/// Run enough frames to cover `seconds` at the clock's fixed delta.
pub fn tick_seconds(app: &mut App, seconds: f32) {
    let delta = app
        .world()
        .resource::<crate::ecs::clock::WorldClock>()
        .delta_seconds;
    let frames = (seconds / delta).ceil() as u32;
    tick_frames(app, frames);
}
