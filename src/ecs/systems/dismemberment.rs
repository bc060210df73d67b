//! Frame systems driving every actor's `Dismemberment` component.
//!
//! Update phase, chained:
//! 1. `apply_bone_commands` — hits, forced breaks and restores from `BoneCommand`
//! 2. `tick_dismemberment` — regrowth and passive healing for actors whose scheduler is armed
//!
//! PostUpdate phase:
//! 3. `publish_bone_events` — outbox contents → `ActorBoneEvent`

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::dismemberment::Dismemberment;
use crate::ecs::clock::WorldClock;
use crate::ecs::components::BoneEventOutbox;
use crate::ecs::events::{ActorBoneEvent, BoneCommand, BoneCommandKind};
use crate::ecs::schedule::{FramePhase, FrameTick};

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct DismembermentPlugin;

impl Plugin for DismembermentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FrameTick,
            (apply_bone_commands, tick_dismemberment)
                .chain()
                .in_set(FramePhase::Update),
        );
        app.add_systems(FrameTick, publish_bone_events.in_set(FramePhase::PostUpdate));
    }
}

// ---------------------------------------------------------------------------
// System 1: Route commands to actors
// ---------------------------------------------------------------------------

fn apply_bone_commands(
    mut commands: MessageReader<BoneCommand>,
    mut actors: Query<&mut Dismemberment>,
) {
    for command in commands.read() {
        let Ok(mut actor) = actors.get_mut(command.actor) else {
            tracing::trace!(actor = ?command.actor, "bone command for actor without dismemberment");
            continue;
        };
        let bone = command.bone.as_str();
        match command.kind {
            BoneCommandKind::Hit { amount } => actor.apply_damage(bone, amount),
            BoneCommandKind::Break => actor.break_bone(bone),
            BoneCommandKind::Restore => actor.restore_bone(bone),
        }
    }
}

// ---------------------------------------------------------------------------
// System 2: Scheduler tick
// ---------------------------------------------------------------------------

fn tick_dismemberment(clock: Res<WorldClock>, mut actors: Query<&mut Dismemberment>) {
    for mut actor in actors.iter_mut() {
        if actor.is_tick_enabled() {
            actor.tick(clock.delta_seconds);
        }
    }
}

// ---------------------------------------------------------------------------
// System 3: Publish notifications
// ---------------------------------------------------------------------------

fn publish_bone_events(
    outboxes: Query<(Entity, &BoneEventOutbox)>,
    mut events: MessageWriter<ActorBoneEvent>,
) {
    for (actor, outbox) in outboxes.iter() {
        for event in outbox.drain() {
            events.write(ActorBoneEvent { actor, event });
        }
    }
}
