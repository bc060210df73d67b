use std::sync::Arc;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::clock::WorldClock;
use super::components::BoneEventOutbox;
use crate::dismemberment::Dismemberment;

/// Spawn an actor driven by the host: the component reads time from the
/// world clock and its notifications are republished as `ActorBoneEvent`s.
///
/// Attach the skeleton and effect player to `dismemberment` before spawning.
pub fn spawn_actor(world: &mut World, mut dismemberment: Dismemberment) -> Entity {
    let clock = world.resource::<WorldClock>().handle();
    dismemberment.attach_clock(Arc::new(clock));

    let outbox = BoneEventOutbox::default();
    let listener_side = outbox.clone();
    dismemberment.subscribe(move |event| listener_side.push(event.clone()));

    world.spawn((dismemberment, outbox)).id()
}
