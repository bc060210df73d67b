use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{BoneEvent, BoneId};

/// Request against one actor's bones, written by hit detection or gameplay code.
#[derive(Message, Clone, Debug)]
pub struct BoneCommand {
    pub actor: Entity,
    pub bone: BoneId,
    pub kind: BoneCommandKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoneCommandKind {
    /// Raw hit; `bone` goes through the actor's redirect table.
    Hit { amount: f32 },
    Break,
    Restore,
}

impl BoneCommand {
    pub fn hit(actor: Entity, bone: impl Into<BoneId>, amount: f32) -> Self {
        Self {
            actor,
            bone: bone.into(),
            kind: BoneCommandKind::Hit { amount },
        }
    }

    pub fn break_bone(actor: Entity, bone: impl Into<BoneId>) -> Self {
        Self {
            actor,
            bone: bone.into(),
            kind: BoneCommandKind::Break,
        }
    }

    pub fn restore(actor: Entity, bone: impl Into<BoneId>) -> Self {
        Self {
            actor,
            bone: bone.into(),
            kind: BoneCommandKind::Restore,
        }
    }
}

/// A [`BoneEvent`] raised by an actor's component, republished for other systems.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct ActorBoneEvent {
    pub actor: Entity,
    pub event: BoneEvent,
}
