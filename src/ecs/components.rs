use std::sync::{Arc, Mutex, PoisonError};

use bevy_ecs::component::Component;

use crate::model::BoneEvent;

/// Per-actor buffer filled by the component's listener and drained each frame
/// by `publish_bone_events`.
#[derive(Component, Clone, Debug, Default)]
pub struct BoneEventOutbox(Arc<Mutex<Vec<BoneEvent>>>);

impl BoneEventOutbox {
    pub fn push(&self, event: BoneEvent) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    pub fn drain(&self) -> Vec<BoneEvent> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
