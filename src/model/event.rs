use serde::{Deserialize, Serialize};

use super::bone::BoneId;

/// Notification raised by a dismemberment component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoneEvent {
    /// Raised on every damage application, including the one that breaks the bone.
    Damaged {
        bone: BoneId,
        remaining_health: f32,
        damage: f32,
    },
    Broken { bone: BoneId },
    Restored { bone: BoneId },
}

impl BoneEvent {
    pub fn bone(&self) -> &BoneId {
        match self {
            BoneEvent::Damaged { bone, .. }
            | BoneEvent::Broken { bone }
            | BoneEvent::Restored { bone } => bone,
        }
    }
}

/// Handle returned by [`BoneListeners::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&BoneEvent) + Send + Sync>;

/// Registered bone event callbacks, invoked synchronously in registration order.
#[derive(Default)]
pub struct BoneListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl BoneListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BoneEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if no listener had this id.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn broadcast(&mut self, event: &BoneEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for BoneListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoneListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
