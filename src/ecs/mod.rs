pub mod app;
pub mod clock;
pub mod components;
pub mod events;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::build_app;
pub use clock::{SharedClock, WorldClock};
pub use components::BoneEventOutbox;
pub use events::{ActorBoneEvent, BoneCommand, BoneCommandKind};
pub use schedule::{FramePhase, FrameTick, configure_frame_schedule};
pub use spawn::spawn_actor;
pub use systems::DismembermentPlugin;
