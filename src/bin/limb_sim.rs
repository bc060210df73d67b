//! Headless dismemberment run: one actor, random hits, logged transitions.
//!
//! ```text
//! RUST_LOG=info,limb_damage=debug cargo run --bin limb_sim -- --seconds 20
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use bevy_ecs::message::{MessageReader, Messages};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::Res;
use clap::Parser;
use glam::{Quat, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use limb_damage::ecs::{
    ActorBoneEvent, BoneCommand, DismembermentPlugin, FramePhase, FrameTick, WorldClock,
    build_app, spawn_actor,
};
use limb_damage::model::BoneEvent;
use limb_damage::{
    ConfigError, Dismemberment, DismembermentConfig, EffectPlayer, ParticleSystemRef, Skeleton,
    SoundRef,
};

const DEFAULT_CONFIG: &str = include_str!("../../demos/humanoid.json");

#[derive(Parser, Debug)]
#[command(about = "Feed random hits to a dismemberment actor")]
struct Args {
    /// JSON dismemberment config. Uses the bundled humanoid when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Simulated seconds to run.
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,
    #[arg(long, default_value_t = 30.0)]
    fps: f32,
    /// Average hits per simulated second.
    #[arg(long, default_value_t = 2.0)]
    hit_rate: f32,
    #[arg(long, default_value_t = 35.0)]
    max_damage: f32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Effect player that only logs.
struct LoggingEffects;

impl EffectPlayer for LoggingEffects {
    fn play_sound(&mut self, sound: &SoundRef, position: Vec3) {
        info!(%sound, ?position, "play sound");
    }

    fn spawn_particles(&mut self, particles: &ParticleSystemRef, position: Vec3, _rotation: Quat) {
        info!(%particles, ?position, "spawn particles");
    }
}

fn log_bone_events(clock: Res<WorldClock>, mut events: MessageReader<ActorBoneEvent>) {
    let t = clock.elapsed_seconds();
    for ActorBoneEvent { actor, event } in events.read() {
        match event {
            BoneEvent::Damaged {
                bone,
                remaining_health,
                damage,
            } => info!(t, ?actor, %bone, damage, remaining_health, "damaged"),
            BoneEvent::Broken { bone } => info!(t, ?actor, %bone, "BROKEN"),
            BoneEvent::Restored { bone } => info!(t, ?actor, %bone, "restored"),
        }
    }
}

/// Lay every bone the config mentions out along a vertical line.
fn skeleton_for(config: &DismembermentConfig) -> Skeleton {
    let names: BTreeSet<&str> = config
        .bones
        .iter()
        .flat_map(|(bone, bone_config)| {
            std::iter::once(bone.as_str())
                .chain(bone_config.dependent_bones.iter().map(|b| b.as_str()))
        })
        .chain(config.redirects.keys().map(|b| b.as_str()))
        .collect();

    names
        .into_iter()
        .enumerate()
        .fold(Skeleton::new(), |skeleton, (i, name)| {
            skeleton.with_bone(name, Vec3::new(0.0, i as f32 * 0.1, 0.0))
        })
}

fn main() -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => DismembermentConfig::load(path)?,
        None => DismembermentConfig::from_json(DEFAULT_CONFIG)?,
    };

    let hit_targets: Vec<String> = config
        .bones
        .keys()
        .chain(config.redirects.keys())
        .map(|bone| bone.to_string())
        .collect();

    let delta = 1.0 / args.fps.max(1.0);
    let mut app = build_app(delta);
    app.add_plugins(DismembermentPlugin);
    app.add_systems(FrameTick, log_bone_events.in_set(FramePhase::Last));

    let component = Dismemberment::new(config.clone())
        .with_mesh(skeleton_for(&config))
        .with_effects(LoggingEffects);
    let actor = spawn_actor(app.world_mut(), component);

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let hit_chance = (args.hit_rate * delta).clamp(0.0, 1.0);
    let frames = (args.seconds / delta).ceil() as u32;
    info!(frames, delta, bones = config.bones.len(), "starting run");

    for _ in 0..frames {
        if !hit_targets.is_empty() && rng.random::<f32>() < hit_chance {
            let bone = hit_targets[rng.random_range(0..hit_targets.len())].as_str();
            let amount = rng.random_range(1.0..=args.max_damage.max(1.0));
            app.world_mut()
                .resource_mut::<Messages<BoneCommand>>()
                .write(BoneCommand::hit(actor, bone, amount));
        }
        app.world_mut().run_schedule(FrameTick);
    }

    let Some(component) = app.world().get::<Dismemberment>(actor) else {
        return Ok(());
    };
    for (bone, state) in component.bones() {
        info!(
            %bone,
            health = state.current_health,
            max = state.config.max_health,
            broken = component.is_broken(bone.as_str()),
            "final state"
        );
    }

    Ok(())
}
