use tracing::trace;

use crate::capability::{EffectPlayer, SkeletalMesh};
use crate::model::{BoneConfig, BoneId};

/// Play the bone's break sound and particles at its current transform.
/// Skipped entirely when the skeleton cannot locate the bone.
pub(super) fn trigger_cosmetics(
    mesh: Option<&dyn SkeletalMesh>,
    effects: Option<&mut (dyn EffectPlayer + 'static)>,
    bone: &BoneId,
    config: &BoneConfig,
) {
    let (Some(mesh), Some(effects)) = (mesh, effects) else {
        return;
    };
    let Some(transform) = mesh.locate(bone.as_str()) else {
        trace!(%bone, "bone missing from skeleton, skipping effects");
        return;
    };

    if let Some(sound) = &config.sound {
        effects.play_sound(sound, transform.position);
    }
    if let Some(particles) = &config.particles {
        effects.spawn_particles(particles, transform.position, transform.rotation);
    }
}

/// Hide (or show) `root` and each of its dependents that exist in the skeleton.
pub(super) fn toggle_hierarchy(
    mesh: Option<&mut (dyn SkeletalMesh + 'static)>,
    root: &BoneId,
    dependents: &[BoneId],
    hide: bool,
) {
    let Some(mesh) = mesh else {
        return;
    };

    for bone in std::iter::once(root).chain(dependents) {
        if mesh.has_bone(bone.as_str()) {
            mesh.set_bone_visible(bone.as_str(), !hide);
        } else {
            trace!(%bone, "bone missing from skeleton, visibility unchanged");
        }
    }
}
