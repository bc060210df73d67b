mod common;

use common::{Rig, humanoid_config};
use glam::Vec3;
use limb_damage::model::{BoneEvent, BoneId};
use limb_damage::testutil::{EffectCall, RecordingEffects};
use limb_damage::{BoneConfig, Dismemberment, DismembermentConfig, SoundRef};

fn damaged(bone: &str, remaining_health: f32, damage: f32) -> BoneEvent {
    BoneEvent::Damaged {
        bone: BoneId::from(bone),
        remaining_health,
        damage,
    }
}

fn broken(bone: &str) -> BoneEvent {
    BoneEvent::Broken {
        bone: BoneId::from(bone),
    }
}

fn restored(bone: &str) -> BoneEvent {
    BoneEvent::Restored {
        bone: BoneId::from(bone),
    }
}

// ---------------------------------------------------------------------------
// Damage and redirects
// ---------------------------------------------------------------------------

#[test]
fn spine_hit_applies_multiplier() {
    let config = DismembermentConfig::new().with_bone(
        "spine_02",
        BoneConfig::default().with_damage_multiplier(2.0),
    );
    let mut rig = Rig::new(config);

    rig.component.apply_damage("spine_02", 30.0);

    assert_eq!(rig.component.health("spine_02"), 40.0);
    assert!(!rig.component.is_broken("spine_02"));
    assert_eq!(rig.events(), vec![damaged("spine_02", 40.0, 60.0)]);
}

#[test]
fn spine_breaks_exactly_once_and_hides_hierarchy() {
    let config = DismembermentConfig::new().with_bone(
        "spine_02",
        BoneConfig::default()
            .with_damage_multiplier(2.0)
            .with_dependents(["spine_03", "neck_01", "head"]),
    );
    let mut rig = Rig::new(config);

    for _ in 0..5 {
        rig.component.apply_damage("spine_02", 30.0);
    }

    let breaks = rig
        .events()
        .iter()
        .filter(|event| matches!(event, BoneEvent::Broken { .. }))
        .count();
    assert_eq!(breaks, 1);
    assert!(rig.component.is_broken("spine_02"));
    assert_eq!(rig.component.health("spine_02"), 0.0);
    for bone in ["spine_02", "spine_03", "neck_01", "head"] {
        assert!(!rig.skeleton.is_visible(bone), "{bone} should be hidden");
    }
    assert!(rig.skeleton.is_visible("pelvis"));
}

#[test]
fn redirected_hit_damages_tracked_bone() {
    let mut rig = Rig::humanoid();

    rig.component.apply_damage("neck_01", 20.0);
    rig.component.apply_damage("spine_03", 40.0);

    assert_eq!(rig.component.health("head"), 50.0);
    assert_eq!(rig.component.health("spine_02"), 120.0);
    assert!(rig.component.bone("neck_01").is_none());
    assert_eq!(
        rig.events(),
        vec![damaged("head", 50.0, 30.0), damaged("spine_02", 120.0, 30.0)]
    );
}

#[test]
fn lethal_hand_hit_severs_whole_arm() {
    let mut rig = Rig::humanoid();

    rig.component.apply_damage("hand_l", 60.0);

    assert!(rig.component.is_broken("upperarm_l"));
    assert_eq!(
        rig.events(),
        vec![damaged("upperarm_l", 0.0, 60.0), broken("upperarm_l")]
    );
    let mut hidden = rig.skeleton.hidden_bones();
    hidden.sort();
    assert_eq!(hidden, vec!["hand_l", "lowerarm_l", "upperarm_l"]);

    let arm = Vec3::new(-0.3, 1.45, 0.0);
    let calls = rig.effects.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        EffectCall::Sound {
            sound: SoundRef::from("sfx/dismember/bone_snap"),
            position: arm,
        }
    );
    assert!(matches!(&calls[1], EffectCall::Particles { position, .. } if *position == arm));
}

#[test]
fn overkill_is_reported_in_full_and_health_floors_at_zero() {
    let mut rig = Rig::humanoid();

    rig.component.apply_damage("head", 1000.0);

    assert_eq!(rig.component.health("head"), 0.0);
    assert_eq!(rig.events()[0], damaged("head", 0.0, 1500.0));
}

#[test]
fn hits_on_broken_bone_are_ignored() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("thigh_r", 90.0);
    rig.take_events();

    rig.component.apply_damage("foot_r", 10.0);
    rig.component.apply_damage("thigh_r", 10.0);

    assert!(rig.events().is_empty());
    assert_eq!(rig.component.health("thigh_r"), 0.0);
}

#[test]
fn thigh_without_sound_still_spawns_particles() {
    let mut rig = Rig::humanoid();

    rig.component.apply_damage("calf_l", 200.0);

    let calls = rig.effects.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], EffectCall::Particles { .. }));
}

#[test]
fn unknown_empty_and_non_finite_hits_are_silent() {
    let mut rig = Rig::humanoid();

    rig.component.apply_damage("tail", 50.0);
    rig.component.apply_damage("", 50.0);
    rig.component.apply_damage("head", f32::NAN);
    rig.component.apply_damage("head", f32::INFINITY);

    assert!(rig.events().is_empty());
    assert_eq!(rig.component.health("head"), 80.0);
    assert!(!rig.component.is_tick_enabled());
}

// ---------------------------------------------------------------------------
// Forced break and restore
// ---------------------------------------------------------------------------

#[test]
fn break_twice_notifies_once() {
    let mut rig = Rig::humanoid();

    rig.component.break_bone("upperarm_r");
    rig.component.break_bone("upperarm_r");

    assert_eq!(rig.events(), vec![broken("upperarm_r")]);
    assert_eq!(rig.component.broken_count(), 1);
    assert_eq!(rig.effects.calls().len(), 2);
}

#[test]
fn forced_break_keeps_health_until_restore() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("upperarm_r", 15.0);

    rig.component.break_bone("upperarm_r");
    assert_eq!(rig.component.health("upperarm_r"), 45.0);
    assert!(!rig.skeleton.is_visible("hand_r"));

    rig.component.restore_bone("upperarm_r");
    assert_eq!(rig.component.health("upperarm_r"), 60.0);
    assert!(rig.skeleton.is_visible("upperarm_r"));
    assert!(rig.skeleton.is_visible("hand_r"));
    assert_eq!(rig.events().last(), Some(&restored("upperarm_r")));
}

#[test]
fn restoring_healthy_bone_does_nothing() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("head", 10.0);
    rig.take_events();

    rig.component.restore_bone("head");
    rig.component.restore_bone("tail");

    assert!(rig.events().is_empty());
    assert_eq!(rig.component.health("head"), 65.0);
}

#[test]
fn unsubscribed_listener_stops_hearing() {
    let mut rig = Rig::humanoid();
    let extra = std::sync::Arc::new(std::sync::Mutex::new(0));
    let counter = extra.clone();
    let id = rig
        .component
        .subscribe(move |_| *counter.lock().unwrap() += 1);

    rig.component.apply_damage("head", 1.0);
    assert!(rig.component.unsubscribe(id));
    assert!(!rig.component.unsubscribe(id));
    rig.component.apply_damage("head", 1.0);

    assert_eq!(*extra.lock().unwrap(), 1);
    assert_eq!(rig.events().len(), 2);
}

#[test]
fn component_without_collaborators_still_tracks_state() {
    let mut component = Dismemberment::new(humanoid_config());

    component.apply_damage("hand_l", 60.0);
    assert!(component.is_broken("upperarm_l"));
    // No clock: break time falls back to zero
    assert_eq!(
        component.broken_bones().collect::<Vec<_>>(),
        vec![(&BoneId::from("upperarm_l"), 0.0)]
    );

    component.restore_bone("upperarm_l");
    assert_eq!(component.health("upperarm_l"), 60.0);
}

#[test]
fn effects_without_mesh_are_skipped() {
    let effects = RecordingEffects::new();
    let mut component = Dismemberment::new(humanoid_config()).with_effects(effects.clone());

    component.break_bone("head");

    assert!(component.is_broken("head"));
    assert!(effects.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Regrowth and passive healing
// ---------------------------------------------------------------------------

#[test]
fn arm_regrows_five_seconds_after_break() {
    let mut rig = Rig::humanoid();
    rig.clock.set(10.0);
    rig.component.apply_damage("lowerarm_l", 100.0);

    rig.tick_at(14.9, 0.1);
    assert!(rig.component.is_broken("upperarm_l"));
    assert!(!rig.skeleton.is_visible("hand_l"));

    rig.tick_at(15.0, 0.1);
    assert!(!rig.component.is_broken("upperarm_l"));
    assert_eq!(rig.component.health("upperarm_l"), 60.0);
    assert!(rig.skeleton.hidden_bones().is_empty());
    assert_eq!(rig.events().last(), Some(&restored("upperarm_l")));
}

#[test]
fn head_never_regrows() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("head", 100.0);

    rig.run_until(600.0, 1.0);

    assert!(rig.component.is_broken("head"));
    assert!(rig.component.is_tick_enabled());
    assert!(
        !rig.events()
            .iter()
            .any(|event| matches!(event, BoneEvent::Restored { .. }))
    );
}

#[test]
fn legs_regrow_together_in_name_order() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("foot_r", 100.0);
    rig.component.apply_damage("foot_l", 100.0);
    rig.take_events();

    rig.tick_at(5.0, 0.5);

    assert_eq!(rig.events(), vec![restored("thigh_l"), restored("thigh_r")]);
}

#[test]
fn passive_heal_climbs_to_max_then_stops() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("spine_02", 100.0);
    assert_eq!(rig.component.health("spine_02"), 75.0);

    rig.run_until(2.0, 1.0);
    assert_eq!(rig.component.health("spine_02"), 75.0);

    rig.tick_at(3.0, 1.0);
    assert_eq!(rig.component.health("spine_02"), 85.0);

    rig.run_until(9.0, 1.0);
    assert_eq!(rig.component.health("spine_02"), 145.0);

    rig.tick_at(10.0, 1.0);
    assert_eq!(rig.component.health("spine_02"), 150.0);
    assert!(rig.component.is_tick_enabled());

    rig.tick_at(11.0, 1.0);
    assert_eq!(rig.component.health("spine_02"), 150.0);
    assert!(!rig.component.is_tick_enabled());
}

#[test]
fn wound_heals_fully_under_frame_driver() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("head", 50.0);
    assert_eq!(rig.component.health("head"), 5.0);

    rig.run_until(10.0, 0.5);

    assert_eq!(rig.component.health("head"), 80.0);
}

#[test]
fn fresh_damage_restarts_quiet_period() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("head", 20.0);

    rig.clock.set(2.0);
    rig.component.apply_damage("head", 10.0);
    assert_eq!(rig.component.health("head"), 35.0);

    rig.run_until(4.0, 1.0);
    assert_eq!(rig.component.health("head"), 35.0);

    rig.tick_at(5.0, 1.0);
    assert_eq!(rig.component.health("head"), 45.0);
}

#[test]
fn disabling_regeneration_freezes_limbs_but_not_healing() {
    let mut rig = Rig::humanoid();
    rig.component.set_regeneration_enabled(false);
    rig.component.apply_damage("hand_r", 100.0);
    rig.component.apply_damage("head", 40.0);

    rig.run_until(20.0, 1.0);
    assert!(rig.component.is_broken("upperarm_r"));
    assert_eq!(rig.component.health("head"), 80.0);
    assert!(rig.component.is_tick_enabled());

    rig.component.set_regeneration_enabled(true);
    rig.tick_at(21.0, 1.0);
    assert!(!rig.component.is_broken("upperarm_r"));
}

#[test]
fn granting_regeneration_at_runtime_regrows_old_break() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("head", 100.0);
    rig.run_until(30.0, 1.0);
    assert!(rig.component.is_broken("head"));

    assert!(rig.component.set_can_regenerate("head", true));
    rig.tick_at(31.0, 1.0);

    assert!(!rig.component.is_broken("head"));
    assert_eq!(rig.component.health("head"), 80.0);
}

#[test]
fn rearmed_scheduler_after_idle() {
    let mut rig = Rig::humanoid();
    rig.component.apply_damage("head", 1.0);
    rig.run_until(10.0, 1.0);
    assert!(!rig.component.is_tick_enabled());

    rig.component.apply_damage("head", 1.0);
    assert!(rig.component.is_tick_enabled());
}
