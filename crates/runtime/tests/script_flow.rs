//! End-to-end scenarios: stage JSON through the clock into script effects.
//!
//! Step sizes are powers of two (0.25s) so every timer boundary in these
//! scenarios is exact in f32.

use harrow_content::StageLoader;
use harrow_core::{EngineConfig, FrameInput, ScriptAction, Vec2};
use harrow_runtime::{Clock, ClockConfig, Director, Step};

const DT: f32 = 0.25;

fn clock() -> Clock {
    Clock::new(ClockConfig {
        fixed_dt: DT,
        max_frame_time: 1.0,
    })
}

fn director_from(stage_json: &str) -> Director {
    let stage = StageLoader::parse(stage_json).expect("stage should parse");
    let (world, triggers) = stage.build();
    Director::new(world, triggers, EngineConfig::default())
}

#[test]
fn dialog_cutscene_runs_locked_and_releases_on_time() {
    let mut director = director_from("{}");
    let mut clock = clock();

    director.submit(
        vec![
            ScriptAction::LockInput,
            ScriptAction::ShowDialog {
                text: "The gate grinds open.".to_string(),
                seconds: 2.0,
            },
            ScriptAction::UnlockInput,
        ],
        None,
    );

    // Submission drained up to the dialog synchronously.
    assert!(director.scripts().running());
    assert!(director.world().input_locked);
    assert_eq!(director.world().dialog.text(), Some("The gate grinds open."));
    assert_eq!(director.scripts().wait_remaining(), 2.0);

    // Half a second of frames: still mid-dialog.
    clock.frame(0.5, &mut director);
    assert!(director.scripts().running());
    assert!(director.world().input_locked);
    assert!(director.world().dialog.is_open());

    // The rest of the two seconds: the wait expires, unlock_input drains,
    // and the dialog countdown clears the text the same step.
    for _ in 0..3 {
        clock.frame(0.5, &mut director);
    }
    assert!(!director.scripts().running());
    assert!(!director.world().input_locked);
    assert!(!director.world().dialog.is_open());
}

#[test]
fn walking_onto_a_plate_fires_its_script_once() {
    // Player starts at x=8 and walks right at 96 u/s, 24 units per step;
    // the plate spans [32, 48).
    let mut director = director_from(
        r#"{
            "player_spawn": "start",
            "spawn_points": {"start": [8.0, 8.0]},
            "triggers": [
                {
                    "id": "plate",
                    "region": {"x": 32.0, "y": 0.0, "w": 16.0, "h": 16.0},
                    "script": [
                        {"kind": "lock_input"},
                        {"kind": "show_dialog", "params": {"text": "The floor sinks.", "seconds": 1.0}},
                        {"kind": "set_flag", "params": {"flag": "plate_done"}},
                        {"kind": "unlock_input"}
                    ]
                }
            ]
        }"#,
    );
    let mut clock = clock();

    director.stage_input(FrameInput::moving(Vec2::new(1.0, 0.0)));
    clock.frame(DT, &mut director);

    // Entered the plate this step; the script locked input mid-stride.
    assert_eq!(director.world().player.position.x, 32.0);
    assert!(director.scripts().running());
    assert!(director.world().input_locked);
    assert!(!director.world().game.flag_or("plate_done", false));

    // Locked: the held direction does nothing while the dialog runs.
    clock.frame(DT, &mut director);
    assert_eq!(director.world().player.position.x, 32.0);

    // Dialog expires after 1.0s total; the tail of the script runs and the
    // walk resumes. Standing on the plate does not refire it.
    for _ in 0..3 {
        clock.frame(DT, &mut director);
    }
    assert!(!director.scripts().running());
    assert!(director.world().game.flag_or("plate_done", false));

    clock.frame(DT, &mut director);
    assert!(director.world().player.position.x > 32.0);
    assert!(director.scripts().queued() == 0);
}

#[test]
fn a_stall_does_not_fast_forward_a_wait() {
    let mut director = director_from("{}");
    let mut clock = Clock::new(ClockConfig {
        fixed_dt: DT,
        max_frame_time: DT,
    });

    director.submit(vec![ScriptAction::Wait { seconds: 2.0 }], None);

    // Ten wall seconds clamp to one fixed step.
    let report = clock.frame(10.0, &mut director);
    assert_eq!(report.steps, 1);
    assert!(director.scripts().running());
    assert_eq!(director.scripts().wait_remaining(), 1.75);

    for _ in 0..7 {
        clock.frame(DT, &mut director);
    }
    assert!(!director.scripts().running());
}

#[test]
fn give_item_pauses_the_script_for_the_confirmation() {
    let mut director = director_from("{}");

    director.submit(
        vec![
            ScriptAction::GiveItem {
                item: "ember".to_string(),
                amount: 2,
            },
            ScriptAction::SetFlag {
                flag: "after_pickup".to_string(),
                value: true,
            },
        ],
        None,
    );

    assert_eq!(director.world().game.inventory.count("ember"), 2);
    assert_eq!(director.world().dialog.text(), Some("Received ember x2."));
    assert!(director.scripts().running());
    assert!(!director.world().game.flag_or("after_pickup", false));

    // 1.5s confirmation at the default config: six steps.
    for _ in 0..6 {
        director.simulate(DT);
    }
    assert!(!director.scripts().running());
    assert!(director.world().game.flag_or("after_pickup", false));
}

#[test]
fn defeat_runs_the_entity_script_and_removes_it() {
    let mut director = director_from(
        r#"{
            "entities": [
                {
                    "name": "slime",
                    "position": [24.0, 8.0],
                    "defeat_script": [
                        {"kind": "show_dialog", "params": {"text": "The slime dissolves.", "seconds": 0.5}},
                        {"kind": "add_variable", "params": {"variable": "kills"}},
                        {"kind": "remove_entity"}
                    ]
                }
            ]
        }"#,
    );
    let slime = director.world().entities.find_by_name("slime").unwrap();

    director.defeat(slime);
    assert!(director.scripts().running());
    assert_eq!(director.scripts().source(), Some(slime));
    assert!(director.world().entities.is_active(slime));

    director.simulate(DT);
    director.simulate(DT);
    assert!(!director.scripts().running());
    assert_eq!(director.world().game.number_or("kills", 0.0), 1.0);
    assert!(!director.world().entities.is_active(slime));
}

#[test]
fn reset_mid_cutscene_returns_to_the_seed() {
    let mut director = director_from(
        r#"{
            "player_spawn": "start",
            "spawn_points": {"start": [8.0, 8.0], "altar": [96.0, 96.0]}
        }"#,
    );

    director.submit(
        vec![
            ScriptAction::SetFlag {
                flag: "dirty".to_string(),
                value: true,
            },
            ScriptAction::Teleport {
                spawn: "altar".to_string(),
            },
            ScriptAction::LockInput,
            ScriptAction::Wait { seconds: 30.0 },
        ],
        None,
    );
    director.simulate(DT);
    assert!(director.scripts().running());
    assert_eq!(director.world().player.position, Vec2::new(96.0, 96.0));

    director.reset();
    assert!(!director.scripts().running());
    assert!(!director.world().input_locked);
    assert!(!director.world().game.flag_or("dirty", false));
    assert_eq!(director.world().player.position, Vec2::new(8.0, 8.0));

    // The world steps normally after the rebuild.
    director.simulate(DT);
    assert!(!director.scripts().running());
}
