//! The stage director: one owner for the world and every subsystem.
//!
//! Nothing here reads ambient state; the director holds the [`World`], the
//! interpreter, and the systems, and passes `&mut` down in a fixed order
//! each step. That order is the determinism contract: identical staged
//! inputs over identical steps produce identical worlds.

use harrow_core::{
    CombatState, EngineConfig, EntityId, ExpiredWindows, FrameInput, Interpreter, PlayerSystem,
    ScriptAction, TriggerSystem, World,
};
use tracing::debug;

use crate::clock::Step;

/// Owns the simulation and implements the clock's host trait.
///
/// The embedding host stages input once per frame with
/// [`Director::stage_input`]; the clock then calls [`Step::simulate`] zero
/// or more times. Held movement applies to every step of the frame, while
/// an interact press latches until the first step consumes it, so presses
/// landing on a zero-step frame are not lost.
#[derive(Clone, Debug)]
pub struct Director {
    config: EngineConfig,
    world: World,
    /// Pristine copy of the starting world, for [`Director::reset`].
    seed: World,
    scripts: Interpreter,
    triggers: TriggerSystem,
    combat: CombatState,
    staged: FrameInput,
    expired: ExpiredWindows,
    alpha: f32,
}

impl Director {
    pub fn new(world: World, triggers: TriggerSystem, config: EngineConfig) -> Self {
        Self {
            scripts: Interpreter::new(config.clone()),
            seed: world.clone(),
            world,
            triggers,
            combat: CombatState::new(),
            config,
            staged: FrameInput::none(),
            expired: ExpiredWindows::default(),
            alpha: 0.0,
        }
    }

    /// Stages the host's input for the coming steps. Movement replaces the
    /// previous direction; an interact press is sticky until consumed.
    pub fn stage_input(&mut self, input: FrameInput) {
        self.staged.move_dir = input.move_dir;
        self.staged.interact |= input.interact;
    }

    /// Hands a script straight to the interpreter, for hosts that inject
    /// scripts outside the trigger path.
    pub fn submit(&mut self, actions: Vec<ScriptAction>, source: Option<EntityId>) {
        self.scripts.submit(&mut self.world, actions, source);
    }

    /// Defeat hook for the embedding game's combat resolution.
    pub fn defeat(&mut self, id: EntityId) {
        self.combat.defeat(&mut self.world, &mut self.scripts, id);
    }

    /// Rebuilds the world from its seed and forgets every transient:
    /// running script, trigger bookkeeping, combat timers, staged input.
    pub fn reset(&mut self) {
        debug!("director reset to seed world");
        self.world = self.seed.clone();
        self.scripts.reset();
        self.triggers.reset();
        self.combat.reset();
        self.staged = FrameInput::none();
        self.expired = ExpiredWindows::default();
        self.alpha = 0.0;
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scripts(&self) -> &Interpreter {
        &self.scripts
    }

    pub fn triggers(&self) -> &TriggerSystem {
        &self.triggers
    }

    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    pub fn combat_mut(&mut self) -> &mut CombatState {
        &mut self.combat
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Combat windows that closed during the latest step.
    pub fn expired_windows(&self) -> &ExpiredWindows {
        &self.expired
    }

    /// The interpolation alpha from the latest render.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Copies the staged input for one step and consumes the press.
    fn take_step_input(&mut self) -> FrameInput {
        let input = self.staged;
        self.staged.interact = false;
        input
    }
}

impl Step for Director {
    /// One fixed step, in the contract order: script waits first, then
    /// player movement, triggers, combat timers, camera, dialog.
    fn simulate(&mut self, dt: f32) {
        let input = self.take_step_input();

        self.scripts.advance(&mut self.world, dt);
        PlayerSystem::update(&mut self.world, input, &self.config, dt);
        self.triggers
            .update(&mut self.world, &mut self.scripts, input, dt);
        self.expired = self.combat.update(dt);

        let player = self.world.player.position;
        self.world.camera.update(dt, player);
        if self.world.dialog.update(dt) {
            debug!("dialog timed out");
        }
    }

    fn render(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use harrow_core::{Activation, Rect, TriggerDef, Vec2};

    use super::*;

    const DT: f32 = 0.25;

    fn plate() -> TriggerDef {
        TriggerDef {
            id: "plate".to_string(),
            region: Rect::new(0.0, 0.0, 16.0, 16.0),
            activation: Activation::Interact,
            once: false,
            cooldown: 0.0,
            script: vec![ScriptAction::SetFlag {
                flag: "pressed".to_string(),
                value: true,
            }],
            source: None,
        }
    }

    fn director() -> Director {
        let mut world = World::new();
        world.player.position = Vec2::new(8.0, 8.0);
        Director::new(
            world,
            TriggerSystem::new(vec![plate()]),
            EngineConfig::default(),
        )
    }

    #[test]
    fn interact_press_latches_across_zero_step_frames() {
        let mut director = director();

        // The press arrives, but no step runs this frame.
        director.stage_input(FrameInput::pressing_interact());
        assert!(!director.world().game.flag_or("pressed", false));

        // The next frame's first step consumes it.
        director.simulate(DT);
        assert!(director.world().game.flag_or("pressed", false));
    }

    #[test]
    fn interact_press_fires_only_one_step() {
        let mut director = director();
        director.stage_input(FrameInput::pressing_interact());

        director.simulate(DT);
        director.world_mut().game.set_flag("pressed", false);

        // Consumed; holding nothing, later steps see no press.
        director.simulate(DT);
        assert!(!director.world().game.flag_or("pressed", false));
    }

    #[test]
    fn held_movement_applies_every_step() {
        let mut director = director();
        let speed = director.config().player_speed;
        director.stage_input(FrameInput::moving(Vec2::new(1.0, 0.0)));

        director.simulate(DT);
        director.simulate(DT);
        let expected = 8.0 + speed * DT * 2.0;
        assert!((director.world().player.position.x - expected).abs() < 1e-4);
    }

    #[test]
    fn script_wait_gates_movement_until_it_finishes() {
        let mut director = director();
        director.submit(
            vec![
                ScriptAction::LockInput,
                ScriptAction::Wait { seconds: DT },
                ScriptAction::UnlockInput,
            ],
            None,
        );
        director.stage_input(FrameInput::moving(Vec2::new(1.0, 0.0)));

        // The wait expires at the top of this step, draining unlock_input
        // before the player system looks at the gate.
        director.simulate(DT);
        assert!(!director.scripts().running());
        assert!(director.world().player.position.x > 8.0);
    }

    #[test]
    fn reset_restores_the_seed_world() {
        let mut director = director();
        director.submit(
            vec![ScriptAction::Wait { seconds: 100.0 }],
            None,
        );
        director.stage_input(FrameInput::moving(Vec2::new(1.0, 0.0)));
        director.simulate(DT);

        director.reset();
        assert_eq!(director.world().player.position, Vec2::new(8.0, 8.0));
        assert!(!director.scripts().running());
        assert_eq!(director.alpha(), 0.0);
    }

    #[test]
    fn identical_inputs_replay_to_identical_worlds() {
        let mut a = director();
        let mut b = a.clone();

        for step in 0..120 {
            let input = if step % 7 == 0 {
                FrameInput::pressing_interact()
            } else {
                FrameInput::moving(Vec2::new(0.6, -0.8))
            };
            a.stage_input(input);
            a.simulate(DT);
            b.stage_input(input);
            b.simulate(DT);
        }
        assert_eq!(a.world(), b.world());
    }
}
