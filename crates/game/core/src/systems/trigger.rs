//! Stage triggers: floor plates and interaction zones.

use std::collections::BTreeSet;

use tracing::debug;

use crate::script::{Interpreter, ScriptAction};
use crate::systems::FrameInput;
use crate::timer::TimerBank;
use crate::world::{EntityId, Rect, World};

/// How a trigger activates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Activation {
    /// Fires when the player enters the region.
    #[default]
    Auto,
    /// Fires when the player presses interact inside the region.
    Interact,
}

/// An editor-placed trigger region.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerDef {
    pub id: String,
    pub region: Rect,
    pub activation: Activation,
    /// Fire at most once per session.
    pub once: bool,
    /// Seconds before this trigger may fire again.
    pub cooldown: f32,
    pub script: Vec<ScriptAction>,
    /// Entity this trigger belongs to, if any. Submissions carry it as the
    /// script source, and the trigger goes dormant while the entity is
    /// inactive. Stage loading synthesizes one such trigger per entity with
    /// an interact script.
    pub source: Option<EntityId>,
}

/// Watches the player position and fires trigger scripts.
///
/// Auto triggers are edge-triggered on entry; standing still does not refire
/// them. Interact triggers are player commands and respect the input lock.
/// Fired scripts submit with the trigger's source entity; if another script
/// is running the submission appends to it, which is the intended overlap
/// behavior for a plate stepped on mid-cutscene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerSystem {
    defs: Vec<TriggerDef>,
    cooldowns: TimerBank<usize>,
    /// `once` triggers that already fired this session.
    spent: BTreeSet<usize>,
    /// Regions the player occupied last step, for entry edges.
    inside: BTreeSet<usize>,
}

impl TriggerSystem {
    pub fn new(defs: Vec<TriggerDef>) -> Self {
        Self {
            defs,
            cooldowns: TimerBank::new(),
            spent: BTreeSet::new(),
            inside: BTreeSet::new(),
        }
    }

    pub fn defs(&self) -> &[TriggerDef] {
        &self.defs
    }

    /// One fixed step.
    pub fn update(
        &mut self,
        world: &mut World,
        scripts: &mut Interpreter,
        input: FrameInput,
        dt: f32,
    ) {
        self.cooldowns.tick(dt);
        let player = world.player.position;

        let mut fired = Vec::new();
        for index in 0..self.defs.len() {
            let inside_now = self.defs[index].region.contains(player);
            let entered = inside_now && !self.inside.contains(&index);
            if inside_now {
                self.inside.insert(index);
            } else {
                self.inside.remove(&index);
            }

            // Entity-bound triggers die with their entity.
            if let Some(id) = self.defs[index].source
                && !world.entities.is_active(id)
            {
                continue;
            }

            let wants = match self.defs[index].activation {
                Activation::Auto => entered,
                Activation::Interact => inside_now && input.interact && !world.input_locked,
            };
            if !wants || self.spent.contains(&index) || self.cooldowns.is_active(&index) {
                continue;
            }
            fired.push(index);
        }

        for index in fired {
            let script = self.defs[index].script.clone();
            debug!(trigger = %self.defs[index].id, "trigger fired");
            if self.defs[index].once {
                self.spent.insert(index);
            }
            self.cooldowns.set(index, self.defs[index].cooldown);
            scripts.submit(world, script, self.defs[index].source);
        }
    }

    /// Forgets session bookkeeping: spent `once` triggers, cooldowns, and
    /// occupancy edges. Definitions stay.
    pub fn reset(&mut self) {
        self.cooldowns.clear();
        self.spent.clear();
        self.inside.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::world::Vec2;

    fn plate(id: &str, activation: Activation, once: bool, cooldown: f32) -> TriggerDef {
        TriggerDef {
            id: id.to_string(),
            region: Rect::new(0.0, 0.0, 16.0, 16.0),
            activation,
            once,
            cooldown,
            script: vec![ScriptAction::AddVariable {
                variable: "fires".to_string(),
                amount: 1.0,
            }],
            source: None,
        }
    }

    fn step(system: &mut TriggerSystem, world: &mut World, scripts: &mut Interpreter, input: FrameInput) {
        system.update(world, scripts, input, 1.0 / 60.0);
    }

    fn fires(world: &World) -> f64 {
        world.game.number_or("fires", 0.0)
    }

    #[test]
    fn auto_fires_on_entry_not_while_standing() {
        let mut world = World::new();
        let mut scripts = Interpreter::new(EngineConfig::default());
        let mut system = TriggerSystem::new(vec![plate("door", Activation::Auto, false, 0.0)]);

        world.player.position = Vec2::new(-5.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 0.0);

        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 1.0);

        // Standing inside does not refire.
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 1.0);

        // Leave and come back: fires again.
        world.player.position = Vec2::new(40.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 2.0);
    }

    #[test]
    fn cooldown_blocks_reentry_until_it_expires() {
        let mut world = World::new();
        let mut scripts = Interpreter::new(EngineConfig::default());
        let mut system = TriggerSystem::new(vec![plate("door", Activation::Auto, false, 1.0)]);

        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 1.0);

        // Bounce out and straight back in while cooling.
        world.player.position = Vec2::new(40.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 1.0);

        // Let the cooldown run out, then re-enter.
        world.player.position = Vec2::new(40.0, 8.0);
        for _ in 0..70 {
            step(&mut system, &mut world, &mut scripts, FrameInput::none());
        }
        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 2.0);
    }

    #[test]
    fn once_triggers_never_refire() {
        let mut world = World::new();
        let mut scripts = Interpreter::new(EngineConfig::default());
        let mut system = TriggerSystem::new(vec![plate("intro", Activation::Auto, true, 0.0)]);

        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        world.player.position = Vec2::new(40.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());

        assert_eq!(fires(&world), 1.0);

        // Until the session resets.
        system.reset();
        world.player.position = Vec2::new(40.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 2.0);
    }

    #[test]
    fn interact_requires_a_press_inside_while_unlocked() {
        let mut world = World::new();
        let mut scripts = Interpreter::new(EngineConfig::default());
        let mut system = TriggerSystem::new(vec![plate("sign", Activation::Interact, false, 0.0)]);
        world.player.position = Vec2::new(8.0, 8.0);

        // Standing inside without pressing: nothing.
        step(&mut system, &mut world, &mut scripts, FrameInput::none());
        assert_eq!(fires(&world), 0.0);

        // Pressing while the input lock is held: nothing.
        world.input_locked = true;
        step(&mut system, &mut world, &mut scripts, FrameInput::pressing_interact());
        assert_eq!(fires(&world), 0.0);

        world.input_locked = false;
        step(&mut system, &mut world, &mut scripts, FrameInput::pressing_interact());
        assert_eq!(fires(&world), 1.0);
    }

    #[test]
    fn entity_bound_trigger_sources_its_entity_and_dies_with_it() {
        use crate::world::EntityState;

        let mut world = World::new();
        let chest = world.entities.spawn(EntityState::new("chest", Vec2::ZERO));
        let mut scripts = Interpreter::new(EngineConfig::default());
        let mut def = plate("chest", Activation::Interact, false, 0.0);
        def.source = Some(chest);
        def.script = vec![
            ScriptAction::AddVariable {
                variable: "fires".to_string(),
                amount: 1.0,
            },
            ScriptAction::RemoveEntity,
        ];
        let mut system = TriggerSystem::new(vec![def]);
        world.player.position = Vec2::new(8.0, 8.0);

        // The script ran with the chest as source, so remove_entity took it.
        step(&mut system, &mut world, &mut scripts, FrameInput::pressing_interact());
        assert_eq!(fires(&world), 1.0);
        assert!(!world.entities.is_active(chest));

        // Dormant now: pressing again does nothing.
        step(&mut system, &mut world, &mut scripts, FrameInput::pressing_interact());
        assert_eq!(fires(&world), 1.0);
    }

    #[test]
    fn firing_while_a_script_runs_appends() {
        let mut world = World::new();
        let mut scripts = Interpreter::new(EngineConfig::default());
        let mut system = TriggerSystem::new(vec![plate("door", Activation::Auto, false, 0.0)]);

        scripts.submit(&mut world, vec![ScriptAction::Wait { seconds: 1.0 }], None);
        assert!(scripts.running());

        world.player.position = Vec2::new(8.0, 8.0);
        step(&mut system, &mut world, &mut scripts, FrameInput::none());

        // Appended behind the wait, not executed yet.
        assert_eq!(fires(&world), 0.0);
        assert_eq!(scripts.queued(), 1);

        scripts.advance(&mut world, 1.0);
        assert_eq!(fires(&world), 1.0);
    }
}
