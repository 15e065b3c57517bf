//! Combat timing windows.
//!
//! Hitboxes and damage math live with the embedding game; this module owns
//! the shared timers every combat interaction runs on, plus the defeat hook
//! that hands an enemy's script to the interpreter.

use tracing::debug;

use crate::script::Interpreter;
use crate::timer::TimerBank;
use crate::world::{EntityId, World};

/// Per-entity combat timers, all counting down in fixed steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatState {
    attack_window: TimerBank<EntityId>,
    knockback: TimerBank<EntityId>,
    invincibility: TimerBank<EntityId>,
    hit_flash: TimerBank<EntityId>,
}

/// Timer windows that closed during one fixed step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpiredWindows {
    pub attacks: Vec<EntityId>,
    pub knockbacks: Vec<EntityId>,
    pub invincibilities: Vec<EntityId>,
    pub hit_flashes: Vec<EntityId>,
}

impl CombatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an attack window; the entity counts as mid-swing until it
    /// closes.
    pub fn begin_attack(&mut self, id: EntityId, seconds: f32) {
        self.attack_window.set(id, seconds);
    }

    pub fn is_attacking(&self, id: EntityId) -> bool {
        self.attack_window.is_active(&id)
    }

    /// Registers a landed hit: knockback, invincibility frames, and the hit
    /// flash all start together. Ignored entirely while the target is still
    /// invincible; returns whether the hit registered.
    pub fn apply_hit(
        &mut self,
        target: EntityId,
        knockback_seconds: f32,
        invincibility_seconds: f32,
        flash_seconds: f32,
    ) -> bool {
        if self.invincibility.is_active(&target) {
            return false;
        }
        self.knockback.set(target, knockback_seconds);
        self.invincibility.set(target, invincibility_seconds);
        self.hit_flash.set(target, flash_seconds);
        true
    }

    pub fn is_invincible(&self, id: EntityId) -> bool {
        self.invincibility.is_active(&id)
    }

    pub fn in_knockback(&self, id: EntityId) -> bool {
        self.knockback.is_active(&id)
    }

    pub fn is_flashing(&self, id: EntityId) -> bool {
        self.hit_flash.is_active(&id)
    }

    /// Defeat: drops the entity's timers and hands its defeat script to the
    /// interpreter with the entity as source, so `remove_entity` inside the
    /// script resolves to it. Entities without a defeat script are
    /// deactivated on the spot. Unknown ids are ignored.
    pub fn defeat(&mut self, world: &mut World, scripts: &mut Interpreter, id: EntityId) {
        let Some(entity) = world.entities.get(id) else {
            debug!(id = ?id, "defeat of unknown entity ignored");
            return;
        };
        let script = entity.defeat_script.clone();
        debug!(id = ?id, name = %entity.name, "entity defeated");

        self.attack_window.remove(&id);
        self.knockback.remove(&id);
        self.invincibility.remove(&id);
        self.hit_flash.remove(&id);

        if script.is_empty() {
            world.entities.deactivate(id);
        } else {
            // Removal is the script's business, typically via remove_entity.
            scripts.submit(world, script, Some(id));
        }
    }

    /// One fixed step for every bank.
    pub fn update(&mut self, dt: f32) -> ExpiredWindows {
        ExpiredWindows {
            attacks: self.attack_window.tick(dt),
            knockbacks: self.knockback.tick(dt),
            invincibilities: self.invincibility.tick(dt),
            hit_flashes: self.hit_flash.tick(dt),
        }
    }

    pub fn reset(&mut self) {
        self.attack_window.clear();
        self.knockback.clear();
        self.invincibility.clear();
        self.hit_flash.clear();
    }
}
