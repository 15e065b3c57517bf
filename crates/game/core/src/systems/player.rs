//! Player commands and the input gate.

use crate::config::EngineConfig;
use crate::world::{Vec2, World};

/// Player commands staged by the host for one fixed step.
///
/// `move_dir` is the held direction from the host's key state, normalized by
/// the host; zero means no movement. `interact` is a press, not a hold: the
/// runtime latches it until a fixed step consumes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub move_dir: Vec2,
    pub interact: bool,
}

impl FrameInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn moving(dir: Vec2) -> Self {
        Self {
            move_dir: dir,
            interact: false,
        }
    }

    pub fn pressing_interact() -> Self {
        Self {
            move_dir: Vec2::ZERO,
            interact: true,
        }
    }
}

/// Applies held movement while input is unlocked.
///
/// Collision and animation are the embedding game's business; this system
/// owns only the gate and the walk itself.
pub struct PlayerSystem;

impl PlayerSystem {
    pub fn update(world: &mut World, input: FrameInput, config: &EngineConfig, dt: f32) {
        if world.input_locked {
            return;
        }
        if input.move_dir == Vec2::ZERO {
            return;
        }
        world.player.position =
            world.player.position + input.move_dir * (config.player_speed * dt);
    }
}
