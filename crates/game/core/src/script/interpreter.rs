//! The suspendable script interpreter.
//!
//! Scripts are flat action lists authored in the editor. Submitting one
//! drains it synchronously until an action suspends (dialog, waits, camera
//! pans) or a failed check aborts it; the director then feeds fixed steps to
//! [`Interpreter::advance`] until the wait expires and draining resumes in
//! that same step. One script runs at a time. Submissions that arrive while
//! one is running append to its tail and keep the original source entity.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::script::{ActionSignal, ScriptAction};
use crate::world::{EntityId, Vec2, World};

/// Where the interpreter is between fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// No script active.
    Idle,
    /// Executing queued actions; only ever observed from inside `submit` or
    /// `advance`.
    Draining,
    /// Parked until `remaining` simulation seconds have elapsed.
    Suspended { remaining: f32 },
}

/// Runs one editor-authored script at a time against the shared world.
#[derive(Clone, Debug)]
pub struct Interpreter {
    queue: VecDeque<ScriptAction>,
    phase: Phase,
    source: Option<EntityId>,
    config: EngineConfig,
}

impl Interpreter {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            phase: Phase::Idle,
            source: None,
            config,
        }
    }

    /// `true` while a script is executing or suspended.
    pub fn running(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Seconds left on the current suspension; zero when not suspended.
    pub fn wait_remaining(&self) -> f32 {
        match self.phase {
            Phase::Suspended { remaining } => remaining,
            _ => 0.0,
        }
    }

    /// The entity the running script belongs to, recorded at the submission
    /// that started it. Appends never change it.
    pub fn source(&self) -> Option<EntityId> {
        self.source
    }

    /// Actions queued but not yet executed.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Hands a script to the interpreter.
    ///
    /// Idle: the list becomes the live script and drains immediately, so a
    /// script of all-`Continue` actions is finished before this returns.
    /// Running: the list appends to the tail and the original source stands.
    ///
    /// Calling this from inside an executing action's own effect is a
    /// programmer error and is not defended.
    pub fn submit(
        &mut self,
        world: &mut World,
        actions: Vec<ScriptAction>,
        source: Option<EntityId>,
    ) {
        if actions.is_empty() {
            return;
        }
        if self.running() {
            debug!(appended = actions.len(), "script running, queueing at tail");
            self.queue.extend(actions);
            return;
        }
        debug!(count = actions.len(), source = ?source, "script started");
        self.queue = actions.into();
        self.source = source;
        self.phase = Phase::Draining;
        self.drain(world);
    }

    /// Advances the suspension by one fixed step. The step the timer crosses
    /// zero it clamps there and draining resumes within this same call.
    pub fn advance(&mut self, world: &mut World, dt: f32) {
        let Phase::Suspended { remaining } = &mut self.phase else {
            return;
        };
        *remaining = (*remaining - dt).max(0.0);
        if *remaining > 0.0 {
            return;
        }
        self.phase = Phase::Draining;
        self.drain(world);
    }

    /// Drops the running script and clears the queue. Pair with a world
    /// rebuild; effects already applied are not undone.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.phase = Phase::Idle;
        self.source = None;
    }

    fn drain(&mut self, world: &mut World) {
        while let Some(action) = self.queue.pop_front() {
            match self.execute(world, &action) {
                ActionSignal::Abort => {
                    debug!(
                        kind = action.kind_name(),
                        dropped = self.queue.len(),
                        "script aborted by failed check"
                    );
                    self.queue.clear();
                    break;
                }
                signal => {
                    if let Some(seconds) = signal.suspends_for() {
                        self.phase = Phase::Suspended { remaining: seconds };
                        return;
                    }
                }
            }
        }
        self.finish(world);
    }

    /// End of script, completed or aborted. Input is force-unlocked so a
    /// script that locked it and bailed out early can never strand the
    /// player.
    fn finish(&mut self, world: &mut World) {
        self.phase = Phase::Idle;
        self.source = None;
        world.input_locked = false;
    }

    fn execute(&mut self, world: &mut World, action: &ScriptAction) -> ActionSignal {
        match action {
            ScriptAction::ShowDialog { text, seconds } => {
                world.dialog.show(text.clone(), *seconds);
                ActionSignal::Suspend(*seconds)
            }
            ScriptAction::Wait { seconds } => ActionSignal::Suspend(*seconds),
            ScriptAction::SetFlag { flag, value } => {
                world.game.set_flag(flag, *value);
                ActionSignal::Continue
            }
            ScriptAction::SetVariable { variable, value } => {
                world.game.set_variable(variable, value.clone());
                ActionSignal::Continue
            }
            ScriptAction::AddVariable { variable, amount } => {
                world.game.add_number(variable, *amount);
                ActionSignal::Continue
            }
            ScriptAction::CheckFlag { flag, expected } => {
                if world.game.flag_or(flag, false) == *expected {
                    ActionSignal::Continue
                } else {
                    ActionSignal::Abort
                }
            }
            ScriptAction::CheckItem { item, amount } => {
                if world.game.inventory.has(item, *amount) {
                    ActionSignal::Continue
                } else {
                    ActionSignal::Abort
                }
            }
            ScriptAction::GiveItem { item, amount } => {
                world.game.inventory.add(item, *amount);
                let seconds = self.config.item_message_seconds;
                world.dialog.show(pickup_message(item, *amount), seconds);
                ActionSignal::Suspend(seconds)
            }
            ScriptAction::RemoveItem { item, amount } => {
                world.game.inventory.remove(item, *amount);
                ActionSignal::Continue
            }
            ScriptAction::Teleport { spawn } => {
                match world.spawn_points.get(spawn) {
                    Some(point) => world.player.position = *point,
                    None => warn!(spawn = %spawn, "teleport to unknown spawn point ignored"),
                }
                ActionSignal::Continue
            }
            ScriptAction::LockInput => {
                world.input_locked = true;
                ActionSignal::Continue
            }
            ScriptAction::UnlockInput => {
                world.input_locked = false;
                ActionSignal::Continue
            }
            ScriptAction::CameraPan { x, y, seconds } => {
                world.camera.pan_to(Vec2::new(*x, *y), *seconds);
                ActionSignal::Suspend(*seconds)
            }
            ScriptAction::CameraFollow => {
                world.camera.follow();
                ActionSignal::Continue
            }
            ScriptAction::RemoveEntity => {
                match self.source {
                    Some(id) => {
                        // Absent or already-removed sources are fine.
                        world.entities.deactivate(id);
                    }
                    None => debug!("remove_entity with no source entity"),
                }
                ActionSignal::Continue
            }
            ScriptAction::Unknown { kind } => {
                warn!(kind = %kind, "unknown script action kind skipped");
                ActionSignal::Continue
            }
        }
    }
}

fn pickup_message(item: &str, amount: u32) -> String {
    if amount == 1 {
        format!("Received {item}.")
    } else {
        format!("Received {item} x{amount}.")
    }
}
