//! Per-tick gameplay subsystems.
//!
//! Each subsystem advances exactly once per fixed step, in the order the
//! runtime's director dictates, and funnels any scripted reaction through
//! [`Interpreter::submit`](crate::script::Interpreter::submit). They all
//! follow the same two rules: check the input lock before accepting player
//! commands, and leave dialog and camera alone while a script is running.
pub mod combat;
pub mod player;
pub mod trigger;

pub use combat::{CombatState, ExpiredWindows};
pub use player::{FrameInput, PlayerSystem};
pub use trigger::{Activation, TriggerDef, TriggerSystem};
