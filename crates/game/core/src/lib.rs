//! Deterministic gameplay core: shared state, scripted actions, and the
//! per-tick subsystems.
//!
//! `harrow-core` owns everything that advances in fixed simulation steps and
//! nothing that touches wall time or disk. The runtime crate schedules the
//! steps and the content crate decodes editor data into these types. Nothing
//! here is global: the runtime's director owns one [`world::World`] and one
//! [`script::Interpreter`] and passes both down explicitly each step.
pub mod config;
pub mod script;
pub mod state;
pub mod systems;
pub mod timer;
pub mod world;

pub use config::EngineConfig;
pub use script::{ActionKind, ActionSignal, Interpreter, ScriptAction};
pub use state::{GameState, Inventory, ItemSlot, Value};
pub use systems::{
    Activation, CombatState, ExpiredWindows, FrameInput, PlayerSystem, TriggerDef, TriggerSystem,
};
pub use timer::{Countdown, TimerBank};
pub use world::{
    Camera, CameraMode, DialogBox, EntityId, EntityState, EntityTable, Player, Rect, Vec2, World,
};
