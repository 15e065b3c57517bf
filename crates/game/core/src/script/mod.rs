//! Editor-authored scripts and the interpreter that runs them.
pub mod action;
pub mod interpreter;
pub mod signal;

pub use action::{ActionKind, ScriptAction};
pub use interpreter::Interpreter;
pub use signal::ActionSignal;
