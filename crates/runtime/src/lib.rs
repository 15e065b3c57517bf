//! Real-time runtime for the scripted stage simulation.
//!
//! This crate owns wall-clock time and turns it into deterministic fixed
//! steps. [`Clock`] accumulates frame time and calls its host's
//! `simulate`/`render`; [`Director`] is that host, owning the world and the
//! per-step subsystem order; [`SessionStore`] persists progress between runs.
//!
//! Modules are organized by responsibility:
//! - [`clock`] hosts the fixed-timestep loop and the FPS window
//! - [`director`] wires the core subsystems into one step function
//! - [`session`] saves and loads progress as JSON files
//! - [`error`] carries the boundary error type; the simulation path itself
//!   never returns `Result`
pub mod clock;
pub mod director;
pub mod error;
pub mod session;

pub use clock::{Clock, ClockConfig, FrameReport, Step, StopHandle};
pub use director::Director;
pub use error::{Result, RuntimeError};
pub use session::SessionStore;
