//! The live stage: player, entities, spawn points, camera, dialog.
//!
//! [`World`] is the single aggregate every subsystem and the interpreter
//! mutate. The runtime's director owns exactly one and hands it down by
//! `&mut`; nothing reaches it through a global.
pub mod camera;
pub mod dialog;
pub mod entity;

pub use camera::{Camera, CameraMode};
pub use dialog::DialogBox;
pub use entity::{EntityId, EntityState, EntityTable};

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

use crate::state::GameState;

/// A point in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear blend toward `other`; `t` in `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned region in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Closed on the min edges, open on the max edges, so adjacent trigger
    /// regions never both claim a point on their shared border.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// The player pawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Player {
    pub position: Vec2,
}

/// Everything the per-tick subsystems and the script interpreter share.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    pub game: GameState,
    pub player: Player,
    pub entities: EntityTable,
    pub spawn_points: BTreeMap<String, Vec2>,
    pub camera: Camera,
    pub dialog: DialogBox,
    /// Player command gate. Scripts set this; every subsystem that accepts
    /// player commands checks it before acting.
    pub input_locked: bool,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }
}
