//! Script-driven camera: player follow and eased pans.

use super::Vec2;

/// What the camera is doing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraMode {
    /// Track the player every step.
    Follow,
    /// Eased pan from `from` to `to`; holds at `to` once `elapsed` reaches
    /// `seconds`, until a script reattaches the camera.
    Pan {
        from: Vec2,
        to: Vec2,
        seconds: f32,
        elapsed: f32,
    },
}

/// The single stage camera.
///
/// Scripts own mode changes; while a script is running nothing else should
/// redirect the camera. The pan curve is quadratic ease-in-out, matching the
/// editor's preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    mode: CameraMode,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            mode: CameraMode::Follow,
        }
    }
}

impl Camera {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            mode: CameraMode::Follow,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn is_following(&self) -> bool {
        matches!(self.mode, CameraMode::Follow)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.mode, CameraMode::Pan { .. })
    }

    /// Detaches from the player and starts an eased pan from the current
    /// position. Non-positive durations snap straight to the destination.
    pub fn pan_to(&mut self, to: Vec2, seconds: f32) {
        if seconds <= 0.0 {
            self.position = to;
            self.mode = CameraMode::Pan {
                from: to,
                to,
                seconds: 0.0,
                elapsed: 0.0,
            };
            return;
        }
        self.mode = CameraMode::Pan {
            from: self.position,
            to,
            seconds,
            elapsed: 0.0,
        };
    }

    /// Reattaches to the player.
    pub fn follow(&mut self) {
        self.mode = CameraMode::Follow;
    }

    /// One fixed step. Follow snaps to the player; a pan advances its tween
    /// and parks at the destination.
    pub fn update(&mut self, dt: f32, player: Vec2) {
        match &mut self.mode {
            CameraMode::Follow => self.position = player,
            CameraMode::Pan {
                from,
                to,
                seconds,
                elapsed,
            } => {
                if *seconds > 0.0 {
                    *elapsed = (*elapsed + dt).min(*seconds);
                    let t = *elapsed / *seconds;
                    self.position = from.lerp(*to, ease_in_out(t));
                } else {
                    self.position = *to;
                }
            }
        }
    }
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
